//! Pre-rendered text labels.

use anyhow::{bail, Result};

use crate::fb::{CellStyle, FrameBuffer};

/// A validated, styled line of text ready to be stamped into a framebuffer.
///
/// Construction rejects anything a terminal cell cannot display as a single
/// glyph (control characters, newlines), so drawing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextImage {
    text: String,
    style: CellStyle,
    width: u16,
}

impl TextImage {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Result<Self> {
        let text = text.into();
        if let Some(ch) = text.chars().find(|c| c.is_control()) {
            bail!("text {:?} contains control character {:?}", text, ch);
        }
        let count = text.chars().count();
        let Ok(width) = u16::try_from(count) else {
            bail!("text is too wide for a terminal line ({} chars)", count);
        };
        Ok(Self { text, style, width })
    }

    /// A label with no glyphs.
    pub fn blank(style: CellStyle) -> Self {
        Self {
            text: String::new(),
            style,
            width: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> CellStyle {
        self.style
    }

    /// Width in terminal columns, counted as one column per `char`.
    ///
    /// Full-width glyphs (CJK, most emoji) occupy two columns on screen, so
    /// labels made of them are measured short and centered left of middle.
    /// The framebuffer stores one `char` per cell either way.
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn draw_into(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        fb.put_str(x, y, &self.text, self.style);
    }

    pub fn draw_with_style(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        fb.put_str(x, y, &self.text, style);
    }

    /// Draw horizontally centered on row `y`.
    pub fn draw_centered(&self, fb: &mut FrameBuffer, y: u16) {
        let x = fb.width().saturating_sub(self.width) / 2;
        self.draw_into(fb, x, y);
    }
}
