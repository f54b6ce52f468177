//! Vertical list of selectable options with a highlight cursor.

use anyhow::{bail, Result};
use arrayvec::ArrayVec;

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::text::TextImage;
use crate::types::Direction;

/// Maximum number of entries an [`OptionBox`] can hold.
pub const MAX_OPTIONS: usize = 8;

const CURSOR: &str = "> ";
const CURSOR_W: u16 = 2;

/// A labelled entry with its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry<T> {
    pub label: TextImage,
    pub id: T,
}

/// A fixed-capacity option menu.
///
/// Entries keep the order they were given in. The highlight never wraps:
/// navigating past either end leaves it where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionBox<T> {
    entries: ArrayVec<OptionEntry<T>, MAX_OPTIONS>,
    selection: usize,
    highlight: CellStyle,
}

fn default_highlight() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(40, 40, 60),
        bold: true,
        dim: false,
    }
}

impl<T: Copy + PartialEq> OptionBox<T> {
    /// Build a menu from ordered `(label, id)` pairs.
    ///
    /// Fails on an empty list or more than [`MAX_OPTIONS`] entries.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TextImage, T)>,
    {
        let mut out = ArrayVec::new();
        for (label, id) in entries {
            if out.try_push(OptionEntry { label, id }).is_err() {
                bail!("option box holds at most {} entries", MAX_OPTIONS);
            }
        }
        if out.is_empty() {
            bail!("option box needs at least one entry");
        }
        Ok(Self {
            entries: out,
            selection: 0,
            highlight: default_highlight(),
        })
    }

    pub fn with_highlight(mut self, highlight: CellStyle) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OptionEntry<T>] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Index of the highlighted entry.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Move the highlight to `index`. Returns false when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.selection = index;
        true
    }

    /// Move the highlight one step. Returns whether it moved.
    pub fn navigate(&mut self, dir: Direction) -> bool {
        match dir {
            Direction::Up if self.selection > 0 => {
                self.selection -= 1;
                true
            }
            Direction::Down if self.selection + 1 < self.entries.len() => {
                self.selection += 1;
                true
            }
            _ => false,
        }
    }

    /// Identity of the highlighted entry.
    pub fn confirm(&self) -> T {
        self.entries[self.selection].id
    }

    pub fn label(&self, index: usize) -> Option<&TextImage> {
        self.entries.get(index).map(|e| &e.label)
    }

    /// Replace the label of entry `index`, keeping its identity and the highlight.
    pub fn set_label(&mut self, index: usize, label: TextImage) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.label = label;
                true
            }
            None => false,
        }
    }

    /// Columns needed to draw the widget, cursor included.
    pub fn width(&self) -> u16 {
        let widest = self.entries.iter().map(|e| e.label.width()).max().unwrap_or(0);
        widest.saturating_add(CURSOR_W)
    }

    /// Rows needed to draw the widget.
    pub fn height(&self) -> u16 {
        self.entries.len() as u16
    }

    pub fn render_into(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        for (i, entry) in self.entries.iter().enumerate() {
            let row = y.saturating_add(i as u16);
            let label_x = x.saturating_add(CURSOR_W);
            if i == self.selection {
                fb.put_str(x, row, CURSOR, self.highlight);
                entry.label.draw_with_style(fb, label_x, row, self.highlight);
            } else {
                entry.label.draw_into(fb, label_x, row);
            }
        }
    }

    /// Draw centered in the framebuffer.
    pub fn render_centered(&self, fb: &mut FrameBuffer) {
        let x = fb.width().saturating_sub(self.width()) / 2;
        let y = fb.height().saturating_sub(self.height()) / 2;
        self.render_into(fb, x, y);
    }
}
