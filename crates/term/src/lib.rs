//! Terminal rendering layer for the pause mode.
//!
//! Everything renders into a simple framebuffer that can be flushed to a
//! terminal backend, kept as a frozen backdrop, or inspected in tests.
//!
//! - [`fb`]: framebuffer, cell styles, tint compositing
//! - [`text`]: validated single-line labels
//! - [`option_box`]: the selectable option list widget
//! - [`renderer`]: crossterm presentation with diffing

pub mod fb;
pub mod option_box;
pub mod renderer;
pub mod text;

pub use tui_pause_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use option_box::{OptionBox, OptionEntry, MAX_OPTIONS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::TextImage;
