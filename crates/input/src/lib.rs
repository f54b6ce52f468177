//! Terminal input module (mode-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::MenuInput`] and gathers them
//! into a per-frame [`FrameInput`] that modes consume.

pub mod frame;
pub mod map;

pub use tui_pause_types as types;

pub use frame::{FrameInput, MAX_FRAME_INPUTS};
pub use map::{handle_key_event, is_interrupt};
