//! The mode abstraction the host schedules.

use std::time::Duration;

use crate::error::PauseError;
use crate::input::FrameInput;
use crate::term::FrameBuffer;
use crate::types::ModeId;

/// A game mode.
///
/// The host keeps modes on a stack and, once per frame, calls `update` then
/// `render` on the top one. `reset` runs each time a mode becomes the top of
/// the stack, including when the mode above it is popped.
pub trait GameMode {
    /// Which mode this is.
    fn id(&self) -> ModeId;

    /// Prepare for (re)activation.
    fn reset(&mut self) -> Result<(), PauseError>;

    /// Advance one frame.
    fn update(&mut self, elapsed: Duration, input: &FrameInput) -> Result<(), PauseError>;

    /// Draw the current frame. Must not change mode state.
    fn render(&self, fb: &mut FrameBuffer);

    /// Rebuild any text that depends on the current language.
    fn reload_translated_texts(&mut self) {}
}
