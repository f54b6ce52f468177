//! Per-frame input collection.
//!
//! The host drains terminal events once per frame into a [`FrameInput`] and
//! hands it to the active mode. Only key presses count; terminal auto-repeat
//! and release events are dropped so one physical press is one input.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::MenuInput;

/// Maximum inputs kept per frame. Extra presses in the same frame are dropped.
pub const MAX_FRAME_INPUTS: usize = 16;

/// Menu inputs pressed during one frame, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pressed: ArrayVec<MenuInput, MAX_FRAME_INPUTS>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of inputs (scripted hosts and tests).
    pub fn from_inputs(inputs: &[MenuInput]) -> Self {
        let mut frame = Self::new();
        for &input in inputs {
            frame.push(input);
        }
        frame
    }

    /// Record an input. Returns false when the frame is full.
    pub fn push(&mut self, input: MenuInput) -> bool {
        self.pressed.try_push(input).is_ok()
    }

    /// Map and record a terminal key event. Returns the recorded input.
    pub fn push_key_event(&mut self, key: KeyEvent) -> Option<MenuInput> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let input = handle_key_event(key)?;
        if self.push(input) {
            Some(input)
        } else {
            None
        }
    }

    pub fn contains(&self, input: MenuInput) -> bool {
        self.pressed.contains(&input)
    }

    pub fn iter(&self) -> impl Iterator<Item = MenuInput> + '_ {
        self.pressed.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
