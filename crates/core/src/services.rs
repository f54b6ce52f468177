//! Boundary services a mode talks to.
//!
//! Each service is a small trait so modes can be driven by the real host or by
//! fakes in tests. The concrete types at the bottom are the single-threaded,
//! shared-handle implementations the demo host uses: every clone of a handle
//! sees the same state, which is how the host observes what a mode requested.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use crate::error::PauseError;
use crate::term::FrameBuffer;
use crate::types::ModeId;

/// Snapshot of the currently displayed frame.
pub trait FrameCapture {
    fn capture(&mut self) -> Result<FrameBuffer, PauseError>;
}

/// Audio output level.
pub trait Volume {
    fn get(&self) -> f32;
    fn set(&mut self, level: f32);
}

/// The host's stack of active modes.
///
/// `pop` is only ever called by the mode on top of the stack, on itself.
pub trait ModeStack {
    fn push(&mut self, mode: ModeId);
    fn pop(&mut self);
    fn clear(&mut self);
}

/// Translated strings, looked up by their English text.
pub trait Locale {
    fn translate(&self, key: &str) -> Result<String, PauseError>;
}

/// Process-level control.
pub trait System {
    /// Ask the host to terminate the application after this frame.
    fn request_exit(&mut self);
}

/// Everything a mode needs from the outside world.
pub struct Services {
    pub capture: Box<dyn FrameCapture>,
    pub volume: Box<dyn Volume>,
    pub modes: Box<dyn ModeStack>,
    pub locale: Box<dyn Locale>,
    pub system: Box<dyn System>,
}

/// Last frame presented by the host, shared with capture consumers.
#[derive(Debug, Clone, Default)]
pub struct LastFrame {
    frame: Rc<RefCell<Option<FrameBuffer>>>,
}

impl LastFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the frame that was just presented.
    pub fn store(&self, fb: &FrameBuffer) {
        let mut slot = self.frame.borrow_mut();
        match slot.as_mut() {
            Some(prev) => prev.clone_from(fb),
            None => *slot = Some(fb.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frame.borrow().is_none()
    }
}

impl FrameCapture for LastFrame {
    fn capture(&mut self) -> Result<FrameBuffer, PauseError> {
        self.frame
            .borrow()
            .clone()
            .ok_or_else(|| PauseError::Capture("no frame has been presented yet".to_string()))
    }
}

/// Master volume shared between the host and its modes.
#[derive(Debug, Clone)]
pub struct SharedVolume {
    level: Rc<Cell<f32>>,
}

impl SharedVolume {
    pub fn new(level: f32) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
        }
    }
}

impl Default for SharedVolume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Volume for SharedVolume {
    fn get(&self) -> f32 {
        self.level.get()
    }

    fn set(&mut self, level: f32) {
        self.level.set(level);
    }
}

/// A mode stack mutation requested during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Push(ModeId),
    Pop,
    Clear,
}

/// Mode stack that records requests for the host to apply after `update`.
///
/// Modes cannot own the stack they live on, so they queue operations here
/// and the host drains them between `update` and `render`.
#[derive(Debug, Clone, Default)]
pub struct ModeRequests {
    ops: Rc<RefCell<Vec<StackOp>>>,
}

impl ModeRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all pending operations in request order.
    pub fn take(&self) -> Vec<StackOp> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }

    /// Pending operations, without draining them.
    pub fn pending(&self) -> Vec<StackOp> {
        self.ops.borrow().clone()
    }

    fn record(&self, op: StackOp) {
        debug!("mode stack request: {:?}", op);
        self.ops.borrow_mut().push(op);
    }
}

impl ModeStack for ModeRequests {
    fn push(&mut self, mode: ModeId) {
        self.record(StackOp::Push(mode));
    }

    fn pop(&mut self) {
        self.record(StackOp::Pop);
    }

    fn clear(&mut self) {
        self.record(StackOp::Clear);
    }
}

/// Exit request flag checked by the host loop.
#[derive(Debug, Clone, Default)]
pub struct ExitFlag {
    requested: Rc<Cell<bool>>,
}

impl ExitFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}

impl System for ExitFlag {
    fn request_exit(&mut self) {
        self.requested.set(true);
    }
}
