//! TUI Pause (workspace facade crate).
//!
//! This package exposes `tui_pause::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_pause_core as core;
pub use tui_pause_input as input;
pub use tui_pause_term as term;
pub use tui_pause_types as types;
