//! Core mode logic - the pause/quit mode and the services it talks to
//!
//! This crate holds the only state machine of the workspace. It has **no
//! direct I/O**: the screen, audio, mode stack, translations and process exit
//! are reached through the traits in [`services`], which makes it:
//!
//! - **Testable**: every service can be replaced by a fake
//! - **Portable**: the same mode runs under the terminal host or a script
//! - **Single-threaded**: shared service handles use `Rc`, not locks
//!
//! # Module Structure
//!
//! - [`pause`]: the pause mode state machine
//! - [`mode`]: the [`GameMode`] trait hosts schedule
//! - [`services`]: boundary traits plus shared-handle implementations
//! - [`locale`]: translation providers (identity and JSON catalog)
//! - [`config`]: environment-driven configuration
//! - [`error`]: the [`PauseError`] type
//!
//! # Pause Rules
//!
//! - **Plain pause**: dimmed backdrop plus a "Paused" label; quit trigger
//!   opens the quit prompt, pause key resumes
//! - **Quit prompt**: Quit Game, Quit to Main Menu, Cancel; a second quit
//!   trigger exits immediately
//! - **One activation**: only the first confirm of an activation is acted on
//! - **Audio**: muted on construction when requested, restored on resume or
//!   return to the main menu
//! - **Idle yield**: frames without input sleep briefly (bounded)
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_pause_core::{
//!     ExitFlag, IdentityLocale, LastFrame, ModeRequests, PauseConfig, PauseMode, Services,
//!     SharedVolume,
//! };
//! use tui_pause_input::FrameInput;
//! use tui_pause_term::FrameBuffer;
//! use tui_pause_types::{MenuInput, PauseState};
//!
//! let frame = LastFrame::new();
//! frame.store(&FrameBuffer::new(40, 10));
//! let exit = ExitFlag::new();
//!
//! let services = Services {
//!     capture: Box::new(frame.clone()),
//!     volume: Box::new(SharedVolume::new(1.0)),
//!     modes: Box::new(ModeRequests::new()),
//!     locale: Box::new(IdentityLocale),
//!     system: Box::new(exit.clone()),
//! };
//! let config = PauseConfig::default().with_idle_ms(0);
//!
//! let mut pause = PauseMode::new(false, false, services, &config);
//! pause.reset().unwrap();
//! assert_eq!(pause.state(), PauseState::PlainPause);
//!
//! let quit = FrameInput::from_inputs(&[MenuInput::Quit]);
//! pause.update(Duration::ZERO, &quit).unwrap();
//! assert_eq!(pause.state(), PauseState::QuitPrompt);
//!
//! pause.update(Duration::ZERO, &quit).unwrap();
//! assert!(exit.is_requested());
//! ```

pub mod config;
pub mod error;
pub mod locale;
pub mod mode;
pub mod pause;
pub mod services;

pub use tui_pause_input as input;
pub use tui_pause_term as term;
pub use tui_pause_types as types;

pub use config::PauseConfig;
pub use error::PauseError;
pub use locale::{Catalog, IdentityLocale};
pub use mode::GameMode;
pub use pause::PauseMode;
pub use services::{
    ExitFlag, FrameCapture, LastFrame, Locale, ModeRequests, ModeStack, Services, SharedVolume,
    StackOp, System, Volume,
};
