//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the pause mode.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (mode logic, terminal rendering, input mapping).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DEFAULT_IDLE_SLEEP_MS` | 10 | Idle yield when a frame consumed no input |
//! | `MAX_IDLE_SLEEP_MS` | 50 | Upper bound for any configured idle yield |
//!
//! # Translation Keys
//!
//! The pause mode asks its locale provider for exactly four strings:
//! [`TEXT_PAUSED`] plus one caption per [`QuitOption`] (see
//! [`QuitOption::text_key`]).
//!
//! # Examples
//!
//! ```
//! use tui_pause_types::{MenuInput, ModeId, QuitOption};
//!
//! // Quit options always come in the same order.
//! assert_eq!(QuitOption::ALL[0], QuitOption::QuitGame);
//! assert_eq!(QuitOption::ALL[2], QuitOption::Cancel);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(QuitOption::from_str("quitToMainMenu"), Some(QuitOption::QuitToMainMenu));
//! assert_eq!(MenuInput::from_str("confirm"), Some(MenuInput::Confirm));
//!
//! assert_eq!(ModeId::Boot.as_str(), "boot");
//! ```

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Idle yield applied by the pause mode when a frame consumed no input.
pub const DEFAULT_IDLE_SLEEP_MS: u32 = 10;

/// Hard cap on the idle yield, so the host can keep servicing window events.
pub const MAX_IDLE_SLEEP_MS: u32 = 50;

/// Default backdrop dim strength in percent of the original brightness.
///
/// Matches a `(0.35, 0.35, 0.35)` multiply tint.
pub const DEFAULT_DIM_PERCENT: u8 = 35;

/// Translation key for the plain pause label.
pub const TEXT_PAUSED: &str = "Paused";

/// Translation key for the "Quit Game" option.
pub const TEXT_QUIT_GAME: &str = "Quit Game";

/// Translation key for the "Quit to Main Menu" option.
pub const TEXT_QUIT_TO_MAIN_MENU: &str = "Quit to Main Menu";

/// Translation key for the "Cancel" option.
pub const TEXT_CANCEL: &str = "Cancel";


/// The three choices of the quit prompt.
///
/// The order of [`QuitOption::ALL`] is the order the menu presents them in:
/// - **QuitGame**: exit the application entirely
/// - **QuitToMainMenu**: empty the mode stack and return to boot mode
/// - **Cancel**: resume whatever mode was paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuitOption {
    QuitGame,
    QuitToMainMenu,
    Cancel,
}

impl QuitOption {
    /// All options in menu order.
    pub const ALL: [QuitOption; 3] = [
        QuitOption::QuitGame,
        QuitOption::QuitToMainMenu,
        QuitOption::Cancel,
    ];

    /// Position of this option in the menu.
    pub fn index(&self) -> usize {
        match self {
            QuitOption::QuitGame => 0,
            QuitOption::QuitToMainMenu => 1,
            QuitOption::Cancel => 2,
        }
    }

    /// Translation key for the option caption.
    pub fn text_key(&self) -> &'static str {
        match self {
            QuitOption::QuitGame => TEXT_QUIT_GAME,
            QuitOption::QuitToMainMenu => TEXT_QUIT_TO_MAIN_MENU,
            QuitOption::Cancel => TEXT_CANCEL,
        }
    }

    /// Parse option from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pause_types::QuitOption;
    ///
    /// assert_eq!(QuitOption::from_str("quitgame"), Some(QuitOption::QuitGame));
    /// assert_eq!(QuitOption::from_str("CANCEL"), Some(QuitOption::Cancel));
    /// assert_eq!(QuitOption::from_str("resume"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quitgame" => Some(QuitOption::QuitGame),
            "quittomainmenu" => Some(QuitOption::QuitToMainMenu),
            "cancel" => Some(QuitOption::Cancel),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            QuitOption::QuitGame => "quitGame",
            QuitOption::QuitToMainMenu => "quitToMainMenu",
            QuitOption::Cancel => "cancel",
        }
    }
}

/// Identity of a mode known to the host's mode stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeId {
    /// The boot (main menu) mode. Target of "Quit to Main Menu".
    Boot,
    /// Regular gameplay.
    Game,
    /// The pause/quit mode.
    Pause,
}

impl ModeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeId::Boot => "boot",
            ModeId::Game => "game",
            ModeId::Pause => "pause",
        }
    }
}

/// Menu-level input events delivered to a mode once per frame.
///
/// These are produced by the input crate from raw terminal keys, or built
/// directly by tests and scripted hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuInput {
    /// The quit trigger (opens the quit prompt, or exits when already open)
    Quit,
    /// The pause toggle
    Pause,
    /// Move the menu highlight up
    Up,
    /// Move the menu highlight down
    Down,
    /// Activate the highlighted entry
    Confirm,
    /// Back out of the menu
    Cancel,
}

impl MenuInput {
    /// Parse input from string (for scripted hosts)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" => Some(MenuInput::Quit),
            "pause" => Some(MenuInput::Pause),
            "up" => Some(MenuInput::Up),
            "down" => Some(MenuInput::Down),
            "confirm" => Some(MenuInput::Confirm),
            "cancel" => Some(MenuInput::Cancel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuInput::Quit => "quit",
            MenuInput::Pause => "pause",
            MenuInput::Up => "up",
            MenuInput::Down => "down",
            MenuInput::Confirm => "confirm",
            MenuInput::Cancel => "cancel",
        }
    }

    /// Menu navigation direction carried by this input, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            MenuInput::Up => Some(Direction::Up),
            MenuInput::Down => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Vertical navigation direction for option menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Observable sub-state of the pause mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    /// Only the "Paused" label is shown.
    PlainPause,
    /// The three-option quit menu is shown.
    QuitPrompt,
}
