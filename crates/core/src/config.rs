//! Pause mode configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::PauseError;
use crate::term::Rgb;
use crate::types::{DEFAULT_DIM_PERCENT, DEFAULT_IDLE_SLEEP_MS, MAX_IDLE_SLEEP_MS};

/// Pause mode configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseConfig {
    /// Yield applied in `update` when a frame consumed no input.
    pub idle_sleep: Duration,
    /// Backdrop brightness in percent (0 = black, 100 = untouched).
    pub dim_percent: u8,
    /// JSON translation catalog to load instead of the built-in strings.
    pub locale_path: Option<PathBuf>,
    /// File the demo host writes its log to.
    pub log_path: Option<PathBuf>,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            idle_sleep: Duration::from_millis(DEFAULT_IDLE_SLEEP_MS as u64),
            dim_percent: DEFAULT_DIM_PERCENT,
            locale_path: None,
            log_path: None,
        }
    }
}

impl PauseConfig {
    /// Create from environment variables
    ///
    /// - `TUI_PAUSE_IDLE_MS`: idle yield in milliseconds (capped)
    /// - `TUI_PAUSE_DIM`: backdrop brightness percent, 0..=100
    /// - `TUI_PAUSE_LOCALE`: path to a JSON translation catalog
    /// - `TUI_PAUSE_LOG_PATH`: log file for the demo host
    pub fn from_env() -> Result<Self, PauseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PauseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut config = Self::default();

        if let Some(raw) = get("TUI_PAUSE_IDLE_MS") {
            let ms: u32 = raw
                .parse()
                .map_err(|_| PauseError::Config(format!("TUI_PAUSE_IDLE_MS={:?} is not a number", raw)))?;
            config = config.with_idle_ms(ms);
        }

        if let Some(raw) = get("TUI_PAUSE_DIM") {
            let percent: u8 = raw
                .parse()
                .ok()
                .filter(|p| *p <= 100)
                .ok_or_else(|| PauseError::Config(format!("TUI_PAUSE_DIM={:?} is not a percentage", raw)))?;
            config.dim_percent = percent;
        }

        config.locale_path = get("TUI_PAUSE_LOCALE").map(PathBuf::from);
        config.log_path = get("TUI_PAUSE_LOG_PATH").map(PathBuf::from);

        Ok(config)
    }

    /// Set the idle yield, clamped to `MAX_IDLE_SLEEP_MS`.
    pub fn with_idle_ms(mut self, ms: u32) -> Self {
        self.idle_sleep = Duration::from_millis(ms.min(MAX_IDLE_SLEEP_MS) as u64);
        self
    }

    /// Tint multiplied over the backdrop.
    pub fn dim_color(&self) -> Rgb {
        Rgb::grey_percent(self.dim_percent)
    }
}
