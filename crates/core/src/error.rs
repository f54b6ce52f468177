//! Error type shared by modes and services.

use thiserror::Error;

/// Errors surfaced by the pause mode and its services.
///
/// `Capture`, `Text` and `Menu` come out of activation setup and are fatal for
/// that activation; the host decides whether to pop the mode or abort.
/// `Translation` is also returned by locale providers, but the pause mode only
/// propagates it from setup; text reloads log it and keep the old text.
#[derive(Debug, Error)]
pub enum PauseError {
    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error("text rendering failed: {0}")]
    Text(String),

    #[error("option menu construction failed: {0}")]
    Menu(String),

    #[error("no translation for {key:?}: {reason}")]
    Translation { key: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("translation catalog is malformed: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PauseError {
    /// Whether this error may be degraded into a blank/previous label.
    pub fn is_cosmetic(&self) -> bool {
        matches!(self, PauseError::Text(_) | PauseError::Translation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let err = PauseError::Translation {
            key: "Paused".to_string(),
            reason: "catalog unloaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no translation for \"Paused\": catalog unloaded"
        );
        assert!(err.is_cosmetic());
        assert!(!PauseError::Capture("no frame".into()).is_cosmetic());
    }
}
