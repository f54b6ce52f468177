//! Translation providers.
//!
//! Catalog format (JSON):
//!
//! ```json
//! {
//!   "language": "fr",
//!   "strings": {
//!     "Paused": "En pause",
//!     "Quit Game": "Quitter le jeu"
//!   }
//! }
//! ```
//!
//! Keys are the English strings. A key missing from the catalog translates
//! to itself; a key mapped to a blank string is an error.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PauseError;
use crate::services::Locale;

/// Locale that returns every key untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocale;

impl Locale for IdentityLocale {
    fn translate(&self, key: &str) -> Result<String, PauseError> {
        Ok(key.to_string())
    }
}

/// A translation table loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub language: String,
    #[serde(default)]
    pub strings: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, PauseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PauseError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Locale for Catalog {
    fn translate(&self, key: &str) -> Result<String, PauseError> {
        match self.strings.get(key) {
            Some(text) if text.trim().is_empty() => Err(PauseError::Translation {
                key: key.to_string(),
                reason: format!("empty entry in the {:?} catalog", self.language),
            }),
            Some(text) => Ok(text.clone()),
            None => Ok(key.to_string()),
        }
    }
}
