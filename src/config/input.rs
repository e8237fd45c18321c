//! Corpus input configuration module.
//!
//! This module defines how lines of a word list are turned into candidate
//! words before they reach the index.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Corpus input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Whether leading and trailing whitespace is stripped from each line
    pub trim: bool,

    /// Lines starting with this prefix are skipped (None disables comments)
    pub comment_prefix: Option<String>,

    /// Words longer than this many characters are skipped (None for no limit)
    pub max_word_chars: Option<usize>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            trim: true,
            comment_prefix: Some("#".to_string()),
            max_word_chars: Some(4096),
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.comment_prefix.as_deref() == Some("") {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty".to_string(),
            ));
        }

        if self.max_word_chars == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "input.max_word_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
