//! Parsing configuration and validation.
//!
//! Provides the construction-time configuration surface for the tokenizer
//! and record mapper. A configuration is validated and frozen before first
//! use; there are no post-construction setters.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};

/// Tokenizer and mapper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Field delimiter, matched as an exact substring. One or more
    /// characters; defaults to a comma.
    pub delimiter: String,

    /// Optional qualifier character used to quote a field so it may
    /// contain the delimiter. When set, every field of a line must be
    /// qualified.
    pub qualifier: Option<char>,

    /// Trim leading/trailing whitespace from each raw token before
    /// qualifier stripping.
    pub trim_whitespace: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            qualifier: None,
            trim_whitespace: false,
        }
    }
}

impl ParsingConfig {
    /// Validate the configuration, returning a configuration error on the
    /// first inconsistency found.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(Error::configuration("delimiter must not be empty"));
        }
        if let Some(qualifier) = self.qualifier {
            if self.delimiter.contains(qualifier) {
                return Err(Error::configuration(format!(
                    "qualifier '{}' must not occur in delimiter '{}'",
                    qualifier, self.delimiter
                )));
            }
        }
        Ok(())
    }
}
