//! Core record data structures.
//!
//! Defines the raw record carrier handed in by a record source, the
//! per-field result of tokenizing, and the parsed-record container the
//! mapper consumes.

use serde::{Deserialize, Serialize};

/// One raw record: a single line of text plus its sequence number within
/// the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    number: u64,
    payload: String,
}

impl StringRecord {
    /// Create a record from its sequence number and raw line
    pub fn new(number: u64, payload: impl Into<String>) -> Self {
        Self {
            number,
            payload: payload.into(),
        }
    }

    /// Sequence number of this record within its source
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Raw textual payload (one line, without line terminator)
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// A single field produced by tokenizing a delimited line.
///
/// `raw_content` is the substring between delimiters with qualifier
/// characters stripped and whitespace trimmed if configured. `index` is the
/// zero-based position of the token in the line and is the correlation key
/// to field names and converters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    /// Resolved field name, if names have been resolved
    pub name: Option<String>,

    /// Zero-based token position in the line
    pub index: usize,

    /// Raw field content after qualifier stripping and trim policy
    pub raw_content: String,
}

impl RawField {
    /// Create an unnamed field at a token position
    pub fn new(index: usize, raw_content: impl Into<String>) -> Self {
        Self {
            name: None,
            index,
            raw_content: raw_content.into(),
        }
    }

    /// Create a named field at a token position
    pub fn named(name: impl Into<String>, index: usize, raw_content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            index,
            raw_content: raw_content.into(),
        }
    }
}

/// An ordered sequence of fields parsed from one line.
///
/// Created fresh per input line; never retained by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    fields: Vec<RawField>,
}

impl FlatRecord {
    /// Create a parsed record from its fields
    pub fn new(fields: Vec<RawField>) -> Self {
        Self { fields }
    }

    /// All fields, in line order
    pub fn fields(&self) -> &[RawField] {
        &self.fields
    }

    /// Field at a position within this record (not the token index)
    pub fn get(&self, position: usize) -> Option<&RawField> {
        self.fields.get(position)
    }

    /// Number of fields in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
