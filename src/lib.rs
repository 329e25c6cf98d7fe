//! Flat-File Mapper Library
//!
//! A Rust library for transforming delimited flat-file records into
//! structured, type-converted domain objects.
//!
//! This library provides tools for:
//! - Tokenizing delimited lines with multi-character delimiters, optional
//!   field qualifiers, and configurable whitespace trimming
//! - Resolving field names from explicit configuration or from a designated
//!   header line ("convention over configuration")
//! - Converting raw field text to typed values through an explicit
//!   converter registry
//! - Binding converted values onto target objects through pre-built,
//!   eagerly validated schemas
//! - Filtering records with simple, composable predicates
//! - Comprehensive error handling with per-line failure isolation

pub mod config;
pub mod constants;
pub mod convert;
pub mod filter;
pub mod mapper;
pub mod record;
pub mod tokenizer;

// Re-export commonly used types
pub use config::ParsingConfig;
pub use convert::{ConversionError, ConverterRegistry, FieldType, FieldValue, TypeConverter};
pub use filter::{GrepPredicate, RecordNumberPredicate, RecordPredicate};
pub use mapper::{DelimitedRecordMapper, TargetSchema};
pub use record::{FlatRecord, RawField, StringRecord};

/// Result type alias for flat-file mapping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flat-file parsing and mapping operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration error: unresolvable field names, missing converter
    /// registrations, or inconsistent field subsets. Fatal at construction
    /// or first use; never retried.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Quoting error: a qualifier is configured but a field of the line is
    /// not (or not fully) qualified. Fatal for that line only.
    #[error("quoting error at field {field_index}: {message}")]
    Quoting { field_index: usize, message: String },

    /// Arity error: token count does not match the expected field count.
    /// Fatal for that line only.
    #[error("arity error: expected {expected} field(s), found {found}")]
    Arity { expected: usize, found: usize },

    /// Conversion error: a field's raw content could not be converted to
    /// its target type. Fatal for that line's mapping only.
    #[error("conversion error at field {field_index} ('{field_name}'): {source}")]
    Conversion {
        field_index: usize,
        field_name: String,
        #[source]
        source: ConversionError,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a quoting error for a specific field
    pub fn quoting(field_index: usize, message: impl Into<String>) -> Self {
        Self::Quoting {
            field_index,
            message: message.into(),
        }
    }

    /// Create an arity error
    pub fn arity(expected: usize, found: usize) -> Self {
        Self::Arity { expected, found }
    }

    /// Create a conversion error carrying the offending field's identity
    pub fn conversion(
        field_index: usize,
        field_name: impl Into<String>,
        source: ConversionError,
    ) -> Self {
        Self::Conversion {
            field_index,
            field_name: field_name.into(),
            source,
        }
    }
}
