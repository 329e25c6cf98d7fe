//! Shared constants for flat-file parsing and conversion
//!
//! This module contains the default values and fixed token sets used
//! throughout the library.

// =============================================================================
// Tokenizer Defaults
// =============================================================================

/// Default field delimiter when none is configured
pub const DEFAULT_DELIMITER: &str = ",";

// =============================================================================
// Conversion Constants
// =============================================================================

/// Tokens recognized as boolean true, matched case-insensitively.
/// Every other non-null input converts to false.
pub const TRUE_VALUES: &[&str] = &["true", "1", "on", "yes"];

/// Date format accepted by the date converter (ISO calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time format accepted by the date-time converter
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
