//! Type conversion for raw field values
//!
//! A converter turns the raw text of one field into a typed value. All
//! converters share one contract:
//! - null input (an absent value, `None`) always fails, with an error
//!   distinct from the empty-input failure;
//! - empty input fails for converters whose target type cannot represent
//!   "no value"; the string converter accepts it;
//! - the boolean converter never fails on non-null input: it matches a
//!   fixed truthy token set case-insensitively and yields false for
//!   everything else;
//! - strict converters fail on malformed input instead of coercing to a
//!   zero value.
//!
//! Converters are resolved through an explicit [`ConverterRegistry`]; the
//! mapper performs no implicit type discovery.

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub mod converters;
pub mod registry;

#[cfg(test)]
mod tests;

pub use converters::{
    BigIntegerConverter, BooleanConverter, DateConverter, DateTimeConverter, DecimalConverter,
    FloatConverter, IntegerConverter, StringConverter,
};
pub use registry::ConverterRegistry;

/// Semantic type tags a target property can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Boolean,
    Integer,
    Float,
    BigInteger,
    Decimal,
    Date,
    DateTime,
}

/// A converted field value, tagged by its semantic type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    BigInteger(BigInt),
    Decimal(BigDecimal),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// Semantic type tag of this value
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::String(_) => FieldType::String,
            FieldValue::Boolean(_) => FieldType::Boolean,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::BigInteger(_) => FieldType::BigInteger,
            FieldValue::Decimal(_) => FieldType::Decimal,
            FieldValue::Date(_) => FieldType::Date,
            FieldValue::DateTime(_) => FieldType::DateTime,
        }
    }
}

/// Conversion failure for a single field value
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The value to convert was absent
    #[error("value to convert must not be null")]
    NullInput,

    /// The value to convert was an empty string and the target type has no
    /// empty representation
    #[error("value to convert must not be empty")]
    EmptyInput,

    /// The value was present but not parseable as the target type
    #[error("malformed {field_type:?} value '{raw}': {reason}")]
    Malformed {
        field_type: FieldType,
        raw: String,
        reason: String,
    },
}

/// Conversion function from raw field text to a typed value.
///
/// `raw` is `None` when the value is absent (the null case) and `Some("")`
/// when the field is present but empty; the two fail with distinct errors.
pub trait TypeConverter {
    /// Semantic type this converter produces
    fn target(&self) -> FieldType;

    /// Convert raw text into a typed value, or fail with a conversion error
    fn convert(&self, raw: Option<&str>) -> std::result::Result<FieldValue, ConversionError>;
}
