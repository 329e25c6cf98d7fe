//! Built-in converter implementations
//!
//! One small struct per target type. Strict converters reject null, empty,
//! and malformed input; the string converter accepts empty input; the
//! boolean converter accepts any non-null input.

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::{NaiveDate, NaiveDateTime};

use super::{ConversionError, FieldType, FieldValue, TypeConverter};
use crate::constants::{DATE_FORMAT, DATETIME_FORMAT, TRUE_VALUES};

/// Reject null input, pass everything else through
fn require_present(raw: Option<&str>) -> Result<&str, ConversionError> {
    raw.ok_or(ConversionError::NullInput)
}

/// Reject null and empty input
fn require_text(raw: Option<&str>) -> Result<&str, ConversionError> {
    let value = require_present(raw)?;
    if value.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    Ok(value)
}

fn malformed(field_type: FieldType, raw: &str, reason: impl ToString) -> ConversionError {
    ConversionError::Malformed {
        field_type,
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}

/// String converter. Accepts empty input; a string has a natural empty
/// representation.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringConverter;

impl TypeConverter for StringConverter {
    fn target(&self) -> FieldType {
        FieldType::String
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_present(raw)?;
        Ok(FieldValue::String(value.to_string()))
    }
}

/// Boolean converter. Matches a fixed truthy token set case-insensitively;
/// every other non-null input yields false. Never fails except on null.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanConverter;

impl TypeConverter for BooleanConverter {
    fn target(&self) -> FieldType {
        FieldType::Boolean
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_present(raw)?;
        let truthy = TRUE_VALUES
            .iter()
            .any(|token| value.eq_ignore_ascii_case(token));
        Ok(FieldValue::Boolean(truthy))
    }
}

/// 64-bit integer converter
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerConverter;

impl TypeConverter for IntegerConverter {
    fn target(&self) -> FieldType {
        FieldType::Integer
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_text(raw)?;
        value
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|e| malformed(FieldType::Integer, value, e))
    }
}

/// 64-bit float converter
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatConverter;

impl TypeConverter for FloatConverter {
    fn target(&self) -> FieldType {
        FieldType::Float
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_text(raw)?;
        value
            .parse::<f64>()
            .map(FieldValue::Float)
            .map_err(|e| malformed(FieldType::Float, value, e))
    }
}

/// Arbitrary-precision integer converter. Does not accept null or empty
/// input.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigIntegerConverter;

impl TypeConverter for BigIntegerConverter {
    fn target(&self) -> FieldType {
        FieldType::BigInteger
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_text(raw)?;
        value
            .parse::<BigInt>()
            .map(FieldValue::BigInteger)
            .map_err(|e| malformed(FieldType::BigInteger, value, e))
    }
}

/// Arbitrary-precision decimal converter
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalConverter;

impl TypeConverter for DecimalConverter {
    fn target(&self) -> FieldType {
        FieldType::Decimal
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_text(raw)?;
        value
            .parse::<BigDecimal>()
            .map(FieldValue::Decimal)
            .map_err(|e| malformed(FieldType::Decimal, value, e))
    }
}

/// ISO calendar date converter (`YYYY-MM-DD`)
#[derive(Debug, Default, Clone, Copy)]
pub struct DateConverter;

impl TypeConverter for DateConverter {
    fn target(&self) -> FieldType {
        FieldType::Date
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_text(raw)?;
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(FieldValue::Date)
            .map_err(|e| malformed(FieldType::Date, value, e))
    }
}

/// Date-time converter (`YYYY-MM-DD HH:MM:SS`)
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeConverter;

impl TypeConverter for DateTimeConverter {
    fn target(&self) -> FieldType {
        FieldType::DateTime
    }

    fn convert(&self, raw: Option<&str>) -> Result<FieldValue, ConversionError> {
        let value = require_text(raw)?;
        NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .map(FieldValue::DateTime)
            .map_err(|e| malformed(FieldType::DateTime, value, e))
    }
}
