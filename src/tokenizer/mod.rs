//! Field tokenizer for delimited lines
//!
//! Splits one raw line into an ordered sequence of raw fields according to
//! the configured delimiter, qualifier, and whitespace policy. Token order
//! and count are preserved exactly: an empty trailing token yields an
//! empty-string field, not an omitted one.

use tracing::debug;

use crate::config::ParsingConfig;
use crate::record::RawField;
use crate::{Error, Result};

#[cfg(test)]
mod tests;

/// Tokenize one line into ordered raw fields.
///
/// The delimiter is matched as an exact substring, so multi-character
/// delimiters are supported. When a qualifier is configured, every field of
/// the line must be wrapped in it; a field that is unqualified, or
/// qualified on one side only, fails with a quoting error for that line.
/// Whitespace trimming, when enabled, happens before qualifier stripping.
pub fn tokenize(line: &str, config: &ParsingConfig) -> Result<Vec<RawField>> {
    let mut fields = Vec::new();

    for (index, token) in line.split(config.delimiter.as_str()).enumerate() {
        let token = if config.trim_whitespace {
            token.trim()
        } else {
            token
        };

        let content = match config.qualifier {
            Some(qualifier) => unqualify(token, qualifier, index)?,
            None => token,
        };

        fields.push(RawField::new(index, content));
    }

    Ok(fields)
}

/// Strip the qualifier from a single token.
///
/// The qualification check runs against the trimmed token text, so
/// surrounding whitespace never hides a qualifier. The content between the
/// qualifiers is returned verbatim.
fn unqualify(token: &str, qualifier: char, index: usize) -> Result<&str> {
    let trimmed = token.trim();
    let starts = trimmed.starts_with(qualifier);
    let ends = trimmed.ends_with(qualifier) && trimmed.chars().count() >= 2;

    match (starts, ends) {
        (true, true) => {
            let inner = &trimmed[qualifier.len_utf8()..trimmed.len() - qualifier.len_utf8()];
            Ok(inner)
        }
        (false, false) => {
            debug!("field {} is not qualified with '{}': '{}'", index, qualifier, token);
            Err(Error::quoting(
                index,
                format!("field is not qualified with '{qualifier}'"),
            ))
        }
        _ => {
            debug!("field {} is partially qualified: '{}'", index, token);
            Err(Error::quoting(
                index,
                format!("field is qualified with '{qualifier}' on one side only"),
            ))
        }
    }
}
