//! Substring containment predicate

use super::RecordPredicate;
use crate::record::StringRecord;

/// Substring predicate over a record's textual payload.
///
/// The non-negated predicate returns true iff the payload does NOT contain
/// the pattern; "keep matches" semantics require `negate = true`. This
/// mirrors plain vs. inverted grep mode and is intentionally preserved
/// as-is; it is easy to get backwards. Search is case sensitive.
#[derive(Debug, Clone)]
pub struct GrepPredicate {
    pattern: String,
    negate: bool,
}

impl GrepPredicate {
    /// Predicate that is true when the payload does not contain `pattern`
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            negate: false,
        }
    }

    /// Negated predicate: true when the payload contains `pattern`
    pub fn negated(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            negate: true,
        }
    }
}

impl RecordPredicate for GrepPredicate {
    fn test(&self, record: &StringRecord) -> bool {
        let result = !record.payload().contains(&self.pattern);
        if self.negate { !result } else { result }
    }
}
