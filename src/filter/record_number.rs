//! Record sequence number membership predicate

use std::collections::HashSet;

use super::RecordPredicate;
use crate::record::StringRecord;

/// Predicate on a record's sequence number.
///
/// True iff the record's number is a member of the configured set; with
/// `negate` it means "is not one of these numbers".
#[derive(Debug, Clone)]
pub struct RecordNumberPredicate {
    numbers: HashSet<u64>,
    negate: bool,
}

impl RecordNumberPredicate {
    /// Predicate that is true for records whose number is in `numbers`
    pub fn new(numbers: impl IntoIterator<Item = u64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
            negate: false,
        }
    }

    /// Negated predicate: true for records whose number is NOT in `numbers`
    pub fn negated(numbers: impl IntoIterator<Item = u64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
            negate: true,
        }
    }
}

impl RecordPredicate for RecordNumberPredicate {
    fn test(&self, record: &StringRecord) -> bool {
        let result = self.numbers.contains(&record.number());
        if self.negate { !result } else { result }
    }
}
