//! Record predicates
//!
//! A predicate decides whether a record is admitted or rejected before (or
//! after) parsing. Predicates are stateless and deterministic; each carries
//! an optional negate flag applied after evaluation.

pub mod grep;
pub mod record_number;

#[cfg(test)]
mod tests;

pub use grep::GrepPredicate;
pub use record_number::RecordNumberPredicate;

use crate::record::StringRecord;

/// Generic record predicate contract.
///
/// Implementations must be side-effect-free: evaluation is deterministic
/// and independent of prior calls.
pub trait RecordPredicate {
    /// Evaluate this predicate against a record
    fn test(&self, record: &StringRecord) -> bool;
}
