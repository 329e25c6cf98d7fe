//! Tests for record predicates
