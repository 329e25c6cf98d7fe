//! Tests for converters and the converter registry

mod registry_tests;
