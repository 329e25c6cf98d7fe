//! Tests for schemas, field-name resolution, and the record mapper

mod mapper_tests;

use chrono::NaiveDate;

use crate::mapper::TargetSchema;

/// Test target mirroring the canonical person record used across the
/// mapping tests
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Person {
    pub first_name: String,
    pub last_name: Option<String>,
    pub age: i64,
    pub birth_date: Option<NaiveDate>,
    pub married: bool,
}

pub(crate) fn person_schema() -> TargetSchema<Person> {
    TargetSchema::builder()
        .string("firstName", |p: &mut Person, v| p.first_name = v)
        .string("lastName", |p: &mut Person, v| p.last_name = Some(v))
        .integer("age", |p: &mut Person, v| p.age = v)
        .date("birthDate", |p: &mut Person, v| p.birth_date = Some(v))
        .boolean("married", |p: &mut Person, v| p.married = v)
        .finish()
        .expect("person schema is valid")
}
