//! Tests for parsing and mapping delimited records
//!
//! Scenarios follow the canonical person record:
//! `firstName,lastName,age,birthDate,married` / `foo,bar,30,1990-12-12,true`.

use chrono::NaiveDate;

use super::{Person, person_schema};
use crate::mapper::DelimitedRecordMapper;
use crate::record::FlatRecord;
use crate::{Error, FieldType};

const PERSON_NAMES: [&str; 5] = ["firstName", "lastName", "age", "birthDate", "married"];

fn person_mapper() -> DelimitedRecordMapper<Person> {
    DelimitedRecordMapper::builder(person_schema())
        .field_names(PERSON_NAMES)
        .build()
        .unwrap()
}

fn assert_canonical_fields(record: &FlatRecord) {
    let contents: Vec<&str> = record
        .fields()
        .iter()
        .map(|f| f.raw_content.as_str())
        .collect();
    assert_eq!(contents, vec!["foo", "bar", "30", "1990-12-12", "true"]);
}

#[test]
fn test_record_parsing() {
    let mapper = person_mapper();
    let record = mapper.parse("foo,bar,30,1990-12-12,true").unwrap();
    assert_eq!(record.len(), 5);
    assert_canonical_fields(&record);
    assert_eq!(record.fields()[3].name.as_deref(), Some("birthDate"));
    assert_eq!(record.fields()[3].index, 3);
}

#[test]
fn test_ill_formed_record_fails_with_arity_error() {
    let mapper = person_mapper();
    // one field short
    let result = mapper.parse("foo,bar,30,1990-12-12");
    assert!(matches!(
        result,
        Err(Error::Arity {
            expected: 5,
            found: 4
        })
    ));
}

#[test]
fn test_excess_fields_fail_with_arity_error() {
    let mapper = person_mapper();
    // silently truncating the extra field would hide a malformed record
    let result = mapper.parse("foo,bar,30,1990-12-12,true,extra");
    assert!(matches!(
        result,
        Err(Error::Arity {
            expected: 5,
            found: 6
        })
    ));
}

#[test]
fn test_record_size_with_empty_trailing_field() {
    let mapper = person_mapper();
    let record = mapper.parse("foo,bar,30,1990-12-12,").unwrap();
    assert_eq!(record.len(), 5);
    assert_eq!(record.fields()[4].raw_content, "");
}

#[test]
fn test_record_parsing_with_trimmed_whitespace() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_names(PERSON_NAMES)
        .trim_whitespace(true)
        .build()
        .unwrap();
    let record = mapper
        .parse("  foo ,    bar  ,  30  ,     1990-12-12  ,  true         ")
        .unwrap();
    assert_canonical_fields(&record);
}

#[test]
fn test_record_parsing_with_pipe_delimiter() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_names(PERSON_NAMES)
        .delimiter("|")
        .build()
        .unwrap();
    assert_canonical_fields(&mapper.parse("foo|bar|30|1990-12-12|true").unwrap());
}

#[test]
fn test_record_parsing_with_multiple_character_delimiter() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_names(PERSON_NAMES)
        .delimiter("###")
        .build()
        .unwrap();
    assert_canonical_fields(&mapper.parse("foo###bar###30###1990-12-12###true").unwrap());
}

#[test]
fn test_record_parsing_with_qualifier() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_names(PERSON_NAMES)
        .qualifier('\'')
        .build()
        .unwrap();
    assert_canonical_fields(&mapper.parse("'foo','bar','30','1990-12-12','true'").unwrap());
}

#[test]
fn test_all_fields_must_be_qualified() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_names(PERSON_NAMES)
        .qualifier('\'')
        .build()
        .unwrap();
    // age field not qualified
    let result = mapper.parse("'foo','bar',30,'1990-12-12','true'");
    assert!(matches!(result, Err(Error::Quoting { field_index: 2, .. })));
}

#[test]
fn test_field_subset_parsing() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_subset([0, 4])
        .field_names(["firstName", "married"])
        .build()
        .unwrap();
    let record = mapper.parse("foo,bar,30,1990-12-12,true").unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record.fields()[0].raw_content, "foo");
    assert_eq!(record.fields()[0].index, 0);
    assert_eq!(record.fields()[1].raw_content, "true");
    assert_eq!(record.fields()[1].index, 4);
}

#[test]
fn test_field_subset_ignores_token_count_beyond_max_index() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_subset([0, 4])
        .field_names(["firstName", "married"])
        .build()
        .unwrap();
    // seven tokens; indices 1-3, 5, 6 are ignored, not validated
    let record = mapper
        .parse("foo,ignored,not-a-number,also ignored,true,x,y")
        .unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record.fields()[1].raw_content, "true");
}

#[test]
fn test_field_subset_missing_referenced_token_fails() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_subset([0, 4])
        .field_names(["firstName", "married"])
        .build()
        .unwrap();
    let result = mapper.parse("foo,bar,30");
    assert!(matches!(
        result,
        Err(Error::Arity {
            expected: 5,
            found: 3
        })
    ));
}

#[test]
fn test_duplicate_subset_indices_rejected() {
    let result = DelimitedRecordMapper::builder(person_schema())
        .field_subset([0, 0])
        .field_names(["firstName", "lastName"])
        .build();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_subset_and_names_length_mismatch_rejected() {
    let result = DelimitedRecordMapper::builder(person_schema())
        .field_subset([0, 4])
        .field_names(["firstName"])
        .build();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_record_mapping() {
    let mapper = person_mapper();
    let person = mapper.parse_and_map("foo,bar,30,1990-12-12,true").unwrap();
    assert_eq!(person.first_name, "foo");
    assert_eq!(person.last_name.as_deref(), Some("bar"));
    assert_eq!(person.age, 30);
    assert_eq!(
        person.birth_date,
        Some(NaiveDate::from_ymd_opt(1990, 12, 12).unwrap())
    );
    assert!(person.married);
}

#[test]
fn test_field_names_convention_over_configuration() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .build()
        .unwrap();
    mapper
        .resolve_header("firstName,lastName,age,birthDate,married")
        .unwrap();
    let person = mapper.parse_and_map("foo,bar,30,1990-12-12,true").unwrap();
    assert_eq!(person.first_name, "foo");
    assert_eq!(person.age, 30);
    assert!(person.married);
}

#[test]
fn test_field_subset_mapping_with_convention_over_configuration() {
    let mapper = DelimitedRecordMapper::builder(person_schema())
        .field_subset([0, 4])
        .build()
        .unwrap();
    mapper
        .resolve_header("firstName,lastName,age,birthDate,married")
        .unwrap();
    let person = mapper.parse_and_map("foo,bar,30,1990-12-12,true").unwrap();

    assert_eq!(person.first_name, "foo");
    assert!(person.married);
    // unselected properties stay at their defaults
    assert_eq!(person.last_name, None);
    assert_eq!(person.age, 0);
    assert_eq!(person.birth_date, None);
}

#[test]
fn test_conversion_failure_aborts_whole_mapping() {
    let mapper = person_mapper();
    let result = mapper.parse_and_map("foo,bar,not-a-number,1990-12-12,true");
    match result {
        Err(Error::Conversion {
            field_index,
            field_name,
            ..
        }) => {
            assert_eq!(field_index, 2);
            assert_eq!(field_name, "age");
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn test_boolean_field_never_fails_on_unrecognized_token() {
    // the permissive boolean contract must survive end to end
    let mapper = person_mapper();
    let person = mapper.parse_and_map("foo,bar,30,1990-12-12,banana").unwrap();
    assert!(!person.married);
}

#[test]
fn test_mapper_is_reusable_across_lines() {
    let mapper = person_mapper();
    for i in 0..3 {
        let person = mapper
            .parse_and_map(&format!("foo{i},bar,3{i},1990-12-12,true"))
            .unwrap();
        assert_eq!(person.first_name, format!("foo{i}"));
    }
}

#[test]
fn test_per_line_failure_does_not_corrupt_mapper() {
    let mapper = person_mapper();
    assert!(mapper.parse_and_map("foo,bar,bad,1990-12-12,true").is_err());
    assert!(mapper.parse("foo,bar").is_err());
    // the same instance keeps working on well-formed input
    let person = mapper.parse_and_map("foo,bar,30,1990-12-12,true").unwrap();
    assert_eq!(person.age, 30);
}

#[test]
fn test_map_rejects_foreign_record_shape() {
    let mapper = person_mapper();
    let record = FlatRecord::new(vec![]);
    assert!(matches!(mapper.map(&record), Err(Error::Arity { .. })));
}

#[test]
fn test_mapping_reports_field_type_in_error_chain() {
    let mapper = person_mapper();
    let result = mapper.parse_and_map("foo,bar,30,12/12/1990,true");
    match result {
        Err(Error::Conversion { source, .. }) => {
            assert!(matches!(
                source,
                crate::ConversionError::Malformed {
                    field_type: FieldType::Date,
                    ..
                }
            ));
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}
