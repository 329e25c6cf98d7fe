//! Tests for converter registration and lookup

use crate::Error;
use crate::convert::{
    ConverterRegistry, FieldType, FieldValue, StringConverter, TypeConverter,
};

#[test]
fn test_defaults_cover_all_field_types() {
    let registry = ConverterRegistry::with_defaults();
    for field_type in [
        FieldType::String,
        FieldType::Boolean,
        FieldType::Integer,
        FieldType::Float,
        FieldType::BigInteger,
        FieldType::Decimal,
        FieldType::Date,
        FieldType::DateTime,
    ] {
        assert!(
            registry.get(field_type).is_some(),
            "missing default converter for {field_type:?}"
        );
    }
}

#[test]
fn test_unregistered_type_is_configuration_error() {
    let registry = ConverterRegistry::empty();
    assert!(registry.get(FieldType::Date).is_none());
    assert!(matches!(
        registry.require(FieldType::Date),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_registration_replaces_previous() {
    /// Converter that upper-cases its input, standing in for a caller
    /// override
    struct UpperCaseConverter;

    impl TypeConverter for UpperCaseConverter {
        fn target(&self) -> FieldType {
            FieldType::String
        }

        fn convert(
            &self,
            raw: Option<&str>,
        ) -> Result<FieldValue, crate::convert::ConversionError> {
            StringConverter.convert(raw).map(|v| match v {
                FieldValue::String(s) => FieldValue::String(s.to_uppercase()),
                other => other,
            })
        }
    }

    let mut registry = ConverterRegistry::with_defaults();
    registry.register(Box::new(UpperCaseConverter));
    let converted = registry
        .require(FieldType::String)
        .unwrap()
        .convert(Some("foo"))
        .unwrap();
    assert_eq!(converted, FieldValue::String("FOO".to_string()));
}
