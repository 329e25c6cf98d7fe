//! Explicit converter registry
//!
//! Maps a semantic field type to the converter that produces it. Callers
//! bind converters at configuration time; an unregistered type surfaces as
//! a configuration error at mapper construction or first use.

use std::collections::HashMap;

use super::converters::{
    BigIntegerConverter, BooleanConverter, DateConverter, DateTimeConverter, DecimalConverter,
    FloatConverter, IntegerConverter, StringConverter,
};
use super::{FieldType, TypeConverter};
use crate::{Error, Result};

/// Registry of converters keyed by their target type
pub struct ConverterRegistry {
    converters: HashMap<FieldType, Box<dyn TypeConverter>>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in converters
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(StringConverter));
        registry.register(Box::new(BooleanConverter));
        registry.register(Box::new(IntegerConverter));
        registry.register(Box::new(FloatConverter));
        registry.register(Box::new(BigIntegerConverter));
        registry.register(Box::new(DecimalConverter));
        registry.register(Box::new(DateConverter));
        registry.register(Box::new(DateTimeConverter));
        registry
    }

    /// Register a converter under its target type, replacing any previous
    /// registration for that type
    pub fn register(&mut self, converter: Box<dyn TypeConverter>) {
        self.converters.insert(converter.target(), converter);
    }

    /// Look up the converter for a field type
    pub fn get(&self, field_type: FieldType) -> Option<&dyn TypeConverter> {
        self.converters.get(&field_type).map(|c| c.as_ref())
    }

    /// Look up the converter for a field type, failing with a configuration
    /// error when none is registered
    pub fn require(&self, field_type: FieldType) -> Result<&dyn TypeConverter> {
        self.get(field_type).ok_or_else(|| {
            Error::configuration(format!("no converter registered for {field_type:?}"))
        })
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("registered", &self.converters.keys().collect::<Vec<_>>())
            .finish()
    }
}
