//! Target-object schemas
//!
//! A schema is an explicit, pre-built mapping from flat-file field name to
//! a typed setter on the target object. It replaces runtime type
//! introspection: every binding declares its semantic type up front and is
//! validated eagerly at mapper construction, keeping the per-line hot path
//! free of any type discovery.

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use chrono::{NaiveDate, NaiveDateTime};

use crate::convert::{FieldType, FieldValue};
use crate::{Error, Result};

type Setter<T> = Box<dyn Fn(&mut T, FieldValue) -> Result<()>>;

/// One binding from a flat-file field name to a target-object property
pub struct FieldBinding<T> {
    name: String,
    field_type: FieldType,
    apply: Setter<T>,
}

impl<T> FieldBinding<T> {
    /// Flat-file field name this binding answers to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic type the bound property declares
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Apply a converted value to the target object
    pub fn apply(&self, target: &mut T, value: FieldValue) -> Result<()> {
        (self.apply)(target, value)
    }
}

impl<T> std::fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .finish()
    }
}

/// Ordered set of field bindings for one target type.
///
/// Immutable once built; a mapper instance reuses it across many lines.
#[derive(Debug)]
pub struct TargetSchema<T> {
    bindings: Vec<FieldBinding<T>>,
}

impl<T> TargetSchema<T> {
    /// Start building a schema
    pub fn builder() -> TargetSchemaBuilder<T> {
        TargetSchemaBuilder {
            bindings: Vec::new(),
        }
    }

    /// All bindings, in declaration order
    pub fn bindings(&self) -> &[FieldBinding<T>] {
        &self.bindings
    }

    /// Find a binding by flat-file field name
    pub fn binding(&self, name: &str) -> Option<(usize, &FieldBinding<T>)> {
        self.bindings
            .iter()
            .enumerate()
            .find(|(_, b)| b.name == name)
    }

    /// Binding at a declaration position
    pub fn binding_at(&self, position: usize) -> Option<&FieldBinding<T>> {
        self.bindings.get(position)
    }

    /// Number of bound properties
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no properties are bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builder for [`TargetSchema`] with one typed registration method per
/// semantic type.
///
/// A converter is chosen by the binding's declared type, so the value
/// variant handed to a setter always matches; a mismatch is a wiring
/// defect reported as a configuration error rather than a panic.
pub struct TargetSchemaBuilder<T> {
    bindings: Vec<FieldBinding<T>>,
}

fn mismatch(name: &str, expected: FieldType, actual: &FieldValue) -> Error {
    Error::configuration(format!(
        "setter for '{}' expects a {:?} value, got {:?}",
        name,
        expected,
        actual.field_type()
    ))
}

impl<T> TargetSchemaBuilder<T> {
    fn bind(mut self, name: String, field_type: FieldType, apply: Setter<T>) -> Self {
        self.bindings.push(FieldBinding {
            name,
            field_type,
            apply,
        });
        self
    }

    /// Bind a string property
    pub fn string(self, name: impl Into<String>, set: impl Fn(&mut T, String) + 'static) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::String,
            Box::new(move |target, value| match value {
                FieldValue::String(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::String, &other)),
            }),
        )
    }

    /// Bind a boolean property
    pub fn boolean(self, name: impl Into<String>, set: impl Fn(&mut T, bool) + 'static) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::Boolean,
            Box::new(move |target, value| match value {
                FieldValue::Boolean(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::Boolean, &other)),
            }),
        )
    }

    /// Bind a 64-bit integer property
    pub fn integer(self, name: impl Into<String>, set: impl Fn(&mut T, i64) + 'static) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::Integer,
            Box::new(move |target, value| match value {
                FieldValue::Integer(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::Integer, &other)),
            }),
        )
    }

    /// Bind a 64-bit float property
    pub fn float(self, name: impl Into<String>, set: impl Fn(&mut T, f64) + 'static) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::Float,
            Box::new(move |target, value| match value {
                FieldValue::Float(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::Float, &other)),
            }),
        )
    }

    /// Bind an arbitrary-precision integer property
    pub fn big_integer(
        self,
        name: impl Into<String>,
        set: impl Fn(&mut T, BigInt) + 'static,
    ) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::BigInteger,
            Box::new(move |target, value| match value {
                FieldValue::BigInteger(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::BigInteger, &other)),
            }),
        )
    }

    /// Bind an arbitrary-precision decimal property
    pub fn decimal(
        self,
        name: impl Into<String>,
        set: impl Fn(&mut T, BigDecimal) + 'static,
    ) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::Decimal,
            Box::new(move |target, value| match value {
                FieldValue::Decimal(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::Decimal, &other)),
            }),
        )
    }

    /// Bind a calendar-date property
    pub fn date(self, name: impl Into<String>, set: impl Fn(&mut T, NaiveDate) + 'static) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::Date,
            Box::new(move |target, value| match value {
                FieldValue::Date(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::Date, &other)),
            }),
        )
    }

    /// Bind a date-time property
    pub fn datetime(
        self,
        name: impl Into<String>,
        set: impl Fn(&mut T, NaiveDateTime) + 'static,
    ) -> Self {
        let name = name.into();
        let field = name.clone();
        self.bind(
            name,
            FieldType::DateTime,
            Box::new(move |target, value| match value {
                FieldValue::DateTime(v) => {
                    set(target, v);
                    Ok(())
                }
                other => Err(mismatch(&field, FieldType::DateTime, &other)),
            }),
        )
    }

    /// Finish the schema, rejecting duplicate field names
    pub fn finish(self) -> Result<TargetSchema<T>> {
        for (i, binding) in self.bindings.iter().enumerate() {
            if self.bindings[..i].iter().any(|b| b.name == binding.name) {
                return Err(Error::configuration(format!(
                    "duplicate schema field name '{}'",
                    binding.name
                )));
            }
        }
        Ok(TargetSchema {
            bindings: self.bindings,
        })
    }
}
