//! Delimited record mapping
//!
//! Orchestrates the tokenizer, field-name resolution, and type conversion
//! to turn one raw line into a populated domain object.
//!
//! ## Architecture
//!
//! The mapper is organized into logical components:
//! - [`schema`] - Pre-built, eagerly validated bindings from field name to
//!   target-object setter
//! - [`resolver`] - Field-name resolution from explicit configuration or a
//!   designated header line
//! - [`mapper`] - The reusable [`DelimitedRecordMapper`] and its builder
//!
//! ## Usage
//!
//! ```rust
//! use flatfile_mapper::mapper::{DelimitedRecordMapper, TargetSchema};
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     first_name: String,
//!     age: i64,
//! }
//!
//! # fn example() -> flatfile_mapper::Result<()> {
//! let schema = TargetSchema::builder()
//!     .string("firstName", |p: &mut Person, v| p.first_name = v)
//!     .integer("age", |p: &mut Person, v| p.age = v)
//!     .finish()?;
//!
//! let mapper = DelimitedRecordMapper::builder(schema)
//!     .field_names(["firstName", "age"])
//!     .build()?;
//!
//! let person = mapper.parse_and_map("foo,30")?;
//! assert_eq!(person.first_name, "foo");
//! assert_eq!(person.age, 30);
//! # Ok(())
//! # }
//! ```

pub mod mapper;
pub mod resolver;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use mapper::{DelimitedRecordMapper, MapperBuilder};
pub use resolver::resolve_header_names;
pub use schema::{TargetSchema, TargetSchemaBuilder};
