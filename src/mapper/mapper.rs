//! The delimited record mapper and its builder
//!
//! A mapper instance is configured once, through the builder, and is then
//! reused across many lines. The only mutable state is the once-only
//! resolution of field names from a header line; everything else is
//! read-only per line. The one-shot cell is single-threaded by design, so
//! a mapper is safe for sequential reuse but is not `Sync`; concurrent
//! callers construct one mapper per worker from shared configuration.

use std::cell::OnceCell;

use tracing::debug;

use crate::config::ParsingConfig;
use crate::convert::ConverterRegistry;
use crate::mapper::resolver::{self, MappingPlan};
use crate::mapper::schema::TargetSchema;
use crate::record::{FlatRecord, RawField};
use crate::tokenizer::tokenize;
use crate::{Error, Result};

/// Maps delimited lines to populated target objects.
///
/// Built through [`DelimitedRecordMapper::builder`]; the configuration is
/// validated and frozen before first use.
pub struct DelimitedRecordMapper<T> {
    config: ParsingConfig,
    schema: TargetSchema<T>,
    registry: ConverterRegistry,
    subset: Option<Vec<usize>>,
    plan: OnceCell<MappingPlan>,
}

impl<T> DelimitedRecordMapper<T> {
    /// Start building a mapper for the given target schema
    pub fn builder(schema: TargetSchema<T>) -> MapperBuilder<T> {
        MapperBuilder {
            config: ParsingConfig::default(),
            schema,
            registry: None,
            field_names: None,
            field_subset: None,
        }
    }

    /// True once field names have been resolved, either from explicit
    /// configuration or from a header line
    pub fn is_resolved(&self) -> bool {
        self.plan.get().is_some()
    }

    /// Resolve field names from a header line.
    ///
    /// The header is tokenized with this mapper's configuration and its
    /// tokens become the field names. Resolution happens at most once: if
    /// names are already resolved (explicitly or from an earlier header),
    /// further header lines are ignored.
    pub fn resolve_header(&self, header_line: &str) -> Result<()> {
        if self.is_resolved() {
            debug!("field names already resolved, ignoring header line");
            return Ok(());
        }

        let names = resolver::resolve_header_names(header_line, &self.config)?;
        let plan = self.build_plan_from_names(names)?;
        // A racing set cannot happen in single-threaded use; if the cell is
        // already filled the earlier resolution stands.
        let _ = self.plan.set(plan);
        Ok(())
    }

    /// Parse one data line into named raw fields.
    ///
    /// Without a field subset, the token count must equal the resolved
    /// field count. With a subset, only the referenced token positions are
    /// validated to exist; all other tokens are ignored entirely.
    pub fn parse(&self, line: &str) -> Result<FlatRecord> {
        let plan = self.plan()?;
        let mut tokens = tokenize(line, &self.config)?;

        if plan.exact_arity {
            if tokens.len() != plan.entries.len() {
                return Err(Error::arity(plan.entries.len(), tokens.len()));
            }
        } else if tokens.len() < plan.required_tokens {
            return Err(Error::arity(plan.required_tokens, tokens.len()));
        }

        let fields = plan
            .entries
            .iter()
            .map(|entry| {
                let raw_content = std::mem::take(&mut tokens[entry.token_index].raw_content);
                RawField::named(entry.name.clone(), entry.token_index, raw_content)
            })
            .collect();

        Ok(FlatRecord::new(fields))
    }

    /// Map parsed fields onto a fresh target object.
    ///
    /// Conversion is fail-fast: the first failing field aborts the whole
    /// mapping and reports that field's index and name. No partially
    /// populated object is ever returned.
    pub fn map(&self, record: &FlatRecord) -> Result<T>
    where
        T: Default,
    {
        let plan = self.plan()?;
        if record.len() != plan.entries.len() {
            return Err(Error::arity(plan.entries.len(), record.len()));
        }

        let mut target = T::default();
        for (entry, field) in plan.entries.iter().zip(record.fields()) {
            let binding = self.schema.binding_at(entry.binding).ok_or_else(|| {
                Error::configuration(format!("no binding for field '{}'", entry.name))
            })?;
            let converter = self.registry.require(binding.field_type())?;
            let value = converter
                .convert(Some(field.raw_content.as_str()))
                .map_err(|source| Error::conversion(field.index, entry.name.clone(), source))?;
            binding.apply(&mut target, value)?;
        }

        Ok(target)
    }

    /// Parse one data line and map it onto a fresh target object
    pub fn parse_and_map(&self, line: &str) -> Result<T>
    where
        T: Default,
    {
        let record = self.parse(line)?;
        self.map(&record)
    }

    fn plan(&self) -> Result<&MappingPlan> {
        self.plan.get().ok_or_else(|| {
            Error::configuration(
                "field names not resolved: configure explicit names or resolve a header line",
            )
        })
    }

    /// Build the mapping plan from a full, in-order name set, honoring the
    /// configured field subset
    fn build_plan_from_names(&self, names: Vec<String>) -> Result<MappingPlan> {
        let selections = match &self.subset {
            None => names.into_iter().enumerate().collect(),
            Some(indices) => {
                let mut selections = Vec::with_capacity(indices.len());
                for &index in indices {
                    let name = names.get(index).ok_or_else(|| {
                        Error::configuration(format!(
                            "field subset index {index} is outside the {} resolved field name(s)",
                            names.len()
                        ))
                    })?;
                    selections.push((index, name.clone()));
                }
                selections
            }
        };
        MappingPlan::build(
            selections,
            self.subset.is_none(),
            &self.schema,
            &self.registry,
        )
    }
}

impl<T> std::fmt::Debug for DelimitedRecordMapper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelimitedRecordMapper")
            .field("config", &self.config)
            .field("subset", &self.subset)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Builder producing an immutable [`DelimitedRecordMapper`].
///
/// All configuration is collected here and validated in [`build`]; the
/// resulting mapper has no setters.
///
/// [`build`]: MapperBuilder::build
pub struct MapperBuilder<T> {
    config: ParsingConfig,
    schema: TargetSchema<T>,
    registry: Option<ConverterRegistry>,
    field_names: Option<Vec<String>>,
    field_subset: Option<Vec<usize>>,
}

impl<T> MapperBuilder<T> {
    /// Set the field delimiter (one or more characters, matched literally)
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    /// Set the qualifier character wrapping every field of a line
    pub fn qualifier(mut self, qualifier: char) -> Self {
        self.config.qualifier = Some(qualifier);
        self
    }

    /// Enable or disable whitespace trimming of raw tokens
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.config.trim_whitespace = trim;
        self
    }

    /// Provide explicit field names, in token order. Explicit names win
    /// over header resolution outright.
    pub fn field_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict mapping to a subset of token positions. Positions outside
    /// the subset are neither converted nor validated.
    pub fn field_subset(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.field_subset = Some(indices.into_iter().collect());
        self
    }

    /// Replace the default converter registry
    pub fn registry(mut self, registry: ConverterRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Validate the configuration and produce an immutable mapper.
    ///
    /// With explicit field names the whole mapping plan is built and
    /// validated here; in convention mode validation completes when a
    /// header line is resolved.
    pub fn build(self) -> Result<DelimitedRecordMapper<T>> {
        self.config.validate()?;

        if let Some(subset) = &self.field_subset {
            if subset.is_empty() {
                return Err(Error::configuration("field subset must not be empty"));
            }
            for (i, index) in subset.iter().enumerate() {
                if subset[..i].contains(index) {
                    return Err(Error::configuration(format!(
                        "field subset index {index} is listed more than once"
                    )));
                }
            }
        }

        if let (Some(names), Some(subset)) = (&self.field_names, &self.field_subset) {
            if names.len() != subset.len() {
                return Err(Error::configuration(format!(
                    "{} explicit field name(s) do not match {} subset index(es)",
                    names.len(),
                    subset.len()
                )));
            }
        }

        let mapper = DelimitedRecordMapper {
            config: self.config,
            schema: self.schema,
            registry: self.registry.unwrap_or_default(),
            subset: self.field_subset,
            plan: OnceCell::new(),
        };

        if let Some(names) = self.field_names {
            // Explicit names pair with subset indices directly; without a
            // subset they map positionally.
            let selections: Vec<(usize, String)> = match &mapper.subset {
                Some(indices) => indices.iter().copied().zip(names).collect(),
                None => names.into_iter().enumerate().collect(),
            };
            let plan = MappingPlan::build(
                selections,
                mapper.subset.is_none(),
                &mapper.schema,
                &mapper.registry,
            )?;
            let _ = mapper.plan.set(plan);
        }

        Ok(mapper)
    }
}
