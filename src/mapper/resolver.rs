//! Field-name resolution and mapping-plan construction
//!
//! Field names come either from explicit configuration or, by convention,
//! from a designated header line tokenized with the same tokenizer
//! configuration as the data lines. Once names are known, a mapping plan
//! pins each selected token position to a validated schema binding so the
//! per-line path does no lookups.

use crate::config::ParsingConfig;
use crate::convert::ConverterRegistry;
use crate::mapper::schema::TargetSchema;
use crate::tokenizer::tokenize;
use crate::{Error, Result};

/// Resolve field names from a header line.
///
/// The header is tokenized with the same configuration as data lines and
/// the resulting raw tokens are used as names verbatim, case and
/// whitespace as produced by the tokenizer's trim policy.
pub fn resolve_header_names(header_line: &str, config: &ParsingConfig) -> Result<Vec<String>> {
    let fields = tokenize(header_line, config)?;
    Ok(fields.into_iter().map(|f| f.raw_content).collect())
}

/// One planned field: a token position, its resolved name, and the schema
/// binding position it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanEntry {
    pub token_index: usize,
    pub name: String,
    pub binding: usize,
}

/// Fixed mapping plan for one mapper instance.
///
/// Built at most once, at construction (explicit names) or upon resolving
/// one header line; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MappingPlan {
    pub entries: Vec<PlanEntry>,
    /// Minimum token count a data line must have
    pub required_tokens: usize,
    /// Strict arity: token count must equal entry count (no subset)
    pub exact_arity: bool,
}

impl MappingPlan {
    /// Build a plan from (token position, field name) selections.
    ///
    /// Every selected name must have a schema binding and every bound type
    /// a registered converter; both are checked here, eagerly, so per-line
    /// mapping cannot hit an unvalidated configuration.
    pub fn build<T>(
        selections: Vec<(usize, String)>,
        exact_arity: bool,
        schema: &TargetSchema<T>,
        registry: &ConverterRegistry,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(selections.len());

        for (token_index, name) in selections {
            let (binding_index, binding) = schema.binding(&name).ok_or_else(|| {
                Error::configuration(format!(
                    "field '{name}' has no corresponding target property"
                ))
            })?;
            registry.require(binding.field_type())?;
            entries.push(PlanEntry {
                token_index,
                name,
                binding: binding_index,
            });
        }

        let required_tokens = entries
            .iter()
            .map(|e| e.token_index + 1)
            .max()
            .unwrap_or(0);

        Ok(Self {
            entries,
            required_tokens,
            exact_arity,
        })
    }
}
