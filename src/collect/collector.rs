use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::collect::prompt::{Prompter, field_message};
use crate::error::InitError;
use crate::schema::schema_model::FlatField;
use crate::suggest::suggestion::SuggestionEngine;

/// Flat mapping from dotted identifier to collected value.
pub type ValueMap = HashMap<String, String>;

/// Whether a field still needs an answer from the operator.
pub fn needs_prompt(field: &FlatField<'_>, values: &ValueMap) -> bool {
    field.field.required
        && !field.field.field_type.is_container()
        && values.get(&field.identifier).is_none_or(|v| v.is_empty())
}

/// Prompt for every required field that has no value yet, in flattened order.
///
/// Stops at the first read failure and returns it; values answered before the
/// failure stay in `values`. Returns the number of fields prompted.
pub fn collect_required<R: BufRead, W: Write>(
    fields: &[FlatField<'_>],
    values: &mut ValueMap,
    engine: &SuggestionEngine,
    prompter: &mut Prompter<R, W>,
) -> Result<usize, InitError> {
    let mut prompted = 0;

    for field in fields {
        if !needs_prompt(field, values) {
            continue;
        }

        let suggestion = engine.suggest_for(field);
        let value = prompter.prompt(&field.identifier, &field_message(field), suggestion.as_ref())?;

        tracing::debug!(
            identifier = %field.identifier,
            suggested = suggestion.is_some(),
            "collected value"
        );

        values.insert(field.identifier.clone(), value);
        prompted += 1;
    }

    Ok(prompted)
}
