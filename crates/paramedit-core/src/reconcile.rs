//! Joining parameter definitions with their stored values.
//!
//! [`reconcile`] runs once when an editing session opens. It walks the
//! definitions in order and pairs each with the first stored value carrying
//! its id. Definitions with no stored value are skipped: they never become
//! editable records, and no default value is synthesized for them.

use std::collections::HashMap;

use crate::id::ParamId;
use crate::types::{EditableRecord, ParameterDefinition, StoredValue};

/// Builds the initial editable records, in definition order.
///
/// When several stored values share a `param_id`, the earliest one wins.
pub fn reconcile(
    definitions: &[ParameterDefinition],
    values: &[StoredValue],
) -> Vec<EditableRecord> {
    let mut first_by_id: HashMap<ParamId, &StoredValue> = HashMap::with_capacity(values.len());
    for value in values {
        first_by_id.entry(value.param_id).or_insert(value);
    }

    let records: Vec<EditableRecord> = definitions
        .iter()
        .filter_map(|def| {
            first_by_id
                .get(&def.id)
                .map(|value| EditableRecord::from_parts(def, value))
        })
        .collect();

    let dropped = definitions.len() - records.len();
    if dropped > 0 {
        tracing::debug!(
            dropped,
            kept = records.len(),
            "definitions without a stored value left out of the record set"
        );
    }

    records
}
