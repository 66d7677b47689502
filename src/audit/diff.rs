//! Field-level delta between two field maps.

use crate::core::FieldMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

static NULL: Value = Value::Null;

/// One field whose value differs between baseline and current snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub previous: Value,
    pub current: Value,
}

/// Compare every tracked field of `baseline` and `current`.
///
/// Fields are compared by value; a field missing on one side counts as
/// `null` there. Changes come out sorted by field path.
pub fn field_delta<F>(baseline: &FieldMap, current: &FieldMap, is_ignored: F) -> Vec<FieldChange>
where
    F: Fn(&str) -> bool,
{
    let fields: BTreeSet<&String> = baseline.keys().chain(current.keys()).collect();

    fields
        .into_iter()
        .filter(|field| !is_ignored(field))
        .filter_map(|field| {
            let previous = baseline.get(field).unwrap_or(&NULL);
            let current = current.get(field).unwrap_or(&NULL);
            (previous != current).then(|| FieldChange {
                field: field.clone(),
                previous: previous.clone(),
                current: current.clone(),
            })
        })
        .collect()
}
