//! Immutable historical copies of an entity.

use super::error::SnapshotError;
use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Field path to value. Sorted so that every walk over it is deterministic.
pub type FieldMap = BTreeMap<String, Value>;

static NULL: Value = Value::Null;

/// An entity whose revisions can be captured as snapshots.
///
/// The entity's serde representation is its field set. The status is read
/// separately so the diff engine never has to know where it is stored.
pub trait Audited: Serialize {
    type Status: Status;

    fn entity_id(&self) -> Uuid;

    fn status(&self) -> Self::Status;
}

/// Copy of an entity's fields and status at one revision.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::core::Snapshot;
/// use onboarding_lifecycle::onboarding::OnboardingStatus;
/// use serde_json::json;
/// use uuid::Uuid;
///
/// let snapshot = Snapshot::new(Uuid::new_v4(), 1, OnboardingStatus::Open)
///     .with_field("first_name", json!("Ada"));
///
/// assert_eq!(snapshot.field("first_name"), &json!("Ada"));
/// assert!(snapshot.field("last_name").is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: Status> {
    pub entity_id: Uuid,
    /// Monotonically increasing revision number
    pub revision: u64,
    pub recorded_at: DateTime<Utc>,
    pub status: S,
    pub fields: FieldMap,
}

impl<S: Status> Snapshot<S> {
    /// Create a snapshot without fields, recorded now.
    pub fn new(entity_id: Uuid, revision: u64, status: S) -> Self {
        Self {
            entity_id,
            revision,
            recorded_at: Utc::now(),
            status,
            fields: FieldMap::new(),
        }
    }

    /// Set the time the revision was recorded.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.recorded_at = timestamp;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Capture an entity at a revision.
    ///
    /// Nested objects are flattened into dotted paths (`address.city`);
    /// arrays and scalars are kept as leaf values. An empty nested object
    /// contributes no field, the same as an absent one.
    pub fn capture<T>(
        revision: u64,
        recorded_at: DateTime<Utc>,
        entity: &T,
    ) -> Result<Self, SnapshotError>
    where
        T: Audited<Status = S>,
    {
        let fields = flatten_entity(entity)?;
        Ok(Self {
            entity_id: entity.entity_id(),
            revision,
            recorded_at,
            status: entity.status(),
            fields,
        })
    }

    /// Value of a field. Absent fields read as `null`.
    pub fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }
}

/// Serialize an entity and flatten it into a field map.
pub fn flatten_entity<T: Serialize>(entity: &T) -> Result<FieldMap, SnapshotError> {
    match serde_json::to_value(entity)? {
        Value::Object(object) => {
            let mut fields = FieldMap::new();
            flatten_into(&mut fields, None, object);
            Ok(fields)
        }
        other => Err(SnapshotError::NotAnObject {
            kind: value_kind(&other),
        }),
    }
}

fn flatten_into(fields: &mut FieldMap, prefix: Option<&str>, object: Map<String, Value>) {
    for (key, value) in object {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            Value::Object(nested) => {
                flatten_into(fields, Some(&path), nested);
            }
            leaf => {
                fields.insert(path, leaf);
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
