//! Change records and the per-transition audit trail.

use crate::audit::diff::FieldChange;
use crate::core::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a snapshot was compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Baseline {
    /// The canonical default template of a baseline rule
    Default,
    /// The literal previous snapshot
    Revision { revision: u64 },
}

/// One meaningful field difference detected at a status transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ChangeRecord<S: Status> {
    pub field: String,
    pub previous: Value,
    pub current: Value,
    /// Status before the transition
    pub from: S,
    /// Status after the transition
    pub to: S,
    /// Revision at which the change became visible
    pub revision: u64,
    pub recorded_at: DateTime<Utc>,
    pub baseline: Baseline,
}

impl<S: Status> ChangeRecord<S> {
    pub fn compared_with_default(&self) -> bool {
        self.baseline == Baseline::Default
    }
}

/// A detected status transition together with its field changes.
///
/// Transitions without any field change are kept, so the trail shows every
/// status change even when no data moved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionEntry<S: Status> {
    pub from: S,
    pub to: S,
    pub revision: u64,
    pub recorded_at: DateTime<Utc>,
    pub baseline: Baseline,
    pub changes: Vec<FieldChange>,
}

impl<S: Status> TransitionEntry<S> {
    /// Flatten into change records, keeping field order.
    pub fn records(&self) -> impl Iterator<Item = ChangeRecord<S>> + '_ {
        self.changes.iter().map(|change| ChangeRecord {
            field: change.field.clone(),
            previous: change.previous.clone(),
            current: change.current.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            revision: self.revision,
            recorded_at: self.recorded_at,
            baseline: self.baseline,
        })
    }
}
