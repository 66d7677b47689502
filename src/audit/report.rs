//! Audit report over the whole revision history of one entity.

use crate::audit::record::{ChangeRecord, TransitionEntry};
use crate::core::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

/// Version identifier for the exported report format
pub const REPORT_VERSION: u32 = 1;

/// Errors that can occur when exporting or importing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    #[error("Report deserialization failed: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    #[error("Unsupported report version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Status transitions of one entity, in chronological order, each with the
/// field changes detected at it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ChangeReport<S: Status> {
    /// Report format version
    pub version: u32,
    pub entity_id: Uuid,
    pub entries: Vec<TransitionEntry<S>>,
}

impl<S: Status> ChangeReport<S> {
    pub fn new(entity_id: Uuid, entries: Vec<TransitionEntry<S>>) -> Self {
        Self {
            version: REPORT_VERSION,
            entity_id,
            entries,
        }
    }

    /// Flat change records in boundary order.
    pub fn records(&self) -> Vec<ChangeRecord<S>> {
        self.entries.iter().flat_map(|entry| entry.records()).collect()
    }

    /// Number of change records across all transitions.
    pub fn change_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.changes.len()).sum()
    }

    /// `true` if no field changed at any transition.
    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }

    /// Every field that changed at least once, sorted.
    pub fn fields_changed(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.changes.iter())
            .map(|change| change.field.as_str())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(ReportError::SerializationFailed)
    }

    /// Parse an exported report, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json).map_err(ReportError::DeserializationFailed)?;
        if report.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: report.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(report)
    }
}
