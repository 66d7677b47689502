//! Reconstructs what changed, and when, from a revision history.

use crate::audit::diff::field_delta;
use crate::audit::policy::DiffPolicy;
use crate::audit::record::{Baseline, ChangeRecord, TransitionEntry};
use crate::audit::report::ChangeReport;
use crate::core::{ensure_ordered, ContractViolation, RevisionHistory, Snapshot, Status};
use tracing::{debug, trace};

/// Walks a revision history and reports field changes at status transitions.
///
/// Only revision boundaries where the status changes are reported; edits
/// between two revisions with the same status are treated as intermediate.
/// Each baseline rule of the policy applies to its first matching
/// transition of a call and never again within that call.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::audit::{DiffPolicy, RevisionDiffEngine};
/// use onboarding_lifecycle::core::{FieldMap, Snapshot};
/// use onboarding_lifecycle::onboarding::OnboardingStatus;
/// use serde_json::json;
/// use uuid::Uuid;
///
/// let engine = RevisionDiffEngine::new(DiffPolicy::new().with_baseline(
///     OnboardingStatus::Open,
///     OnboardingStatus::SentToBpo,
///     FieldMap::new(),
/// ));
///
/// let id = Uuid::new_v4();
/// let history = vec![
///     Snapshot::new(id, 1, OnboardingStatus::Open).with_field("city", json!("Linz")),
///     Snapshot::new(id, 2, OnboardingStatus::Open).with_field("city", json!("Graz")),
///     Snapshot::new(id, 3, OnboardingStatus::SentToBpo).with_field("city", json!("Graz")),
/// ];
///
/// let records = engine.compute_change_report(&history).unwrap();
///
/// // Compared against the empty template, not revision 2
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].field, "city");
/// assert!(records[0].previous.is_null());
/// ```
#[derive(Clone, Debug)]
pub struct RevisionDiffEngine<S: Status> {
    policy: DiffPolicy<S>,
}

impl<S: Status> RevisionDiffEngine<S> {
    pub fn new(policy: DiffPolicy<S>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DiffPolicy<S> {
        &self.policy
    }

    /// Flat list of change records, in chronological boundary order.
    ///
    /// `history` must be ordered oldest to newest; it is checked, never
    /// re-sorted.
    pub fn compute_change_report(
        &self,
        history: &[Snapshot<S>],
    ) -> Result<Vec<ChangeRecord<S>>, ContractViolation> {
        Ok(self.audit_trail(history)?.records())
    }

    /// Full report: every status transition with its field changes.
    pub fn audit_trail(&self, history: &[Snapshot<S>]) -> Result<ChangeReport<S>, ContractViolation> {
        ensure_ordered(history)?;
        Ok(self.walk(history))
    }

    /// Report over an already validated history.
    pub fn audit_history(&self, history: &RevisionHistory<S>) -> ChangeReport<S> {
        self.walk(history.snapshots())
    }

    fn walk(&self, snapshots: &[Snapshot<S>]) -> ChangeReport<S> {
        let entity_id = snapshots
            .first()
            .map(|snapshot| snapshot.entity_id)
            .unwrap_or_default();
        debug!(%entity_id, revisions = snapshots.len(), "creating audit report");

        // One flag per baseline rule, local to this call
        let mut applied = vec![false; self.policy.baseline_rules().len()];
        let mut entries = Vec::new();

        for pair in snapshots.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if previous.status == current.status {
                continue;
            }

            let rule = self
                .policy
                .baseline_rules()
                .iter()
                .enumerate()
                .find(|(index, rule)| {
                    !applied[*index] && rule.matches(&previous.status, &current.status)
                });

            let (baseline_fields, baseline) = match rule {
                Some((index, rule)) => {
                    applied[index] = true;
                    (&rule.fields, Baseline::Default)
                }
                None => (
                    &previous.fields,
                    Baseline::Revision {
                        revision: previous.revision,
                    },
                ),
            };

            let changes = field_delta(baseline_fields, &current.fields, |field| {
                self.policy.is_ignored(field)
            });

            trace!(
                from = previous.status.name(),
                to = current.status.name(),
                revision = current.revision,
                ?baseline,
                changes = changes.len(),
                "status transition"
            );

            entries.push(TransitionEntry {
                from: previous.status.clone(),
                to: current.status.clone(),
                revision: current.revision,
                recorded_at: current.recorded_at,
                baseline,
                changes,
            });
        }

        let report = ChangeReport::new(entity_id, entries);
        debug!(
            %entity_id,
            transitions = report.entries.len(),
            changes = report.change_count(),
            "audit report created"
        );
        report
    }
}

impl<S: Status> Default for RevisionDiffEngine<S> {
    fn default() -> Self {
        Self::new(DiffPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldMap;
    use crate::status_enum;
    use serde_json::{json, Value};
    use uuid::Uuid;

    status_enum! {
        enum TestStatus {
            Open,
            SentToBpo,
            Validation,
            Closed,
        }
        final: [Closed]
    }

    fn template() -> FieldMap {
        FieldMap::from([
            ("name".to_string(), Value::Null),
            ("country".to_string(), json!("AT")),
        ])
    }

    fn engine() -> RevisionDiffEngine<TestStatus> {
        RevisionDiffEngine::new(
            DiffPolicy::new()
                .with_baseline(TestStatus::Open, TestStatus::SentToBpo, template())
                .ignore("version"),
        )
    }

    fn snap(id: Uuid, revision: u64, status: TestStatus, name: Value) -> Snapshot<TestStatus> {
        Snapshot::new(id, revision, status)
            .with_field("name", name)
            .with_field("country", json!("AT"))
            .with_field("version", json!(revision))
    }

    #[test]
    fn empty_history_is_a_contract_violation() {
        let result = engine().compute_change_report(&[]);
        assert_eq!(result, Err(ContractViolation::EmptyHistory));
    }

    #[test]
    fn unordered_history_is_a_contract_violation() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 2, TestStatus::Open, Value::Null),
            snap(id, 1, TestStatus::SentToBpo, Value::Null),
        ];

        let result = engine().compute_change_report(&history);
        assert!(matches!(result, Err(ContractViolation::OutOfOrder { .. })));
    }

    #[test]
    fn single_snapshot_yields_nothing() {
        let history = vec![snap(Uuid::new_v4(), 1, TestStatus::Open, json!("x"))];
        assert!(engine().compute_change_report(&history).unwrap().is_empty());
    }

    #[test]
    fn same_status_edits_are_not_reported() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::SentToBpo, json!("a")),
            snap(id, 2, TestStatus::SentToBpo, json!("b")),
            snap(id, 3, TestStatus::SentToBpo, json!("c")),
        ];

        let report = engine().audit_trail(&history).unwrap();
        assert!(report.entries.is_empty());
        assert!(report.is_empty());
    }

    #[test]
    fn first_submission_compares_against_template() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::Open, Value::Null),
            snap(id, 2, TestStatus::Open, json!("draft")),
            snap(id, 3, TestStatus::SentToBpo, json!("Ada")),
        ];

        let records = engine().compute_change_report(&history).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field, "name");
        assert_eq!(records[0].previous, Value::Null);
        assert_eq!(records[0].current, json!("Ada"));
        assert_eq!(records[0].from, TestStatus::Open);
        assert_eq!(records[0].to, TestStatus::SentToBpo);
        assert_eq!(records[0].revision, 3);
        assert!(records[0].compared_with_default());
    }

    #[test]
    fn template_applies_once_per_call() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::Open, Value::Null),
            snap(id, 2, TestStatus::SentToBpo, json!("A")),
            snap(id, 3, TestStatus::Open, json!("B")),
            snap(id, 4, TestStatus::SentToBpo, json!("C")),
        ];

        let records = engine().compute_change_report(&history).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].baseline, Baseline::Default);
        assert_eq!(records[0].previous, Value::Null);
        assert_eq!(records[1].baseline, Baseline::Revision { revision: 2 });
        assert_eq!(records[2].baseline, Baseline::Revision { revision: 3 });
        assert_eq!(records[2].previous, json!("B"));
        assert_eq!(records[2].current, json!("C"));
    }

    #[test]
    fn each_call_starts_fresh() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::Open, json!("draft")),
            snap(id, 2, TestStatus::SentToBpo, json!("Ada")),
        ];
        let engine = engine();

        let first = engine.compute_change_report(&history).unwrap();
        let second = engine.compute_change_report(&history).unwrap();

        assert_eq!(first, second);
        assert!(second[0].compared_with_default());
    }

    #[test]
    fn other_transitions_compare_against_previous_snapshot() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::SentToBpo, json!("a")),
            snap(id, 2, TestStatus::Validation, json!("a")),
            snap(id, 3, TestStatus::Closed, json!("b")),
        ];

        let report = engine().audit_trail(&history).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert!(report.entries[0].changes.is_empty());
        assert_eq!(report.entries[1].changes.len(), 1);
        assert_eq!(report.entries[1].changes[0].previous, json!("a"));
    }

    #[test]
    fn ignored_fields_are_never_reported() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::SentToBpo, json!("a")),
            snap(id, 7, TestStatus::Validation, json!("a")),
        ];

        let records = engine().compute_change_report(&history).unwrap();
        assert!(records.iter().all(|record| record.field != "version"));
    }

    #[test]
    fn audit_history_matches_slice_input() {
        let id = Uuid::new_v4();
        let snapshots = vec![
            snap(id, 1, TestStatus::Open, Value::Null),
            snap(id, 2, TestStatus::SentToBpo, json!("A")),
        ];
        let history = RevisionHistory::from_snapshots(snapshots.clone()).unwrap();
        let engine = engine();

        assert_eq!(
            engine.audit_history(&history),
            engine.audit_trail(&snapshots).unwrap()
        );
    }

    #[test]
    fn engine_without_rules_always_uses_previous_snapshot() {
        let id = Uuid::new_v4();
        let history = vec![
            snap(id, 1, TestStatus::Open, json!("draft")),
            snap(id, 2, TestStatus::SentToBpo, json!("Ada")),
        ];

        let records = RevisionDiffEngine::default()
            .compute_change_report(&history)
            .unwrap();

        let name = records.iter().find(|r| r.field == "name").unwrap();
        assert_eq!(name.previous, json!("draft"));
        // version is not ignored by the default policy
        assert!(records.iter().any(|r| r.field == "version"));
    }
}
