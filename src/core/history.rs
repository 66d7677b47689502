//! Validated revision history of one entity.
//!
//! The history is the ordered input of the diff engine. It is immutable:
//! `record` returns a new history with the snapshot appended, and every
//! constructor enforces the ordering contract up front.

use super::error::ContractViolation;
use super::snapshot::Snapshot;
use super::status::Status;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Check that snapshots form a valid history: non-empty, one entity,
/// strictly ascending revision numbers.
///
/// The sequence is never re-sorted; a violation is reported as-is.
pub fn ensure_ordered<S: Status>(snapshots: &[Snapshot<S>]) -> Result<(), ContractViolation> {
    let first = snapshots.first().ok_or(ContractViolation::EmptyHistory)?;

    for pair in snapshots.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.entity_id != first.entity_id {
            return Err(ContractViolation::MixedEntities {
                expected: first.entity_id,
                found: current.entity_id,
            });
        }
        if current.revision <= previous.revision {
            return Err(ContractViolation::OutOfOrder {
                previous: previous.revision,
                current: current.revision,
            });
        }
    }

    Ok(())
}

/// Ordered, non-empty history of snapshots of one entity, oldest first.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::core::{RevisionHistory, Snapshot};
/// use onboarding_lifecycle::onboarding::OnboardingStatus;
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// let history = RevisionHistory::new(Snapshot::new(id, 1, OnboardingStatus::Open));
///
/// let history = history
///     .record(Snapshot::new(id, 2, OnboardingStatus::Open))
///     .unwrap()
///     .record(Snapshot::new(id, 5, OnboardingStatus::SentToBpo))
///     .unwrap();
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(
///     history.status_path(),
///     vec![&OnboardingStatus::Open, &OnboardingStatus::SentToBpo]
/// );
///
/// // Revisions must keep increasing
/// assert!(history.record(Snapshot::new(id, 4, OnboardingStatus::Open)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "",
    try_from = "Vec<Snapshot<S>>",
    into = "Vec<Snapshot<S>>"
)]
pub struct RevisionHistory<S: Status> {
    snapshots: Vec<Snapshot<S>>,
}

impl<S: Status> RevisionHistory<S> {
    /// Start a history at the entity's first known revision.
    pub fn new(first: Snapshot<S>) -> Self {
        Self {
            snapshots: vec![first],
        }
    }

    /// Build a history from snapshots loaded by a versioned store.
    ///
    /// Fails with a [`ContractViolation`] for an empty sequence, revisions
    /// that are not strictly ascending, or snapshots of different entities.
    pub fn from_snapshots(snapshots: Vec<Snapshot<S>>) -> Result<Self, ContractViolation> {
        ensure_ordered(&snapshots)?;
        Ok(Self { snapshots })
    }

    /// Record a newer snapshot, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, snapshot: Snapshot<S>) -> Result<Self, ContractViolation> {
        let latest = self.latest();
        if snapshot.entity_id != latest.entity_id {
            return Err(ContractViolation::MixedEntities {
                expected: latest.entity_id,
                found: snapshot.entity_id,
            });
        }
        if snapshot.revision <= latest.revision {
            return Err(ContractViolation::OutOfOrder {
                previous: latest.revision,
                current: snapshot.revision,
            });
        }

        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Ok(Self { snapshots })
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot<S>] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false` for a constructed history.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> &Snapshot<S> {
        &self.snapshots[0]
    }

    pub fn latest(&self) -> &Snapshot<S> {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Statuses the entity went through, with consecutive repeats collapsed.
    pub fn status_path(&self) -> Vec<&S> {
        let mut path: Vec<&S> = Vec::new();
        for snapshot in &self.snapshots {
            if path.last() != Some(&&snapshot.status) {
                path.push(&snapshot.status);
            }
        }
        path
    }

    /// Time between the first and the latest snapshot.
    ///
    /// Returns `None` if the clock went backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        self.latest()
            .recorded_at
            .signed_duration_since(self.first().recorded_at)
            .to_std()
            .ok()
    }
}

impl<S: Status> TryFrom<Vec<Snapshot<S>>> for RevisionHistory<S> {
    type Error = ContractViolation;

    fn try_from(snapshots: Vec<Snapshot<S>>) -> Result<Self, Self::Error> {
        Self::from_snapshots(snapshots)
    }
}

impl<S: Status> From<RevisionHistory<S>> for Vec<Snapshot<S>> {
    fn from(history: RevisionHistory<S>) -> Self {
        history.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};
    use uuid::Uuid;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestStatus {
        Open,
        Submitted,
        Closed,
    }

    impl Status for TestStatus {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Submitted => "Submitted",
                Self::Closed => "Closed",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Open, Self::Submitted, Self::Closed]
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Closed)
        }
    }

    fn snapshot(id: Uuid, revision: u64, status: TestStatus) -> Snapshot<TestStatus> {
        Snapshot::new(id, revision, status)
    }

    #[test]
    fn empty_history_is_rejected() {
        let result = RevisionHistory::<TestStatus>::from_snapshots(Vec::new());
        assert_eq!(result, Err(ContractViolation::EmptyHistory));
    }

    #[test]
    fn unordered_history_is_rejected() {
        let id = Uuid::new_v4();
        let result = RevisionHistory::from_snapshots(vec![
            snapshot(id, 1, TestStatus::Open),
            snapshot(id, 3, TestStatus::Submitted),
            snapshot(id, 2, TestStatus::Closed),
        ]);

        assert_eq!(
            result,
            Err(ContractViolation::OutOfOrder {
                previous: 3,
                current: 2
            })
        );
    }

    #[test]
    fn duplicate_revision_is_rejected() {
        let id = Uuid::new_v4();
        let result = ensure_ordered(&[
            snapshot(id, 4, TestStatus::Open),
            snapshot(id, 4, TestStatus::Open),
        ]);

        assert!(matches!(result, Err(ContractViolation::OutOfOrder { .. })));
    }

    #[test]
    fn mixed_entities_are_rejected() {
        let first = Uuid::new_v4();
        let other = Uuid::new_v4();
        let result = ensure_ordered(&[
            snapshot(first, 1, TestStatus::Open),
            snapshot(other, 2, TestStatus::Open),
        ]);

        assert_eq!(
            result,
            Err(ContractViolation::MixedEntities {
                expected: first,
                found: other
            })
        );
    }

    #[test]
    fn record_is_immutable() {
        let id = Uuid::new_v4();
        let history = RevisionHistory::new(snapshot(id, 1, TestStatus::Open));

        let newer = history
            .record(snapshot(id, 2, TestStatus::Submitted))
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(newer.len(), 2);
        assert_eq!(newer.latest().revision, 2);
    }

    #[test]
    fn record_rejects_older_revision() {
        let id = Uuid::new_v4();
        let history = RevisionHistory::new(snapshot(id, 5, TestStatus::Open));

        let result = history.record(snapshot(id, 5, TestStatus::Submitted));
        assert!(matches!(result, Err(ContractViolation::OutOfOrder { .. })));
    }

    #[test]
    fn status_path_collapses_repeats() {
        let id = Uuid::new_v4();
        let history = RevisionHistory::from_snapshots(vec![
            snapshot(id, 1, TestStatus::Open),
            snapshot(id, 2, TestStatus::Open),
            snapshot(id, 3, TestStatus::Submitted),
            snapshot(id, 4, TestStatus::Open),
            snapshot(id, 5, TestStatus::Closed),
        ])
        .unwrap();

        assert_eq!(
            history.status_path(),
            vec![
                &TestStatus::Open,
                &TestStatus::Submitted,
                &TestStatus::Open,
                &TestStatus::Closed
            ]
        );
    }

    #[test]
    fn duration_spans_first_to_latest() {
        let id = Uuid::new_v4();
        let start = Utc::now();
        let history = RevisionHistory::from_snapshots(vec![
            snapshot(id, 1, TestStatus::Open).at(start),
            snapshot(id, 2, TestStatus::Closed).at(start + ChronoDuration::seconds(90)),
        ])
        .unwrap();

        assert_eq!(history.duration(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn single_snapshot_has_duration_zero() {
        let history = RevisionHistory::new(snapshot(Uuid::new_v4(), 1, TestStatus::Open));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_as_snapshot_list() {
        let id = Uuid::new_v4();
        let history = RevisionHistory::from_snapshots(vec![
            snapshot(id, 1, TestStatus::Open),
            snapshot(id, 2, TestStatus::Submitted),
        ])
        .unwrap();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RevisionHistory<TestStatus> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, history);
    }

    #[test]
    fn deserializing_unordered_history_fails() {
        let id = Uuid::new_v4();
        let json = serde_json::to_string(&vec![
            snapshot(id, 2, TestStatus::Open),
            snapshot(id, 1, TestStatus::Open),
        ])
        .unwrap();

        let result: Result<RevisionHistory<TestStatus>, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
