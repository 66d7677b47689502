//! Property-based tests for the permission and diff engines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use onboarding_lifecycle::audit::{Baseline, DiffPolicy, RevisionDiffEngine};
use onboarding_lifecycle::core::{CallerRoles, FieldMap, Snapshot, Status};
use onboarding_lifecycle::onboarding::{self, OnboardingStatus};
use onboarding_lifecycle::status_enum;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;
use uuid::Uuid;

const ROLES: [&str; 5] = ["HR", "BPO", "MANAGER", "SYSTEM", "GUEST"];

status_enum! {
    enum TestStatus {
        Open,
        SentToBpo,
        Validation,
        Closed,
    }
    final: [Closed]
}

prop_compose! {
    fn arbitrary_onboarding_status()(index in 0..OnboardingStatus::all().len()) -> OnboardingStatus {
        OnboardingStatus::all()[index]
    }
}

prop_compose! {
    fn arbitrary_roles()(mask in 0u8..32) -> CallerRoles {
        ROLES
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, role)| *role)
            .collect()
    }
}

prop_compose! {
    fn arbitrary_test_status()(index in 0..TestStatus::all().len()) -> TestStatus {
        TestStatus::all()[index]
    }
}

fn arbitrary_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("a")),
        Just(json!("b")),
        Just(json!(1)),
    ]
}

prop_compose! {
    fn arbitrary_history()(
        steps in prop::collection::vec(
            (arbitrary_test_status(), arbitrary_value(), arbitrary_value()),
            1..12,
        )
    ) -> Vec<Snapshot<TestStatus>> {
        let id = Uuid::nil();
        steps
            .into_iter()
            .enumerate()
            .map(|(index, (status, x, y))| {
                Snapshot::new(id, index as u64 + 1, status)
                    .with_field("x", x)
                    .with_field("y", y)
            })
            .collect()
    }
}

fn engine() -> RevisionDiffEngine<TestStatus> {
    RevisionDiffEngine::new(DiffPolicy::new().with_baseline(
        TestStatus::Open,
        TestStatus::SentToBpo,
        FieldMap::new(),
    ))
}

proptest! {
    #[test]
    fn permitted_events_come_from_outgoing_transitions(
        status in arbitrary_onboarding_status(),
        roles in arbitrary_roles(),
    ) {
        let engine = onboarding::permission_engine().unwrap();

        let outgoing: HashSet<_> = engine
            .graph()
            .outgoing(&status)
            .map(|transition| transition.trigger)
            .collect();
        let permitted = engine.permitted_events(&status, &roles);

        prop_assert!(permitted.is_subset(&outgoing));
    }

    #[test]
    fn unguarded_transitions_are_always_permitted(
        status in arbitrary_onboarding_status(),
        roles in arbitrary_roles(),
    ) {
        let engine = onboarding::permission_engine().unwrap();
        let permitted = engine.permitted_events(&status, &roles);

        for transition in engine.graph().outgoing(&status) {
            if transition.required_roles.is_none() {
                prop_assert!(permitted.contains(&transition.trigger));
            }
        }
    }

    #[test]
    fn no_roles_means_only_unguarded_events(status in arbitrary_onboarding_status()) {
        let engine = onboarding::permission_engine().unwrap();
        let permitted = engine.permitted_events(&status, &CallerRoles::none());

        let unguarded: HashSet<_> = engine
            .graph()
            .outgoing(&status)
            .filter(|transition| transition.required_roles.is_none())
            .map(|transition| transition.trigger)
            .collect();

        prop_assert_eq!(permitted, unguarded);
    }

    #[test]
    fn more_roles_never_remove_events(
        status in arbitrary_onboarding_status(),
        roles in arbitrary_roles(),
    ) {
        let engine = onboarding::permission_engine().unwrap();
        let everyone = CallerRoles::from_iter(ROLES);

        let some = engine.permitted_events(&status, &roles);
        let all = engine.permitted_events(&status, &everyone);

        prop_assert!(some.is_subset(&all));
    }

    #[test]
    fn report_is_deterministic(history in arbitrary_history()) {
        let engine = engine();

        let first = engine.compute_change_report(&history).unwrap();
        let second = engine.compute_change_report(&history).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn records_only_at_status_changes(history in arbitrary_history()) {
        let records = engine().compute_change_report(&history).unwrap();

        for record in &records {
            prop_assert_ne!(record.from, record.to);
            prop_assert_ne!(&record.previous, &record.current);
        }
    }

    #[test]
    fn records_follow_boundary_order(history in arbitrary_history()) {
        let records = engine().compute_change_report(&history).unwrap();

        for pair in records.windows(2) {
            prop_assert!(pair[0].revision <= pair[1].revision);
            if pair[0].revision == pair[1].revision {
                prop_assert!(pair[0].field < pair[1].field);
            }
        }
    }

    #[test]
    fn default_baseline_applies_at_most_once(history in arbitrary_history()) {
        let report = engine().audit_trail(&history).unwrap();

        let defaults = report
            .entries
            .iter()
            .filter(|entry| entry.baseline == Baseline::Default)
            .count();
        prop_assert!(defaults <= 1);

        if let Some(first) = report
            .entries
            .iter()
            .find(|entry| entry.from == TestStatus::Open && entry.to == TestStatus::SentToBpo)
        {
            prop_assert_eq!(first.baseline, Baseline::Default);
        }
    }

    #[test]
    fn constant_status_history_reports_nothing(
        status in arbitrary_test_status(),
        values in prop::collection::vec(arbitrary_value(), 1..8),
    ) {
        let id = Uuid::new_v4();
        let history: Vec<_> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Snapshot::new(id, index as u64 + 1, status).with_field("x", value)
            })
            .collect();

        let report = engine().audit_trail(&history).unwrap();

        prop_assert!(report.entries.is_empty());
        prop_assert!(report.records().is_empty());
    }

    #[test]
    fn one_entry_per_status_change(history in arbitrary_history()) {
        let report = engine().audit_trail(&history).unwrap();

        let changes = history
            .windows(2)
            .filter(|pair| pair[0].status != pair[1].status)
            .count();
        prop_assert_eq!(report.entries.len(), changes);
    }
}
