//! Diff policy: baseline substitution rules and ignored fields.

use crate::core::{FieldMap, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Compare one status transition against a fixed template.
///
/// The first time `from -> to` occurs in a report, the new snapshot is
/// compared against `fields` instead of the literal previous snapshot.
/// Later occurrences in the same report compare normally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BaselineRule<S: Status> {
    pub from: S,
    pub to: S,
    pub fields: FieldMap,
}

impl<S: Status> BaselineRule<S> {
    pub fn matches(&self, from: &S, to: &S) -> bool {
        self.from == *from && self.to == *to
    }
}

/// What the diff engine compares and reports.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::audit::DiffPolicy;
/// use onboarding_lifecycle::core::FieldMap;
/// use onboarding_lifecycle::onboarding::OnboardingStatus;
///
/// let policy = DiffPolicy::new()
///     .with_baseline(OnboardingStatus::Open, OnboardingStatus::SentToBpo, FieldMap::new())
///     .ignore("id")
///     .ignore("audit");
///
/// assert!(policy.is_ignored("id"));
/// assert!(policy.is_ignored("audit.modified_by"));
/// assert!(!policy.is_ignored("identity"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DiffPolicy<S: Status> {
    #[serde(default)]
    baseline_rules: Vec<BaselineRule<S>>,
    #[serde(default)]
    ignored_fields: BTreeSet<String>,
}

impl<S: Status> DiffPolicy<S> {
    /// A policy without baseline rules that reports every field.
    pub fn new() -> Self {
        Self {
            baseline_rules: Vec::new(),
            ignored_fields: BTreeSet::new(),
        }
    }

    /// Add a baseline substitution rule for `from -> to`.
    pub fn with_baseline(mut self, from: S, to: S, fields: FieldMap) -> Self {
        self.baseline_rules.push(BaselineRule { from, to, fields });
        self
    }

    /// Never report `field` or anything nested below it.
    pub fn ignore(mut self, field: impl Into<String>) -> Self {
        self.ignored_fields.insert(field.into());
        self
    }

    pub fn baseline_rules(&self) -> &[BaselineRule<S>] {
        &self.baseline_rules
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored_fields.iter().any(|ignored| {
            path == ignored
                || path
                    .strip_prefix(ignored.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

impl<S: Status> Default for DiffPolicy<S> {
    fn default() -> Self {
        Self::new()
    }
}
