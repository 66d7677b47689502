//! The employee record tracked through onboarding.

use crate::audit::{DiffPolicy, RevisionDiffEngine};
use crate::core::{flatten_entity, Audited, SnapshotError};
use crate::onboarding::status::OnboardingStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub weekly_hours: Option<f64>,
    /// Tenant-configured extra fields, keyed by field id
    #[serde(default)]
    pub assignment_specific_data: BTreeMap<String, Value>,
}

/// Employee data as stored at one revision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub onboarding_status: OnboardingStatus,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub contract: Contract,
}

impl Employee {
    /// A blank record in the initial status.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            onboarding_status: OnboardingStatus::INITIAL,
            first_name: None,
            last_name: None,
            email: None,
            birth_date: None,
            address: Address::default(),
            contract: Contract::default(),
        }
    }

    /// Diff policy for employee audit reports.
    ///
    /// The first submission to the BPO is compared against a blank employee,
    /// so the report shows the complete data handed over rather than the
    /// last edit made while the record was open. Identity and status fields
    /// are never reported as changes.
    pub fn diff_policy() -> Result<DiffPolicy<OnboardingStatus>, SnapshotError> {
        let blank = flatten_entity(&Self::new(Uuid::nil()))?;

        Ok(DiffPolicy::new()
            .with_baseline(OnboardingStatus::Open, OnboardingStatus::SentToBpo, blank)
            .ignore("id")
            .ignore("onboarding_status"))
    }

    /// Diff engine configured with [`Employee::diff_policy`].
    pub fn audit_engine() -> Result<RevisionDiffEngine<OnboardingStatus>, SnapshotError> {
        Self::diff_policy().map(RevisionDiffEngine::new)
    }
}

impl Audited for Employee {
    type Status = OnboardingStatus;

    fn entity_id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> OnboardingStatus {
        self.onboarding_status
    }
}
