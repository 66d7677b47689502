//! Onboarding lifecycle: role-gated transitions and revision audit reports.
//!
//! The crate is a pure core with two independent engines over a shared
//! status/event vocabulary. Persistence, transport and authentication stay
//! with the caller; everything here is a synchronous function of its input.
//!
//! # Core Concepts
//!
//! - **Vocabulary**: statuses and events via the `Status` and `Event` traits
//! - **Permissions**: a validated transition graph whose edges may require
//!   roles, and an engine listing the events a caller may trigger
//! - **Audit**: a diff engine turning an ordered snapshot history into
//!   field-level change records at each status transition
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use onboarding_lifecycle::core::{CallerRoles, Snapshot};
//! use onboarding_lifecycle::onboarding::{
//!     self, roles, Employee, OnboardingEvent, OnboardingStatus,
//! };
//! use uuid::Uuid;
//!
//! // Which actions may an HR user offer for an open record?
//! let engine = onboarding::permission_engine().unwrap();
//! let events = engine.permitted_events(&OnboardingStatus::Open, &CallerRoles::from_iter([roles::HR]));
//! assert!(events.contains(&OnboardingEvent::ScheduleSend));
//!
//! // What changed when the record was handed to the BPO?
//! let mut employee = Employee::new(Uuid::new_v4());
//! employee.first_name = Some("Ada".to_string());
//! let opened = Snapshot::capture(1, Utc::now(), &employee).unwrap();
//!
//! employee.onboarding_status = OnboardingStatus::SentToBpo;
//! let submitted = Snapshot::capture(2, Utc::now(), &employee).unwrap();
//!
//! let records = Employee::audit_engine()
//!     .unwrap()
//!     .compute_change_report(&[opened, submitted])
//!     .unwrap();
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].field, "first_name");
//! ```

pub mod audit;
pub mod builder;
pub mod core;
pub mod onboarding;
pub mod permissions;

// Re-export commonly used types
pub use audit::{ChangeRecord, ChangeReport, DiffPolicy, RevisionDiffEngine};
pub use builder::{BuildError, TransitionBuilder, TransitionGraphBuilder};
pub use self::core::{CallerRoles, ContractViolation, Event, RoleRule, Snapshot, Status};
pub use permissions::{Transition, TransitionGraph, TransitionPermissionEngine};
