//! Core vocabulary and data types.
//!
//! This module contains the pure building blocks shared by both engines:
//! - Status and event vocabulary via the `Status` and `Event` traits
//! - Role guards attached to transitions
//! - Snapshots and validated revision histories
//!
//! Nothing in this module performs I/O or keeps state between calls.

mod error;
mod history;
mod roles;
mod snapshot;
mod status;

pub use error::{ContractViolation, SnapshotError};
pub use history::{ensure_ordered, RevisionHistory};
pub use roles::{CallerRoles, RoleRule};
pub use snapshot::{flatten_entity, Audited, FieldMap, Snapshot};
pub use status::{Event, Status};
