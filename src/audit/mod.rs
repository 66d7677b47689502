//! Revision audit: what changed, and when.
//!
//! The [`RevisionDiffEngine`] turns an ordered snapshot history into change
//! records, one per field that differs at a status transition, under a
//! configurable [`DiffPolicy`].

mod diff;
mod engine;
mod policy;
mod record;
mod report;

pub use diff::{field_delta, FieldChange};
pub use engine::RevisionDiffEngine;
pub use policy::{BaselineRule, DiffPolicy};
pub use record::{Baseline, ChangeRecord, TransitionEntry};
pub use report::{ChangeReport, ReportError, REPORT_VERSION};
