//! Role-gated transition graphs and permission queries.
//!
//! A [`TransitionGraph`] is built once at startup, validated as a whole, and
//! read-only afterwards. The [`TransitionPermissionEngine`] answers which
//! events a caller may trigger from a given status.

mod engine;
mod graph;
mod transition;
mod validation;

pub use engine::TransitionPermissionEngine;
pub use graph::{GraphDefinition, TransitionGraph};
pub use transition::Transition;
pub use validation::{validate_graph, GraphValidation};
