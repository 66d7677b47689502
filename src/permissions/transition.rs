//! Role-gated transitions between statuses.

use crate::core::{CallerRoles, Event, RoleRule, Status};
use serde::{Deserialize, Serialize};

/// A directed edge of the transition graph.
///
/// The security annotation is plain data: `None` means any caller may
/// trigger the transition, `Some(rule)` means the caller needs at least one
/// of the rule's roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: Status, E: Event> {
    pub source: S,
    pub target: S,
    #[serde(rename = "event")]
    pub trigger: E,
    #[serde(rename = "roles", default, skip_serializing_if = "Option::is_none")]
    pub required_roles: Option<RoleRule>,
}

impl<S: Status, E: Event> Transition<S, E> {
    /// Check whether a caller with `roles` may trigger this transition (pure).
    pub fn is_permitted(&self, roles: &CallerRoles) -> bool {
        self.required_roles
            .as_ref()
            .is_none_or(|rule| rule.permits(roles))
    }

    /// Check whether this transition leaves `status` (pure).
    pub fn leaves(&self, status: &S) -> bool {
        self.source == *status
    }
}
