//! Builder API for ergonomic transition graph construction.
//!
//! This module provides fluent builders and macros for declaring a status
//! vocabulary and a role-gated transition graph with minimal boilerplate.
//! Building a graph validates it, so configuration errors surface once at
//! startup.

pub mod error;
pub mod graph;
pub mod macros;
pub mod transition;

pub use error::{BuildError, GraphViolation};
pub use graph::TransitionGraphBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, RoleRule, Status};
use crate::permissions::Transition;

/// Create a transition any caller may trigger.
///
/// # Example
///
/// ```
/// use onboarding_lifecycle::builder::open_transition;
/// use onboarding_lifecycle::{event_enum, status_enum};
///
/// status_enum! {
///     enum MyStatus {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// event_enum! {
///     enum MyEvent {
///         Finish,
///     }
/// }
///
/// let transition = open_transition(MyStatus::Start, MyEvent::Finish, MyStatus::End);
/// assert!(transition.required_roles.is_none());
/// ```
pub fn open_transition<S: Status, E: Event>(from: S, on: E, to: S) -> Transition<S, E> {
    Transition {
        source: from,
        target: to,
        trigger: on,
        required_roles: None,
    }
}

/// Create a transition restricted to callers holding any of `roles`.
///
/// # Example
///
/// ```
/// use onboarding_lifecycle::builder::guarded_transition;
/// use onboarding_lifecycle::core::CallerRoles;
/// use onboarding_lifecycle::{event_enum, status_enum};
///
/// status_enum! {
///     enum MyStatus {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// event_enum! {
///     enum MyEvent {
///         Approve,
///     }
/// }
///
/// let transition =
///     guarded_transition(MyStatus::Start, MyEvent::Approve, MyStatus::End, ["MANAGER"]);
/// assert!(!transition.is_permitted(&CallerRoles::none()));
/// ```
pub fn guarded_transition<S, E, I, R>(from: S, on: E, to: S, roles: I) -> Transition<S, E>
where
    S: Status,
    E: Event,
    I: IntoIterator<Item = R>,
    R: Into<String>,
{
    Transition {
        source: from,
        target: to,
        trigger: on,
        required_roles: Some(RoleRule::any_of(roles)),
    }
}
