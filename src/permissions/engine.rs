//! Computes the events a caller may trigger from a status.

use crate::core::{CallerRoles, Event, Status};
use crate::permissions::graph::TransitionGraph;
use crate::permissions::transition::Transition;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::trace;

/// Answers "which events may this caller trigger from this status?".
///
/// The engine only computes permissions; enforcing them is up to the
/// caller. Cloning is cheap and all clones share one immutable graph.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::core::CallerRoles;
/// use onboarding_lifecycle::onboarding::{self, roles, OnboardingEvent, OnboardingStatus};
/// use onboarding_lifecycle::permissions::TransitionPermissionEngine;
///
/// let engine = TransitionPermissionEngine::new(onboarding::standard_graph().unwrap());
///
/// let events = engine.permitted_events(&OnboardingStatus::Open, &CallerRoles::none());
/// assert!(events.contains(&OnboardingEvent::Submit));
///
/// let events = engine.permitted_events(
///     &OnboardingStatus::WaitingForOnboarding,
///     &CallerRoles::from_iter([roles::BPO]),
/// );
/// assert!(events.contains(&OnboardingEvent::Complete));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionPermissionEngine<S: Status, E: Event> {
    graph: Arc<TransitionGraph<S, E>>,
}

impl<S: Status, E: Event> TransitionPermissionEngine<S, E> {
    pub fn new(graph: TransitionGraph<S, E>) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }

    /// Share a graph that is already held elsewhere.
    pub fn shared(graph: Arc<TransitionGraph<S, E>>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &TransitionGraph<S, E> {
        &self.graph
    }

    /// Events whose transition out of `status` the caller may trigger.
    ///
    /// Unguarded transitions are always included; guarded ones only when
    /// `roles` shares at least one role with the guard. Redundant edges
    /// collapse into one event. An empty set is a valid answer.
    pub fn permitted_events(&self, status: &S, roles: &CallerRoles) -> HashSet<E> {
        let events: HashSet<E> = self
            .permitted_transitions(status, roles)
            .into_iter()
            .map(|transition| transition.trigger.clone())
            .collect();

        trace!(
            status = status.name(),
            roles = roles.len(),
            permitted = events.len(),
            "computed permitted events"
        );

        events
    }

    /// Permitted transitions out of `status`, in declaration order.
    pub fn permitted_transitions(&self, status: &S, roles: &CallerRoles) -> Vec<&Transition<S, E>> {
        self.graph
            .outgoing(status)
            .filter(|transition| transition.is_permitted(roles))
            .collect()
    }

    /// Check a single event.
    ///
    /// With redundant edges, one permitted edge is enough.
    pub fn is_permitted(&self, status: &S, event: &E, roles: &CallerRoles) -> bool {
        self.graph
            .outgoing(status)
            .any(|transition| transition.trigger == *event && transition.is_permitted(roles))
    }

    /// Where `event` leads from `status`, regardless of roles.
    pub fn target(&self, status: &S, event: &E) -> Option<&S> {
        self.graph.target(status, event)
    }
}
