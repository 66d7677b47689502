//! Builder for constructing role-gated transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, RoleRule, Status};
use crate::permissions::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: Status, E: Event> {
    source: Option<S>,
    target: Option<S>,
    trigger: Option<E>,
    required_roles: Option<RoleRule>,
}

impl<S: Status, E: Event> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            source: None,
            target: None,
            trigger: None,
            required_roles: None,
        }
    }

    /// Set the source status (required).
    pub fn from(mut self, status: S) -> Self {
        self.source = Some(status);
        self
    }

    /// Set the target status (required).
    pub fn to(mut self, status: S) -> Self {
        self.target = Some(status);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.trigger = Some(event);
        self
    }

    /// Restrict the transition to callers holding any of `roles` (optional).
    pub fn requires<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.required_roles = Some(RoleRule::any_of(roles));
        self
    }

    /// Attach a prepared role rule (optional).
    pub fn guard(mut self, rule: RoleRule) -> Self {
        self.required_roles = Some(rule);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;

        Ok(Transition {
            source,
            target,
            trigger,
            required_roles: self.required_roles,
        })
    }
}

impl<S: Status, E: Event> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
