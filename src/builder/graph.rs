//! Builder for constructing transition graphs.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, Status};
use crate::permissions::{Transition, TransitionGraph};

/// Builder for constructing transition graphs with a fluent API.
///
/// `build` runs the full graph validation, so a graph that builds is a
/// graph the permission engine can serve.
pub struct TransitionGraphBuilder<S: Status, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
}

impl<S: Status, E: Event> TransitionGraphBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial status (required).
    pub fn initial(mut self, status: S) -> Self {
        self.initial = Some(status);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build and validate the graph.
    pub fn build(self) -> Result<TransitionGraph<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialStatus)?;
        TransitionGraph::new(initial, self.transitions)
    }
}

impl<S: Status, E: Event> Default for TransitionGraphBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
