//! Immutable, validated transition graph.

use crate::builder::BuildError;
use crate::core::{Event, Status};
use crate::permissions::transition::Transition;
use crate::permissions::validation::validate_graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;
use tracing::debug;

/// Serializable description of a transition graph.
///
/// This is the configuration format for graphs loaded at startup:
///
/// ```json
/// {
///   "initial": "OPEN",
///   "transitions": [
///     { "source": "OPEN", "target": "SENT_TO_BPO", "event": "SUBMIT" },
///     { "source": "SENT_TO_BPO", "target": "CLOSED", "event": "APPROVE", "roles": ["MANAGER"] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GraphDefinition<S: Status, E: Event> {
    pub initial: S,
    pub transitions: Vec<Transition<S, E>>,
}

/// Finite state machine over statuses with role-annotated edges.
///
/// A graph can only be obtained through validation, so every status of the
/// enumeration is known and reachable, and no trigger is ambiguous. It is
/// read-only afterwards and safe to share between threads.
#[derive(Clone, Debug)]
pub struct TransitionGraph<S: Status, E: Event> {
    initial: S,
    transitions: Vec<Transition<S, E>>,
    outgoing: HashMap<S, Vec<usize>>,
}

impl<S: Status, E: Event> TransitionGraph<S, E> {
    /// Validate a set of transitions and freeze them into a graph.
    pub fn new(initial: S, transitions: Vec<Transition<S, E>>) -> Result<Self, BuildError> {
        if transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Validation::Failure(violations) = validate_graph(&initial, &transitions) {
            return Err(BuildError::InvalidGraph(violations.iter().cloned().collect()));
        }

        let mut outgoing: HashMap<S, Vec<usize>> = HashMap::new();
        for (index, transition) in transitions.iter().enumerate() {
            outgoing
                .entry(transition.source.clone())
                .or_default()
                .push(index);
        }

        debug!(
            initial = initial.name(),
            statuses = S::all().len(),
            transitions = transitions.len(),
            "transition graph validated"
        );

        Ok(Self {
            initial,
            transitions,
            outgoing,
        })
    }

    pub fn from_definition(definition: GraphDefinition<S, E>) -> Result<Self, BuildError> {
        Self::new(definition.initial, definition.transitions)
    }

    /// Parse and validate a JSON graph definition.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let definition: GraphDefinition<S, E> = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    pub fn to_definition(&self) -> GraphDefinition<S, E> {
        GraphDefinition {
            initial: self.initial.clone(),
            transitions: self.transitions.clone(),
        }
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// All transitions in declaration order.
    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    /// Transitions leaving `status`, in declaration order.
    pub fn outgoing<'a>(&'a self, status: &S) -> impl Iterator<Item = &'a Transition<S, E>> + 'a {
        self.outgoing
            .get(status)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| &self.transitions[index])
    }

    /// Every status of the graph.
    pub fn statuses(&self) -> &'static [S] {
        S::all()
    }

    /// Where `event` leads from `status`, if such a transition exists.
    pub fn target(&self, status: &S, event: &E) -> Option<&S> {
        self.outgoing(status)
            .find(|transition| transition.trigger == *event)
            .map(|transition| &transition.target)
    }
}
