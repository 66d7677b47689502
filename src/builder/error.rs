//! Configuration errors raised while building a transition graph.

use thiserror::Error;

/// Structural problems found while validating a transition graph.
///
/// Validation accumulates every violation instead of stopping at the first.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphViolation {
    #[error("Status '{status}' is not reachable from initial status '{initial}'")]
    UnreachableStatus { status: String, initial: String },

    #[error("Event '{event}' from '{from}' leads to both '{first}' and '{second}'")]
    AmbiguousTrigger {
        from: String,
        event: String,
        first: String,
        second: String,
    },

    #[error("Transition '{from}' --{event}--> '{target}' requires an empty role set")]
    EmptyRoleRule {
        from: String,
        event: String,
        target: String,
    },

    #[error("Final status '{from}' has an outgoing transition on '{event}'")]
    TransitionFromFinal { from: String, event: String },
}

/// Errors that can occur when building transitions and transition graphs.
///
/// These are configuration errors: fatal at startup, never per request.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial status not specified. Call .initial(status) before .build()")]
    MissingInitialStatus,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source status not specified. Call .from(status)")]
    MissingSource,

    #[error("Transition target status not specified. Call .to(status)")]
    MissingTarget,

    #[error("Transition trigger not specified. Call .on(event)")]
    MissingTrigger,

    #[error("Transition graph is invalid: {}", summarize(.0))]
    InvalidGraph(Vec<GraphViolation>),

    #[error("Graph definition could not be parsed: {0}")]
    Definition(#[from] serde_json::Error),
}

fn summarize(violations: &[GraphViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
