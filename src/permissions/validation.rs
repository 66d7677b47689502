//! Construction-time validation of transition graphs using Validation.
//!
//! Every check contributes a `Validation`, and all of them are combined so a
//! broken graph definition reports every problem in one pass.

use crate::builder::GraphViolation;
use crate::core::{Event, Status};
use crate::permissions::transition::Transition;
use std::collections::{HashMap, HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub type GraphValidation = Validation<(), NonEmptyVec<GraphViolation>>;

/// Validate a graph, accumulating ALL violations.
pub fn validate_graph<S: Status, E: Event>(
    initial: &S,
    transitions: &[Transition<S, E>],
) -> GraphValidation {
    let mut checks: Vec<GraphValidation> = Vec::new();

    checks.extend(transitions.iter().map(check_role_rule));
    checks.extend(transitions.iter().map(check_not_from_final));
    checks.extend(check_unambiguous(transitions));
    checks.extend(check_reachable(initial, transitions));

    Validation::all_vec(checks).map(|_| ())
}

fn check_role_rule<S: Status, E: Event>(transition: &Transition<S, E>) -> GraphValidation {
    match &transition.required_roles {
        Some(rule) if rule.is_empty() => Validation::fail(GraphViolation::EmptyRoleRule {
            from: transition.source.name().to_string(),
            event: transition.trigger.name().to_string(),
            target: transition.target.name().to_string(),
        }),
        _ => Validation::success(()),
    }
}

fn check_not_from_final<S: Status, E: Event>(transition: &Transition<S, E>) -> GraphValidation {
    if transition.source.is_final() {
        Validation::fail(GraphViolation::TransitionFromFinal {
            from: transition.source.name().to_string(),
            event: transition.trigger.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}

/// Redundant edges (same source, trigger and target) are allowed; the same
/// trigger leading to two different targets is not.
fn check_unambiguous<S: Status, E: Event>(transitions: &[Transition<S, E>]) -> Vec<GraphValidation> {
    let mut first_target: HashMap<(&S, &E), &S> = HashMap::new();
    let mut checks = Vec::new();

    for transition in transitions {
        let key = (&transition.source, &transition.trigger);
        match first_target.get(&key) {
            Some(target) if **target != transition.target => {
                checks.push(Validation::fail(GraphViolation::AmbiguousTrigger {
                    from: transition.source.name().to_string(),
                    event: transition.trigger.name().to_string(),
                    first: target.name().to_string(),
                    second: transition.target.name().to_string(),
                }));
            }
            Some(_) => {}
            None => {
                first_target.insert(key, &transition.target);
            }
        }
    }

    checks
}

/// Every status of the enumeration must be reachable from the initial one.
fn check_reachable<S: Status, E: Event>(
    initial: &S,
    transitions: &[Transition<S, E>],
) -> Vec<GraphValidation> {
    let reachable = reachable_from(initial, transitions);

    S::all()
        .iter()
        .map(|status| {
            if reachable.contains(status) {
                Validation::success(())
            } else {
                Validation::fail(GraphViolation::UnreachableStatus {
                    status: status.name().to_string(),
                    initial: initial.name().to_string(),
                })
            }
        })
        .collect()
}

fn reachable_from<'a, S: Status, E: Event>(
    initial: &'a S,
    transitions: &'a [Transition<S, E>],
) -> HashSet<&'a S> {
    let mut seen: HashSet<&S> = HashSet::from([initial]);
    let mut queue: VecDeque<&S> = VecDeque::from([initial]);

    while let Some(status) = queue.pop_front() {
        for transition in transitions.iter().filter(|t| t.leaves(status)) {
            if seen.insert(&transition.target) {
                queue.push_back(&transition.target);
            }
        }
    }

    seen
}
