//! The standard onboarding transition graph.

use crate::builder::{guarded_transition, open_transition, BuildError, TransitionGraphBuilder};
use crate::onboarding::roles::{BPO, HR, MANAGER, SYSTEM};
use crate::onboarding::status::{OnboardingEvent as Ev, OnboardingStatus as St};
use crate::permissions::{Transition, TransitionGraph, TransitionPermissionEngine};

/// Edges of the onboarding lifecycle, in declaration order.
pub fn standard_transitions() -> Vec<Transition<St, Ev>> {
    vec![
        open_transition(St::Open, Ev::Submit, St::SentToBpo),
        guarded_transition(St::Open, Ev::ScheduleSend, St::WaitingForSent, [HR]),
        guarded_transition(St::WaitingForSent, Ev::Submit, St::SentToBpo, [SYSTEM, HR]),
        guarded_transition(St::Open, Ev::RequestExtraction, St::WaitingForExtraction, [HR]),
        guarded_transition(
            St::WaitingForExtraction,
            Ev::ExtractionFinished,
            St::WaitingForExtractionAccept,
            [SYSTEM],
        ),
        guarded_transition(St::WaitingForExtractionAccept, Ev::AcceptExtraction, St::Open, [HR]),
        guarded_transition(St::WaitingForExtractionAccept, Ev::RejectExtraction, St::Open, [HR]),
        guarded_transition(St::SentToBpo, Ev::Reopen, St::Reopened, [BPO]),
        guarded_transition(St::SentToBpo, Ev::Validate, St::Validation, [BPO]),
        open_transition(St::Reopened, Ev::Submit, St::SentToBpo),
        guarded_transition(St::Validation, Ev::Reopen, St::Reopened, [BPO]),
        guarded_transition(St::Validation, Ev::Approve, St::WaitingForOnboarding, [BPO, MANAGER]),
        guarded_transition(St::WaitingForOnboarding, Ev::Complete, St::Closed, [BPO]),
        guarded_transition(St::WaitingForOnboarding, Ev::Fail, St::OnboardingFailed, [BPO]),
        guarded_transition(
            St::OnboardingFailed,
            Ev::Retry,
            St::WaitingForOnboarding,
            [BPO, MANAGER],
        ),
    ]
}

/// Build and validate the standard onboarding graph.
pub fn standard_graph() -> Result<TransitionGraph<St, Ev>, BuildError> {
    TransitionGraphBuilder::new()
        .initial(St::INITIAL)
        .transitions(standard_transitions())
        .build()
}

/// Permission engine over the standard onboarding graph.
pub fn permission_engine() -> Result<TransitionPermissionEngine<St, Ev>, BuildError> {
    standard_graph().map(TransitionPermissionEngine::new)
}
