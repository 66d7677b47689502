//! Onboarding statuses and events.

use crate::{event_enum, status_enum};

status_enum! {
    /// Business status of an employee's onboarding.
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum OnboardingStatus {
        /// Record is being filled in by HR
        Open,
        /// Scheduled for submission to the BPO
        WaitingForSent,
        SentToBpo,
        /// Sent back to HR for corrections
        Reopened,
        Validation,
        /// Document data extraction is running
        WaitingForExtraction,
        /// Extracted data awaits acceptance by HR
        WaitingForExtractionAccept,
        WaitingForOnboarding,
        OnboardingFailed,
        Closed,
    }
    final: [Closed]
    error: [OnboardingFailed]
}

event_enum! {
    /// Triggers moving an onboarding between statuses.
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum OnboardingEvent {
        ScheduleSend,
        Submit,
        RequestExtraction,
        ExtractionFinished,
        AcceptExtraction,
        RejectExtraction,
        Reopen,
        Validate,
        Approve,
        Complete,
        Fail,
        Retry,
    }
}

impl OnboardingStatus {
    /// Status of a newly created employee record.
    pub const INITIAL: Self = Self::Open;
}
