//! Employee onboarding: the concrete vocabulary, graph and entity.

mod employee;
mod graph;
mod status;

pub use employee::{Address, Contract, Employee};
pub use graph::{permission_engine, standard_graph, standard_transitions};
pub use status::{OnboardingEvent, OnboardingStatus};

/// Role names issued by the identity provider.
pub mod roles {
    pub const HR: &str = "HR";
    pub const BPO: &str = "BPO";
    pub const MANAGER: &str = "MANAGER";
    /// Automated jobs such as document extraction
    pub const SYSTEM: &str = "SYSTEM";
}
