//! Status and event vocabulary traits.
//!
//! Both the permission engine and the diff engine are generic over a closed
//! set of business statuses and a closed set of triggering events. These
//! traits describe that vocabulary with pure methods only.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for business statuses of a tracked entity.
///
/// All methods are pure. A status type is a closed enumeration: `all()`
/// must list every variant exactly once, which lets a transition graph prove
/// at construction time that every status is known and reachable.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::core::Status;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TicketStatus {
///     Open,
///     Resolved,
/// }
///
/// impl Status for TicketStatus {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Resolved => "Resolved",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Open, Self::Resolved]
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Resolved)
///     }
/// }
///
/// assert_eq!(TicketStatus::all().len(), 2);
/// assert!(TicketStatus::Resolved.is_final());
/// ```
pub trait Status:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the status name for display/logging.
    fn name(&self) -> &str;

    /// Every variant of the enumeration.
    fn all() -> &'static [Self]
    where
        Self: Sized;

    /// Check if this is a terminal status.
    ///
    /// No transition may leave a final status. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this status represents a failure condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Trait for named triggers that move an entity between statuses.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event name for display/logging.
    fn name(&self) -> &str;
}
