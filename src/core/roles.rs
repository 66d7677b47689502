//! Role-based guards for transitions.
//!
//! A transition may carry a [`RoleRule`]: the set of roles any one of which
//! lets a caller trigger it. Checking a rule is a pure set intersection
//! against the caller's [`CallerRoles`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Roles held by the requesting principal.
///
/// Supplied per call by the identity collaborator and never cached by this
/// crate. An empty role set is valid.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::core::CallerRoles;
///
/// let roles = CallerRoles::from_iter(["HR", "BPO"]);
/// assert!(roles.contains("HR"));
/// assert!(!roles.contains("MANAGER"));
/// assert!(CallerRoles::none().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerRoles {
    roles: HashSet<String>,
}

impl CallerRoles {
    /// A caller without any role.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

impl<R: Into<String>> FromIterator<R> for CallerRoles {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Security annotation attached to a transition.
///
/// A rule is satisfied when the caller holds at least one of its roles.
/// Rules are plain data so a transition graph stays a lookup table.
///
/// # Example
///
/// ```rust
/// use onboarding_lifecycle::core::{CallerRoles, RoleRule};
///
/// let rule = RoleRule::any_of(["MANAGER", "BPO"]);
///
/// assert!(rule.permits(&CallerRoles::from_iter(["BPO"])));
/// assert!(!rule.permits(&CallerRoles::from_iter(["HR"])));
/// assert!(!rule.permits(&CallerRoles::none()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleRule {
    roles: BTreeSet<String>,
}

impl RoleRule {
    /// Create a rule satisfied by any one of `roles`.
    ///
    /// An empty rule can never be satisfied; graph validation rejects it.
    pub fn any_of<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether the caller holds at least one required role (pure).
    pub fn permits(&self, caller: &CallerRoles) -> bool {
        self.roles.iter().any(|role| caller.contains(role))
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Required roles in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}
