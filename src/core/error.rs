//! Errors raised by the pure core when callers break its input contract.

use thiserror::Error;
use uuid::Uuid;

/// Programming errors in the calling layer.
///
/// The core fails fast on these instead of producing silently wrong output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("Revision history is empty; an existing entity always has at least one revision")]
    EmptyHistory,

    #[error("Revision {current} follows revision {previous}; history must be strictly ascending")]
    OutOfOrder { previous: u64, current: u64 },

    #[error("Snapshot of entity {found} in history of entity {expected}")]
    MixedEntities { expected: Uuid, found: Uuid },
}

/// Errors that can occur while capturing an entity as a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Entity serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Entity must serialize to an object, got {kind}")]
    NotAnObject { kind: &'static str },
}
