//! Error types for the Adresse actor.

use crate::model::Violations;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during address operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdresseError {
    /// One or more fields broke a validation rule.
    #[error("Invalid address: {0}")]
    Validation(Violations),

    /// The requested address was not found.
    #[error("Address not found: {0}")]
    NotFound(String),

    /// The address was changed by someone else since the caller read it.
    #[error("Address {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: String, expected: u32, actual: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AdresseError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::VersionConflict {
                id,
                expected,
                actual,
            } => Self::VersionConflict {
                id,
                expected,
                actual,
            },
            other => other
                .downcast_entity::<AdresseError>()
                .unwrap_or_else(|e| Self::ActorCommunicationError(e.to_string())),
        }
    }
}
