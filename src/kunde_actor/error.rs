//! Error types for the Kunde actor.

use crate::adresse_actor::AdresseError;
use crate::model::Violations;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KundeError {
    /// One or more fields broke a validation rule.
    #[error("Invalid customer: {0}")]
    Validation(Violations),

    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Another customer is already registered with this email.
    #[error("Email already registered: {0}")]
    EmailExists(String),

    /// The customer was changed by someone else since the caller read it.
    #[error("Customer {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: String, expected: u32, actual: u32 },

    /// The customer still has orders and can't be deleted.
    #[error("Customer {0} has orders")]
    HasOrders(String),

    /// Reading or deleting the customer's addresses failed.
    #[error(transparent)]
    Adresse(#[from] AdresseError),

    /// Password hashing failed.
    #[error("Internal error: {0}")]
    Internal(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for KundeError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::Duplicate(email) => Self::EmailExists(email),
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
                .downcast_entity::<KundeError>()
                .unwrap_or_else(|e| Self::ActorCommunicationError(e.to_string())),
        }
    }
}
