//! Error types for the Produktdaten actor.

use crate::model::Violations;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during variant and stock operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProduktdatenError {
    #[error("Invalid product variant: {0}")]
    Validation(Violations),

    /// The requested variant was not found.
    #[error("Product variant not found: {0}")]
    NotFound(String),

    #[error("Product variant {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: String, expected: u32, actual: u32 },

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: String,
        requested: u32,
        available: u32,
    },

    /// The provided quantity is invalid (zero, or the stock would overflow).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProduktdatenError {
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
                .downcast_entity::<ProduktdatenError>()
                .unwrap_or_else(|e| Self::ActorCommunicationError(e.to_string())),
        }
    }
}
