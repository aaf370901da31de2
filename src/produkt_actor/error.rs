//! Error types for the Produkt actor.

use crate::model::Violations;
use crate::produktdaten_actor::ProduktdatenError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProduktError {
    #[error("Invalid product: {0}")]
    Validation(Violations),

    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: String, expected: u32, actual: u32 },

    /// A call to the variant actor failed.
    #[error(transparent)]
    Produktdaten(#[from] ProduktdatenError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProduktError {
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
                .downcast_entity::<ProduktError>()
                .unwrap_or_else(|e| Self::ActorCommunicationError(e.to_string())),
        }
    }
}
