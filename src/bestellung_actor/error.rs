//! Error types for the Bestellung actor.

use crate::kunde_actor::KundeError;
use crate::model::{BestellStatus, Violations};
use crate::produktdaten_actor::ProduktdatenError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BestellungError {
    /// The order data provided is invalid.
    #[error("Invalid order: {0}")]
    Validation(Violations),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The customer specified in the order does not exist.
    #[error("Invalid customer: {0}")]
    KundeNotFound(String),

    /// The order is in a state that doesn't allow the requested transition.
    #[error("Order {id} is {status:?}")]
    IllegalState { id: String, status: BestellStatus },

    /// The order total doesn't fit into the amount type.
    #[error("Order total overflows")]
    Overflow,

    /// Looking up the customer failed.
    #[error(transparent)]
    Kunde(#[from] KundeError),

    /// A stock reservation failed, e.g. insufficient stock or unknown variant.
    #[error(transparent)]
    Produktdaten(#[from] ProduktdatenError),

    #[error("Order {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict { id: String, expected: u32, actual: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for BestellungError {
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
                .downcast_entity::<BestellungError>()
                .unwrap_or_else(|e| Self::ActorCommunicationError(e.to_string())),
        }
    }
}
