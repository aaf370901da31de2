//! # Adresse Actor
//!
//! Owns the postal addresses of all customers. The Kunde actor deletes a customer's
//! addresses through this actor when the customer goes away.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Adresse`]
//! - [`error`] - [`AdresseError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AdresseClient;
use crate::model::Adresse;
use actor_framework::ResourceActor;

/// Creates a new Adresse actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Adresse>, AdresseClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, AdresseClient::new(inner))
}
