//! # Bestellung Actor
//!
//! Owns all orders and coordinates the stock bookkeeping with the Produktdaten actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Bestellung`]
//! - [`error`] - [`BestellungError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with `(KundeClient, ProduktdatenClient)` as context. Both are plain
//! clients, so tests can hand it clients backed by
//! [`MockClient`](actor_framework::mock::MockClient) instead of real actors.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BestellungClient;
use crate::model::Bestellung;
use actor_framework::ResourceActor;

/// Creates a new Bestellung actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Bestellung>, BestellungClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, BestellungClient::new(inner))
}
