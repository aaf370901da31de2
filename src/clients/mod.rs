//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Every client inherits `get`, `find` and `delete` from
//! [`ActorClient`](actor_framework::ActorClient) and adds the entity's own create, update
//! and action calls with properly typed results.

pub mod adresse_client;
pub mod bestellung_client;
pub mod kunde_client;
pub mod produkt_client;
pub mod produktdaten_client;

pub use adresse_client::*;
pub use bestellung_client::*;
pub use kunde_client::*;
pub use produkt_client::*;
pub use produktdaten_client::*;
