//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, concurrent resource stores in
//! Rust. It implements a **Resource-Oriented Architecture (ROA)** pattern on top of the
//! **Actor Model**: every resource type (a customer, a product variant, an order) is owned
//! by exactly one actor task, and all access goes through messages.
//!
//! ## Why ROA + Actor Model?
//!
//! - Standard operations (Create, Read, Find, Update, Delete) on well-defined resources
//! - Isolated state: no shared memory, no locks
//! - Sequential processing within each actor eliminates race conditions, which is what
//!   makes optimistic versions and unique keys cheap to enforce
//! - When resources need to interact (an order reserving stock), they communicate via
//!   **Action messages** instead of direct coupling
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Produkt {
//!     id: u32,
//!     bezeichnung: String,
//!     version: u32,
//! }
//!
//! #[derive(Debug)] struct ProduktCreate { bezeichnung: String }
//! #[derive(Debug)] struct ProduktUpdate { bezeichnung: Option<String> }
//! #[derive(Debug)] enum ProduktAction {}
//! #[derive(Debug)] enum ProduktQuery { Alle }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ProduktError(String);
//!
//! #[async_trait]
//! impl ActorEntity for Produkt {
//!     type Id = u32;
//!     type Create = ProduktCreate;
//!     type Update = ProduktUpdate;
//!     type Action = ProduktAction;
//!     type ActionResult = ();
//!     type Query = ProduktQuery;
//!     type Context = ();
//!     type Error = ProduktError;
//!
//!     fn from_create_params(id: u32, params: ProduktCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, bezeichnung: params.bezeichnung, version: 0 })
//!     }
//!
//!     fn matches(&self, query: &ProduktQuery) -> bool {
//!         match query { ProduktQuery::Alle => true }
//!     }
//!
//!     fn version(&self) -> u32 { self.version }
//!     fn touch(&mut self) { self.version += 1; }
//!
//!     async fn on_update(&mut self, update: ProduktUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(b) = update.bezeichnung { self.bezeichnung = b; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: ProduktAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Produkt>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ProduktCreate { bezeichnung: "Hemd".into() }).await.unwrap();
//!     let p = client.update_versioned(id, ProduktUpdate { bezeichnung: Some("Bluse".into()) }, 0).await.unwrap();
//!     assert_eq!(p.version, 1);
//!
//!     // A second writer still holding version 0 loses.
//!     let stale = client.update_versioned(id, ProduktUpdate { bezeichnung: None }, 0).await;
//!     assert!(matches!(stale, Err(FrameworkError::VersionConflict { .. })));
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! An order actor that needs customer and stock clients is started as
//! `order_actor.run((kunde_client, produktdaten_client))` after those clients exist.
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from a queue of
//! expectations, so hooks that call other actors can be tested in isolation.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
