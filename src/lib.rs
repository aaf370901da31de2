//! # Webshop
//!
//! > **A web shop backend built from resource-oriented actors.**
//!
//! Customers, addresses, products, product variants and orders each live in their own
//! [`ResourceActor`](actor_framework::ResourceActor). A service layer combines the actors
//! into use cases, and an axum REST API exposes them with JWT authentication.
//!
//! ## 🏗️ Architecture
//!
//! ```text
//! REST (axum)  ->  services  ->  clients  ->  actors
//! ```
//!
//! The actor dependency graph is acyclic; dependencies are injected as run-time context:
//!
//! - `Kunde` deletes its addresses through an [`AdresseClient`](clients::AdresseClient).
//! - `Produkt` deletes its variants through a [`ProduktdatenClient`](clients::ProduktdatenClient).
//! - `Bestellung` checks the customer and reserves stock through a `KundeClient` and a
//!   `ProduktdatenClient`, releasing earlier reservations if a later line fails.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain entities, DTOs, money ([`Betrag`](model::Betrag)) and field validation.
//!
//! ### 2. The Actors ([`kunde_actor`], [`adresse_actor`], [`produkt_actor`], [`produktdaten_actor`], [`bestellung_actor`])
//! `ActorEntity` implementations plus one error type per actor.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific wrappers around `ResourceClient` with typed errors.
//!
//! ### 4. The Use Cases ([`service`])
//! Registration, login, catalog and order workflows.
//!
//! ### 5. The Surface ([`rest`])
//! Routes, role checks, error mapping and hypermedia links.
//!
//! ### 6. The Orchestrator ([`lifecycle`]) and [`config`]
//! Actor start-up and shutdown, admin seeding, TOML plus environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! WEBSHOP_AUTH__JWT_SECRET=change-me RUST_LOG=info cargo run
//! ```

pub mod adresse_actor;
pub mod bestellung_actor;
pub mod clients;
pub mod config;
pub mod kunde_actor;
pub mod lifecycle;
pub mod model;
pub mod produkt_actor;
pub mod produktdaten_actor;
pub mod rest;
pub mod service;
