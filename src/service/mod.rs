//! # Service Layer
//!
//! Use cases that span more than one actor: registration with an initial address,
//! customer deletion guarded by existing orders, login. The REST layer only ever talks
//! to these services, never to the clients directly.
//!
//! Every service is a bundle of cloneable clients, so cloning a service is cheap and all
//! clones talk to the same actors.

pub mod auth_service;
pub mod bestellung_service;
pub mod kunde_service;
pub mod produkt_service;

pub use auth_service::*;
pub use bestellung_service::*;
pub use kunde_service::*;
pub use produkt_service::*;
