//! Runtime orchestration: starting, wiring and stopping the actors, and seeding.
//!
//! - [`ShopSystem`] - spawns every actor with its context and owns the task handles
//! - [`seed_admin`] - creates the configured admin account on first start

pub mod seed;
pub mod shop_system;

pub use seed::*;
pub use shop_system::*;
