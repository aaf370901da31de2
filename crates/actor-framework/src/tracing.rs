//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! providing hierarchical spans that show the complete request flow through the system.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, Find, Update, Delete, and custom Actions
//! - **Conflicts**: stale versions and duplicate keys, with the offending id / key
//! - **Errors**: Detailed error context with entity IDs and failure reasons
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=actor_framework=debug,webshop=info cargo run
//! ```
//!
//! **With `RUST_LOG=info`** an order placement looks like:
//!
//! ```text
//! INFO Action ok entity_type="Produktdaten" id=produktdaten_1
//! INFO Created entity_type="Bestellung" id=bestellung_1 size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `default_filter` when it is set. Calling this twice (e.g. from
/// several tests) is harmless: the second installation is ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "place_order:create_bestellung")
        .try_init();
}
