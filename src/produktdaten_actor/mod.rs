//! # Produktdaten Actor
//!
//! This module implements the product-variant actor with inventory management and custom
//! actions.
//!
//! ## Overview
//!
//! Each variant carries a unit price and a stock level. Orders never touch the stock
//! directly; they send [`ProduktdatenAction`]s and the actor applies them one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Produktdaten`]
//! - [`error`] - [`ProduktdatenError`] type for type-safe error handling
//! - [`actions`] - [`ProduktdatenAction`] and [`ProduktdatenActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use webshop::model::{Betrag, ProduktId, ProduktdatenDaten};
//! use webshop::produktdaten_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = produktdaten_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let daten = ProduktdatenDaten {
//!         groesse: Some("M".into()),
//!         farbe: None,
//!         preis: "19.99".parse()?,
//!         anzahl_verfuegbar: 10,
//!     };
//!     let id = client.create_produktdaten(daten.fuer(ProduktId(1))).await?;
//!
//!     let preis = client.reserve_stock(id, 3).await?;
//!     assert_eq!(preis, Betrag::from_cent(1999));
//!     assert_eq!(client.check_stock(id).await?, 7);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProduktdatenClient;
use crate::model::Produktdaten;
use actor_framework::ResourceActor;

/// Creates a new Produktdaten actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Produktdaten>, ProduktdatenClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, ProduktdatenClient::new(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Betrag, ProduktId, ProduktdatenCreate, ProduktdatenDaten, ProduktdatenQuery,
        ProduktdatenUpdate,
    };
    use actor_framework::ActorClient;

    fn spawn() -> ProduktdatenClient {
        let (actor, client) = new(8);
        tokio::spawn(actor.run(()));
        client
    }

    fn daten(preis_cent: u64, anzahl: u32) -> ProduktdatenDaten {
        ProduktdatenDaten {
            groesse: None,
            farbe: Some("blau".into()),
            preis: Betrag::from_cent(preis_cent),
            anzahl_verfuegbar: anzahl,
        }
    }

    fn create(preis_cent: u64, anzahl: u32) -> ProduktdatenCreate {
        daten(preis_cent, anzahl).fuer(ProduktId(1))
    }

    #[tokio::test]
    async fn reservation_decrements_stock_and_bumps_version() {
        let client = spawn();
        let id = client.create_produktdaten(create(500, 4)).await.unwrap();

        assert_eq!(client.reserve_stock(id, 3).await.unwrap(), Betrag::from_cent(500));
        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.anzahl_verfuegbar, 1);
        assert_eq!(stored.audit.version, 1);
    }

    #[tokio::test]
    async fn over_reservation_fails_without_change() {
        let client = spawn();
        let id = client.create_produktdaten(create(500, 2)).await.unwrap();

        let err = client.reserve_stock(id, 3).await.unwrap_err();
        assert_eq!(
            err,
            ProduktdatenError::InsufficientStock {
                id: id.to_string(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(client.check_stock(id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn zero_quantities_are_rejected() {
        let client = spawn();
        let id = client.create_produktdaten(create(500, 2)).await.unwrap();
        assert_eq!(
            client.reserve_stock(id, 0).await.unwrap_err(),
            ProduktdatenError::InvalidQuantity(0)
        );
        assert_eq!(
            client.release_stock(id, 0).await.unwrap_err(),
            ProduktdatenError::InvalidQuantity(0)
        );
    }

    #[tokio::test]
    async fn release_restores_stock() {
        let client = spawn();
        let id = client.create_produktdaten(create(500, 5)).await.unwrap();
        client.reserve_stock(id, 5).await.unwrap();
        assert!(client.find(ProduktdatenQuery::Verfuegbar).await.unwrap().is_empty());

        assert_eq!(client.release_stock(id, 2).await.unwrap(), 2);
        assert_eq!(client.find(ProduktdatenQuery::Verfuegbar).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn zero_price_is_invalid() {
        let client = spawn();
        let err = client.create_produktdaten(create(0, 1)).await.unwrap_err();
        assert!(matches!(err, ProduktdatenError::Validation(_)));

        let id = client.create_produktdaten(create(100, 1)).await.unwrap();
        let update = ProduktdatenUpdate {
            preis: Some(Betrag::NULL),
            ..Default::default()
        };
        let err = client.update_produktdaten(id, update, Some(0)).await.unwrap_err();
        assert!(matches!(err, ProduktdatenError::Validation(_)));
    }

    #[tokio::test]
    async fn stale_update_is_a_version_conflict() {
        let client = spawn();
        let id = client.create_produktdaten(create(100, 1)).await.unwrap();
        client.reserve_stock(id, 1).await.unwrap();

        let update = ProduktdatenUpdate {
            anzahl_verfuegbar: Some(50),
            ..Default::default()
        };
        let err = client.update_produktdaten(id, update, Some(0)).await.unwrap_err();
        assert!(matches!(
            err,
            ProduktdatenError::VersionConflict {
                expected: 0,
                actual: 1,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn finds_variants_of_a_product() {
        let client = spawn();
        client.create_produktdaten(daten(100, 1).fuer(ProduktId(1))).await.unwrap();
        client.create_produktdaten(daten(100, 1).fuer(ProduktId(2))).await.unwrap();
        let found = client.find(ProduktdatenQuery::Produkt(ProduktId(2))).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].produkt_id, ProduktId(2));
    }
}
