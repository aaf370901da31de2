//! # Produkt Actor
//!
//! Owns the product catalog. Prices and stock live on the variants
//! ([`produktdaten_actor`](crate::produktdaten_actor)); a product is name and description
//! only, and deleting it deletes its variants.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProduktClient;
use crate::model::Produkt;
use actor_framework::ResourceActor;

/// Creates a new Produkt actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Produkt>, ProduktClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, ProduktClient::new(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Betrag, ProduktCreate, ProduktQuery, ProduktdatenDaten, ProduktdatenQuery};
    use crate::produktdaten_actor;
    use actor_framework::ActorClient;

    fn produkt(bezeichnung: &str) -> ProduktCreate {
        ProduktCreate {
            bezeichnung: bezeichnung.to_string(),
            beschreibung: None,
        }
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let (pd_actor, pd_client) = produktdaten_actor::new(8);
        let (actor, client) = new(8);
        tokio::spawn(pd_actor.run(()));
        tokio::spawn(actor.run(pd_client));

        client.create_produkt(produkt("Rotes Hemd")).await.unwrap();
        client.create_produkt(produkt("Hose")).await.unwrap();
        client.create_produkt(produkt("Nachthemd")).await.unwrap();

        let hemden = client.find(ProduktQuery::Bezeichnung("HEMD".into())).await.unwrap();
        assert_eq!(
            hemden.iter().map(|p| p.bezeichnung.as_str()).collect::<Vec<_>>(),
            vec!["Rotes Hemd", "Nachthemd"]
        );
    }

    #[tokio::test]
    async fn delete_removes_variants() {
        let (pd_actor, pd_client) = produktdaten_actor::new(8);
        let (actor, client) = new(8);
        tokio::spawn(pd_actor.run(()));
        tokio::spawn(actor.run(pd_client.clone()));

        let id = client.create_produkt(produkt("Hemd")).await.unwrap();
        for groesse in ["S", "M", "L"] {
            let daten = ProduktdatenDaten {
                groesse: Some(groesse.into()),
                farbe: None,
                preis: Betrag::from_cent(2999),
                anzahl_verfuegbar: 3,
            };
            pd_client.create_produktdaten(daten.fuer(id)).await.unwrap();
        }

        client.delete(id).await.unwrap();
        assert!(pd_client.find(ProduktdatenQuery::Alle).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_name_is_invalid() {
        let (pd_actor, pd_client) = produktdaten_actor::new(8);
        let (actor, client) = new(8);
        tokio::spawn(pd_actor.run(()));
        tokio::spawn(actor.run(pd_client));

        let err = client.create_produkt(produkt("  ")).await.unwrap_err();
        assert!(matches!(err, ProduktError::Validation(_)));
    }
}
