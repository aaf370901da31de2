//! Order use cases.

use crate::bestellung_actor::BestellungError;
use crate::clients::{BestellungClient, KundeClient};
use crate::model::{Bestellung, BestellungCreate, BestellungId, BestellungQuery, KundeId};
use actor_framework::ActorClient;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct BestellungService {
    bestellungen: BestellungClient,
    kunden: KundeClient,
}

impl BestellungService {
    pub fn new(bestellungen: BestellungClient, kunden: KundeClient) -> Self {
        Self {
            bestellungen,
            kunden,
        }
    }

    /// Places an order. Stock is reserved and prices are fixed by the order actor.
    #[instrument(skip(self))]
    pub async fn create_bestellung(
        &self,
        params: BestellungCreate,
    ) -> Result<Bestellung, BestellungError> {
        let id = self.bestellungen.create_bestellung(params).await?;
        info!(bestellung = %id, "Order placed");
        self.find_bestellung(id).await
    }

    pub async fn find_bestellung(&self, id: BestellungId) -> Result<Bestellung, BestellungError> {
        self.bestellungen
            .get(id)
            .await?
            .ok_or_else(|| BestellungError::NotFound(id.to_string()))
    }

    pub async fn find_bestellungen(
        &self,
        query: BestellungQuery,
    ) -> Result<Vec<Bestellung>, BestellungError> {
        self.bestellungen.find(query).await
    }

    /// Orders of one customer; `KundeNotFound` if the customer doesn't exist.
    pub async fn bestellungen(
        &self,
        kunde_id: KundeId,
    ) -> Result<Vec<Bestellung>, BestellungError> {
        if self.kunden.get(kunde_id).await?.is_none() {
            return Err(BestellungError::KundeNotFound(kunde_id.to_string()));
        }
        self.bestellungen.find(BestellungQuery::Kunde(kunde_id)).await
    }

    pub async fn cancel(&self, id: BestellungId) -> Result<Bestellung, BestellungError> {
        self.bestellungen.cancel(id).await
    }

    pub async fn ship(&self, id: BestellungId) -> Result<Bestellung, BestellungError> {
        self.bestellungen.ship(id).await
    }
}
