//! Catalog use cases: products and their variants.

use crate::clients::{ProduktClient, ProduktdatenClient};
use crate::model::{
    Produkt, ProduktCreate, ProduktId, ProduktQuery, ProduktUpdate, Produktdaten,
    ProduktdatenDaten, ProduktdatenId, ProduktdatenQuery, ProduktdatenUpdate,
};
use crate::produkt_actor::ProduktError;
use crate::produktdaten_actor::ProduktdatenError;
use actor_framework::ActorClient;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct ProduktService {
    produkte: ProduktClient,
    produktdaten: ProduktdatenClient,
}

impl ProduktService {
    pub fn new(produkte: ProduktClient, produktdaten: ProduktdatenClient) -> Self {
        Self {
            produkte,
            produktdaten,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_produkt(&self, params: ProduktCreate) -> Result<Produkt, ProduktError> {
        let id = self.produkte.create_produkt(params).await?;
        info!(produkt = %id, "Product created");
        self.find_produkt(id).await
    }

    pub async fn find_produkt(&self, id: ProduktId) -> Result<Produkt, ProduktError> {
        self.produkte
            .get(id)
            .await?
            .ok_or_else(|| ProduktError::NotFound(id.to_string()))
    }

    pub async fn find_produkte(&self, query: ProduktQuery) -> Result<Vec<Produkt>, ProduktError> {
        self.produkte.find(query).await
    }

    pub async fn update_produkt(
        &self,
        id: ProduktId,
        update: ProduktUpdate,
        version: u32,
    ) -> Result<Produkt, ProduktError> {
        self.produkte.update_produkt(id, update, Some(version)).await
    }

    /// Deletes the product together with all of its variants.
    pub async fn delete_produkt(&self, id: ProduktId) -> Result<(), ProduktError> {
        self.produkte.delete(id).await?;
        info!(produkt = %id, "Product deleted");
        Ok(())
    }

    // --- Variants ---

    /// Adds a variant to an existing product.
    #[instrument(skip(self))]
    pub async fn create_produktdaten(
        &self,
        produkt_id: ProduktId,
        daten: ProduktdatenDaten,
    ) -> Result<Produktdaten, ProduktError> {
        self.find_produkt(produkt_id).await?;
        let id = self
            .produktdaten
            .create_produktdaten(daten.fuer(produkt_id))
            .await?;
        Ok(self.find_produktdaten(id).await?)
    }

    pub async fn find_produktdaten(
        &self,
        id: ProduktdatenId,
    ) -> Result<Produktdaten, ProduktdatenError> {
        self.produktdaten
            .get(id)
            .await?
            .ok_or_else(|| ProduktdatenError::NotFound(id.to_string()))
    }

    /// All variants of a product; `NotFound` if the product doesn't exist.
    pub async fn produktdaten(
        &self,
        produkt_id: ProduktId,
    ) -> Result<Vec<Produktdaten>, ProduktError> {
        self.find_produkt(produkt_id).await?;
        Ok(self
            .produktdaten
            .find(ProduktdatenQuery::Produkt(produkt_id))
            .await?)
    }

    pub async fn verfuegbare_produktdaten(&self) -> Result<Vec<Produktdaten>, ProduktdatenError> {
        self.produktdaten.find(ProduktdatenQuery::Verfuegbar).await
    }

    pub async fn update_produktdaten(
        &self,
        id: ProduktdatenId,
        update: ProduktdatenUpdate,
        version: u32,
    ) -> Result<Produktdaten, ProduktdatenError> {
        self.produktdaten
            .update_produktdaten(id, update, Some(version))
            .await
    }

    pub async fn delete_produktdaten(&self, id: ProduktdatenId) -> Result<(), ProduktdatenError> {
        self.produktdaten.delete(id).await
    }
}
