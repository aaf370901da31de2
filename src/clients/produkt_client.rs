//! # Produkt Client
//!
//! Provides a high‑level API for interacting with the `Produkt` actor.
use crate::model::{Produkt, ProduktCreate, ProduktId, ProduktUpdate};
use crate::produkt_actor::ProduktError;
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Produkt actor.
#[derive(Clone)]
pub struct ProduktClient {
    inner: ResourceClient<Produkt>,
}

#[async_trait]
impl ActorClient<Produkt> for ProduktClient {
    type Error = ProduktError;

    fn inner(&self) -> &ResourceClient<Produkt> {
        &self.inner
    }
}

impl ProduktClient {
    pub fn new(inner: ResourceClient<Produkt>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_produkt(&self, params: ProduktCreate) -> Result<ProduktId, ProduktError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_produkt(
        &self,
        id: ProduktId,
        update: ProduktUpdate,
        version: Option<u32>,
    ) -> Result<Produkt, ProduktError> {
        debug!("Sending request");
        let result = match version {
            Some(version) => self.inner.update_versioned(id, update, version).await,
            None => self.inner.update(id, update).await,
        };
        result.map_err(Self::map_error)
    }
}
