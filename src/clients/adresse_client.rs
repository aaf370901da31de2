//! # Adresse Client
//!
//! Provides a high‑level API for interacting with the `Adresse` actor.
use crate::adresse_actor::AdresseError;
use crate::model::{Adresse, AdresseCreate, AdresseId, AdresseUpdate};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Adresse actor.
#[derive(Clone)]
pub struct AdresseClient {
    inner: ResourceClient<Adresse>,
}

impl AdresseClient {
    pub fn new(inner: ResourceClient<Adresse>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_adresse(&self, params: AdresseCreate) -> Result<AdresseId, AdresseError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies `update`; with `version` set the update only succeeds against that version.
    #[instrument(skip(self))]
    pub async fn update_adresse(
        &self,
        id: AdresseId,
        update: AdresseUpdate,
        version: Option<u32>,
    ) -> Result<Adresse, AdresseError> {
        debug!("Sending request");
        let result = match version {
            Some(version) => self.inner.update_versioned(id, update, version).await,
            None => self.inner.update(id, update).await,
        };
        result.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Adresse> for AdresseClient {
    type Error = AdresseError;

    fn inner(&self) -> &ResourceClient<Adresse> {
        &self.inner
    }
}
