//! # Bestellung Client
//!
//! Provides a high‑level API for interacting with the `Bestellung` actor.
use crate::bestellung_actor::BestellungError;
use crate::model::{Bestellung, BestellungAction, BestellungCreate, BestellungId};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Bestellung actor.
///
/// Orchestration logic (customer validation, stock reservation) happens in the
/// Bestellung actor's `on_create` hook.
#[derive(Clone)]
pub struct BestellungClient {
    inner: ResourceClient<Bestellung>,
}

#[async_trait]
impl ActorClient<Bestellung> for BestellungClient {
    type Error = BestellungError;

    fn inner(&self) -> &ResourceClient<Bestellung> {
        &self.inner
    }
}

impl BestellungClient {
    pub fn new(inner: ResourceClient<Bestellung>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_bestellung(
        &self,
        params: BestellungCreate,
    ) -> Result<BestellungId, BestellungError> {
        info!("Sending create_bestellung to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Marks an open order as shipped.
    #[instrument(skip(self))]
    pub async fn ship(&self, id: BestellungId) -> Result<Bestellung, BestellungError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, BestellungAction::Versenden)
            .await
            .map_err(Self::map_error)
    }

    /// Cancels an open order and releases its stock.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: BestellungId) -> Result<Bestellung, BestellungError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, BestellungAction::Stornieren)
            .await
            .map_err(Self::map_error)
    }
}
