//! # Kunde Client
//!
//! Provides a high‑level API for interacting with the `Kunde` actor.
use crate::kunde_actor::KundeError;
use crate::model::{Kunde, KundeAction, KundeCreate, KundeId, KundeQuery, KundeUpdate, Rolle};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Kunde actor.
#[derive(Clone)]
pub struct KundeClient {
    inner: ResourceClient<Kunde>,
}

#[async_trait]
impl ActorClient<Kunde> for KundeClient {
    type Error = KundeError;

    fn inner(&self) -> &ResourceClient<Kunde> {
        &self.inner
    }
}

impl KundeClient {
    pub fn new(inner: ResourceClient<Kunde>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_kunde(&self, params: KundeCreate) -> Result<KundeId, KundeError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_kunde(
        &self,
        id: KundeId,
        update: KundeUpdate,
        version: Option<u32>,
    ) -> Result<Kunde, KundeError> {
        debug!("Sending request");
        let result = match version {
            Some(version) => self.inner.update_versioned(id, update, version).await,
            None => self.inner.update(id, update).await,
        };
        result.map_err(Self::map_error)
    }

    /// Looks a customer up by email, ignoring case.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Kunde>, KundeError> {
        let mut treffer = self.find(KundeQuery::Email(email.to_string())).await?;
        Ok(treffer.pop())
    }

    /// Stores a new password hash.
    #[instrument(skip(self, hash))]
    pub async fn change_password(&self, id: KundeId, hash: String) -> Result<Kunde, KundeError> {
        self.action(id, KundeAction::PasswortAendern(hash)).await
    }

    #[instrument(skip(self))]
    pub async fn add_rolle(&self, id: KundeId, rolle: Rolle) -> Result<Kunde, KundeError> {
        self.action(id, KundeAction::RolleHinzufuegen(rolle)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_rolle(&self, id: KundeId, rolle: Rolle) -> Result<Kunde, KundeError> {
        self.action(id, KundeAction::RolleEntfernen(rolle)).await
    }

    async fn action(&self, id: KundeId, action: KundeAction) -> Result<Kunde, KundeError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
