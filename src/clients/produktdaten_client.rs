//! # Produktdaten Client
//!
//! Provides a high‑level API for interacting with the `Produktdaten` actor.
//! It wraps a `ResourceClient<Produktdaten>` and exposes the stock actions with typed results.
use crate::model::{Betrag, Produktdaten, ProduktdatenCreate, ProduktdatenId, ProduktdatenUpdate};
use crate::produktdaten_actor::{ProduktdatenAction, ProduktdatenActionResult, ProduktdatenError};
use actor_framework::{ActorClient, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Produktdaten actor.
#[derive(Clone)]
pub struct ProduktdatenClient {
    inner: ResourceClient<Produktdaten>,
}

#[async_trait]
impl ActorClient<Produktdaten> for ProduktdatenClient {
    type Error = ProduktdatenError;

    fn inner(&self) -> &ResourceClient<Produktdaten> {
        &self.inner
    }
}

impl ProduktdatenClient {
    pub fn new(inner: ResourceClient<Produktdaten>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_produktdaten(
        &self,
        params: ProduktdatenCreate,
    ) -> Result<ProduktdatenId, ProduktdatenError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_produktdaten(
        &self,
        id: ProduktdatenId,
        update: ProduktdatenUpdate,
        version: Option<u32>,
    ) -> Result<Produktdaten, ProduktdatenError> {
        debug!("Sending request");
        let result = match version {
            Some(version) => self.inner.update_versioned(id, update, version).await,
            None => self.inner.update(id, update).await,
        };
        result.map_err(Self::map_error)
    }

    /// Check the current stock level for a variant.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProduktdatenId) -> Result<u32, ProduktdatenError> {
        debug!("Checking stock for {}", id);
        match self.action(id, ProduktdatenAction::CheckStock).await? {
            ProduktdatenActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Reserve `anzahl` units of a variant.
    ///
    /// Returns the unit price on success, or an error if the stock is insufficient.
    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: ProduktdatenId,
        anzahl: u32,
    ) -> Result<Betrag, ProduktdatenError> {
        debug!("Reserving {} units of {}", anzahl, id);
        match self.action(id, ProduktdatenAction::Reservieren(anzahl)).await? {
            ProduktdatenActionResult::Reservieren(preis) => Ok(preis),
            other => Err(unexpected(other)),
        }
    }

    /// Return `anzahl` previously reserved units. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn release_stock(
        &self,
        id: ProduktdatenId,
        anzahl: u32,
    ) -> Result<u32, ProduktdatenError> {
        debug!("Releasing {} units of {}", anzahl, id);
        match self.action(id, ProduktdatenAction::Freigeben(anzahl)).await? {
            ProduktdatenActionResult::Freigeben(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    async fn action(
        &self,
        id: ProduktdatenId,
        action: ProduktdatenAction,
    ) -> Result<ProduktdatenActionResult, ProduktdatenError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: ProduktdatenActionResult) -> ProduktdatenError {
    ProduktdatenError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action};
    use actor_framework::FrameworkError;

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Produktdaten>(10);
        let produktdaten_client = ProduktdatenClient::new(client);

        let check_task =
            tokio::spawn(async move { produktdaten_client.check_stock(ProduktdatenId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProduktdatenId(1));
        assert_eq!(action, ProduktdatenAction::CheckStock);
        responder
            .send(Ok(ProduktdatenActionResult::CheckStock(42)))
            .unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_reserve_stock_returns_unit_price() {
        let (client, mut receiver) = create_mock_client::<Produktdaten>(10);
        let produktdaten_client = ProduktdatenClient::new(client);

        let reserve_task = tokio::spawn(async move {
            produktdaten_client.reserve_stock(ProduktdatenId(1), 5).await
        });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ProduktdatenAction::Reservieren(5));
        responder
            .send(Ok(ProduktdatenActionResult::Reservieren(Betrag::from_cent(999))))
            .unwrap();

        assert_eq!(reserve_task.await.unwrap().unwrap(), Betrag::from_cent(999));
    }

    #[tokio::test]
    async fn test_reserve_stock_recovers_entity_error() {
        let (client, mut receiver) = create_mock_client::<Produktdaten>(10);
        let produktdaten_client = ProduktdatenClient::new(client);

        let reserve_task = tokio::spawn(async move {
            produktdaten_client.reserve_stock(ProduktdatenId(1), 100).await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        let insufficient = ProduktdatenError::InsufficientStock {
            id: "produktdaten_1".into(),
            requested: 100,
            available: 3,
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(insufficient.clone()))))
            .unwrap();

        assert_eq!(reserve_task.await.unwrap().unwrap_err(), insufficient);
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let (client, mut receiver) = create_mock_client::<Produktdaten>(10);
        let produktdaten_client = ProduktdatenClient::new(client);

        let release_task = tokio::spawn(async move {
            produktdaten_client.release_stock(ProduktdatenId(1), 1).await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Ok(ProduktdatenActionResult::CheckStock(1)))
            .unwrap();

        assert!(matches!(
            release_task.await.unwrap(),
            Err(ProduktdatenError::ActorCommunicationError(_))
        ));
    }
}
