//! Entity trait implementation for the Produkt domain type.

use super::ProduktError;
use crate::clients::ProduktdatenClient;
use crate::model::{Produkt, ProduktAction, ProduktCreate, ProduktId, ProduktQuery, ProduktUpdate};
use crate::model::ProduktdatenQuery;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Produkt {
    type Id = ProduktId;
    type Create = ProduktCreate;
    type Update = ProduktUpdate;
    type Action = ProduktAction;
    type ActionResult = ();
    type Query = ProduktQuery;
    type Context = ProduktdatenClient;
    type Error = ProduktError;

    fn from_create_params(id: ProduktId, params: ProduktCreate) -> Result<Self, Self::Error> {
        let produkt = Produkt::new(id, params);
        produkt.pruefe().map_err(ProduktError::Validation)?;
        Ok(produkt)
    }

    fn matches(&self, query: &ProduktQuery) -> bool {
        match query {
            ProduktQuery::Alle => true,
            ProduktQuery::Bezeichnung(teil) => self
                .bezeichnung
                .to_lowercase()
                .contains(&teil.to_lowercase()),
        }
    }

    fn version(&self) -> u32 {
        self.audit.version
    }

    fn touch(&mut self) {
        self.audit.touch();
    }

    async fn on_update(
        &mut self,
        update: ProduktUpdate,
        _ctx: &ProduktdatenClient,
    ) -> Result<(), Self::Error> {
        if let Some(bezeichnung) = update.bezeichnung {
            self.bezeichnung = bezeichnung;
        }
        if let Some(beschreibung) = update.beschreibung {
            self.beschreibung = Some(beschreibung);
        }
        self.pruefe().map_err(ProduktError::Validation)
    }

    /// A product goes away together with all of its variants.
    async fn on_delete(&self, produktdaten: &ProduktdatenClient) -> Result<(), Self::Error> {
        let varianten = produktdaten.find(ProduktdatenQuery::Produkt(self.id)).await?;
        debug!(produkt = %self.id, anzahl = varianten.len(), "Deleting variants");
        for variante in varianten {
            produktdaten.delete(variante.id).await?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProduktAction,
        _ctx: &ProduktdatenClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
