//! Entity trait implementation for the Produktdaten domain type.
//!
//! Includes the stock bookkeeping used by orders: checking, reserving and releasing.

use super::actions::{ProduktdatenAction, ProduktdatenActionResult};
use super::ProduktdatenError;
use crate::model::{
    Produktdaten, ProduktdatenCreate, ProduktdatenId, ProduktdatenQuery, ProduktdatenUpdate,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Produktdaten {
    type Id = ProduktdatenId;
    type Create = ProduktdatenCreate;
    type Update = ProduktdatenUpdate;
    type Action = ProduktdatenAction;
    type ActionResult = ProduktdatenActionResult;
    type Query = ProduktdatenQuery;
    type Context = ();
    type Error = ProduktdatenError;

    fn from_create_params(
        id: ProduktdatenId,
        params: ProduktdatenCreate,
    ) -> Result<Self, Self::Error> {
        let produktdaten = Produktdaten::new(id, params);
        produktdaten.pruefe().map_err(ProduktdatenError::Validation)?;
        Ok(produktdaten)
    }

    fn matches(&self, query: &ProduktdatenQuery) -> bool {
        match query {
            ProduktdatenQuery::Alle => true,
            ProduktdatenQuery::Produkt(produkt_id) => self.produkt_id == *produkt_id,
            ProduktdatenQuery::Verfuegbar => self.anzahl_verfuegbar > 0,
        }
    }

    fn version(&self) -> u32 {
        self.audit.version
    }

    fn touch(&mut self) {
        self.audit.touch();
    }

    /// Handles updates to the variant.
    ///
    /// # Fields Updated
    /// - `groesse`, `farbe`: descriptive attributes
    /// - `preis`: unit price for future orders; existing orders keep their price
    /// - `anzahl_verfuegbar`: stock level (restocking)
    async fn on_update(
        &mut self,
        update: ProduktdatenUpdate,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        if let Some(groesse) = update.groesse {
            self.groesse = Some(groesse);
        }
        if let Some(farbe) = update.farbe {
            self.farbe = Some(farbe);
        }
        if let Some(preis) = update.preis {
            self.preis = preis;
        }
        if let Some(anzahl) = update.anzahl_verfuegbar {
            self.anzahl_verfuegbar = anzahl;
        }
        self.pruefe().map_err(ProduktdatenError::Validation)
    }

    /// Handles custom actions for the variant.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `Reservieren`: Decrements stock if available, returns the unit price
    /// - `Freigeben`: Increments stock, returns the new level
    async fn handle_action(
        &mut self,
        action: ProduktdatenAction,
        _ctx: &(),
    ) -> Result<ProduktdatenActionResult, Self::Error> {
        match action {
            ProduktdatenAction::CheckStock => {
                Ok(ProduktdatenActionResult::CheckStock(self.anzahl_verfuegbar))
            }
            ProduktdatenAction::Reservieren(0) | ProduktdatenAction::Freigeben(0) => {
                Err(ProduktdatenError::InvalidQuantity(0))
            }
            ProduktdatenAction::Reservieren(anzahl) => {
                if anzahl > self.anzahl_verfuegbar {
                    return Err(ProduktdatenError::InsufficientStock {
                        id: self.id.to_string(),
                        requested: anzahl,
                        available: self.anzahl_verfuegbar,
                    });
                }
                self.anzahl_verfuegbar -= anzahl;
                self.audit.touch();
                Ok(ProduktdatenActionResult::Reservieren(self.preis))
            }
            ProduktdatenAction::Freigeben(anzahl) => {
                self.anzahl_verfuegbar = self
                    .anzahl_verfuegbar
                    .checked_add(anzahl)
                    .ok_or(ProduktdatenError::InvalidQuantity(anzahl))?;
                self.audit.touch();
                Ok(ProduktdatenActionResult::Freigeben(self.anzahl_verfuegbar))
            }
        }
    }
}
