//! Entity trait implementation for the Bestellung domain type.
//!
//! This is where an order talks to the other actors:
//!
//! 1. `from_create_params` checks the order shape (at least one line, quantities >= 1).
//! 2. `on_create` checks that the customer exists, then reserves stock line by line.
//!    Each reservation returns the variant's current unit price. If any reservation
//!    fails, every earlier one is released again before the error is returned.
//! 3. `handle_action` ships or cancels; cancelling puts the stock back.

use super::BestellungError;
use crate::clients::{KundeClient, ProduktdatenClient};
use crate::model::{
    BestellStatus, Bestellung, BestellungAction, BestellungCreate, BestellungId, BestellungQuery,
    ProduktdatenId, Violations,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Bestellung {
    type Id = BestellungId;
    type Create = BestellungCreate;
    /// Orders only change through actions.
    type Update = ();
    type Action = BestellungAction;
    type ActionResult = Bestellung;
    type Query = BestellungQuery;
    type Context = (KundeClient, ProduktdatenClient);
    type Error = BestellungError;

    fn from_create_params(id: BestellungId, params: BestellungCreate) -> Result<Self, Self::Error> {
        let mut v = Violations::new();
        v.pruefe(!params.posten.is_empty(), "posten", "must contain at least one line");
        for posten in &params.posten {
            v.pruefe(
                posten.anzahl >= 1,
                "anzahl",
                format!("must be at least 1 for {}", posten.produktdaten_id),
            );
        }
        v.into_result().map_err(BestellungError::Validation)?;
        Ok(Bestellung::new(id, params))
    }

    fn matches(&self, query: &BestellungQuery) -> bool {
        match query {
            BestellungQuery::Alle => true,
            BestellungQuery::Kunde(kunde_id) => self.kunde_id == *kunde_id,
            BestellungQuery::Status(status) => self.status == *status,
        }
    }

    fn version(&self) -> u32 {
        self.audit.version
    }

    fn touch(&mut self) {
        self.audit.touch();
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (kunden, produktdaten) = ctx;

        if kunden.get(self.kunde_id).await?.is_none() {
            return Err(BestellungError::KundeNotFound(self.kunde_id.to_string()));
        }

        let mut reserviert: Vec<(ProduktdatenId, u32)> = Vec::with_capacity(self.posten.len());
        for posten in self.posten.iter_mut() {
            match produktdaten
                .reserve_stock(posten.produktdaten_id, posten.anzahl)
                .await
            {
                Ok(preis) => {
                    posten.einzelpreis = preis;
                    reserviert.push((posten.produktdaten_id, posten.anzahl));
                }
                Err(e) => {
                    warn!(
                        bestellung = %self.id,
                        produktdaten = %posten.produktdaten_id,
                        error = %e,
                        "Reservation failed"
                    );
                    freigeben(produktdaten, &reserviert).await;
                    return Err(e.into());
                }
            }
        }

        match self.berechne_gesamtpreis() {
            Some(gesamtpreis) => self.gesamtpreis = gesamtpreis,
            None => {
                freigeben(produktdaten, &reserviert).await;
                return Err(BestellungError::Overflow);
            }
        }
        info!(
            bestellung = %self.id,
            kunde = %self.kunde_id,
            gesamtpreis = %self.gesamtpreis,
            "Order placed"
        );
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles custom actions for the Bestellung entity.
    ///
    /// # Actions
    /// - `Versenden`: `Offen` -> `Versendet`
    /// - `Stornieren`: `Offen` -> `Storniert`, releasing every line's stock
    ///
    /// Returns the changed order.
    async fn handle_action(
        &mut self,
        action: BestellungAction,
        ctx: &Self::Context,
    ) -> Result<Bestellung, Self::Error> {
        if self.status != BestellStatus::Offen {
            return Err(BestellungError::IllegalState {
                id: self.id.to_string(),
                status: self.status,
            });
        }
        match action {
            BestellungAction::Versenden => {
                self.status = BestellStatus::Versendet;
            }
            BestellungAction::Stornieren => {
                let (_, produktdaten) = ctx;
                let posten: Vec<_> = self
                    .posten
                    .iter()
                    .map(|p| (p.produktdaten_id, p.anzahl))
                    .collect();
                freigeben(produktdaten, &posten).await;
                self.status = BestellStatus::Storniert;
            }
        }
        self.audit.touch();
        info!(bestellung = %self.id, status = ?self.status, "Status changed");
        Ok(self.clone())
    }
}

/// Puts reserved stock back. A variant that can't take it back (e.g. deleted in the
/// meantime) is logged and skipped.
async fn freigeben(produktdaten: &ProduktdatenClient, posten: &[(ProduktdatenId, u32)]) {
    for (id, anzahl) in posten {
        if let Err(e) = produktdaten.release_stock(*id, *anzahl).await {
            warn!(produktdaten = %id, anzahl, error = %e, "Release failed");
        }
    }
}

