//! Represents a customer order.
//!
//! # Actor Framework
//! [`Bestellung`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait in
//! `bestellung_actor::entity`. Creating an order reserves stock on every line through the
//! Produktdaten actor; see that module for the orchestration.

use crate::model::{Audit, Betrag, KundeId, ProduktdatenId};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for orders.
    BestellungId,
    "bestellung"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestellStatus {
    Offen,
    Versendet,
    Storniert,
}

/// One order line. `einzelpreis` is the variant's price at the moment of ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bestellposten {
    pub produktdaten_id: ProduktdatenId,
    pub anzahl: u32,
    pub einzelpreis: Betrag,
}

impl Bestellposten {
    /// `einzelpreis * anzahl`, `None` on overflow.
    pub fn summe(&self) -> Option<Betrag> {
        self.einzelpreis.checked_mul(self.anzahl)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bestellung {
    pub id: BestellungId,
    pub kunde_id: KundeId,
    pub posten: Vec<Bestellposten>,
    pub gesamtpreis: Betrag,
    pub status: BestellStatus,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Bestellung {
    /// A new open order. Prices stay zero until stock has been reserved.
    pub fn new(id: BestellungId, params: BestellungCreate) -> Self {
        Self {
            id,
            kunde_id: params.kunde_id,
            posten: params
                .posten
                .into_iter()
                .map(|p| Bestellposten {
                    produktdaten_id: p.produktdaten_id,
                    anzahl: p.anzahl,
                    einzelpreis: Betrag::NULL,
                })
                .collect(),
            gesamtpreis: Betrag::NULL,
            status: BestellStatus::Offen,
            audit: Audit::neu(),
        }
    }

    /// Sum of all line totals, `None` on overflow.
    pub fn berechne_gesamtpreis(&self) -> Option<Betrag> {
        let summen = self
            .posten
            .iter()
            .map(Bestellposten::summe)
            .collect::<Option<Vec<_>>>()?;
        Betrag::summe(summen)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostenCreate {
    pub produktdaten_id: ProduktdatenId,
    pub anzahl: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestellungCreate {
    pub kunde_id: KundeId,
    pub posten: Vec<PostenCreate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestellungAction {
    Versenden,
    Stornieren,
}

#[derive(Debug, Clone)]
pub enum BestellungQuery {
    Alle,
    Kunde(KundeId),
    Status(BestellStatus),
}
