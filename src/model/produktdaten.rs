use crate::model::{hat_laenge, Audit, Betrag, ProduktId, Violations};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for product variants.
    ProduktdatenId,
    "produktdaten"
);

/// A sellable variant of a [`Produkt`](crate::model::Produkt): size and color, unit
/// price and the stock still available for ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Produktdaten {
    pub id: ProduktdatenId,
    pub produkt_id: ProduktId,
    pub groesse: Option<String>,
    pub farbe: Option<String>,
    pub preis: Betrag,
    pub anzahl_verfuegbar: u32,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Produktdaten {
    pub fn new(id: ProduktdatenId, params: ProduktdatenCreate) -> Self {
        Self {
            id,
            produkt_id: params.produkt_id,
            groesse: params.groesse,
            farbe: params.farbe,
            preis: params.preis,
            anzahl_verfuegbar: params.anzahl_verfuegbar,
            audit: Audit::neu(),
        }
    }

    pub fn pruefe(&self) -> Result<(), Violations> {
        let mut v = Violations::new();
        v.pruefe(!self.preis.is_null(), "preis", "must be greater than 0")
            .pruefe(
                self.groesse.as_deref().is_none_or(|g| hat_laenge(g, 1, 16)),
                "groesse",
                "must be 1 to 16 characters",
            )
            .pruefe(
                self.farbe.as_deref().is_none_or(|f| hat_laenge(f, 1, 32)),
                "farbe",
                "must be 1 to 32 characters",
            );
        v.into_result()
    }
}

/// Variant fields as sent by a client; the product comes from the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduktdatenDaten {
    #[serde(default)]
    pub groesse: Option<String>,
    #[serde(default)]
    pub farbe: Option<String>,
    pub preis: Betrag,
    #[serde(default)]
    pub anzahl_verfuegbar: u32,
}

impl ProduktdatenDaten {
    pub fn fuer(self, produkt_id: ProduktId) -> ProduktdatenCreate {
        ProduktdatenCreate {
            produkt_id,
            groesse: self.groesse,
            farbe: self.farbe,
            preis: self.preis,
            anzahl_verfuegbar: self.anzahl_verfuegbar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProduktdatenCreate {
    pub produkt_id: ProduktId,
    pub groesse: Option<String>,
    pub farbe: Option<String>,
    pub preis: Betrag,
    pub anzahl_verfuegbar: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProduktdatenUpdate {
    pub groesse: Option<String>,
    pub farbe: Option<String>,
    pub preis: Option<Betrag>,
    pub anzahl_verfuegbar: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum ProduktdatenQuery {
    Alle,
    Produkt(ProduktId),
    /// Variants with at least one unit in stock.
    Verfuegbar,
}
