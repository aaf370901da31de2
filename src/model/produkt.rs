use crate::model::{hat_laenge, Audit, Violations};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for catalog products.
    ProduktId,
    "produkt"
);

/// A catalog entry. Sellable variants with price and stock are [`Produktdaten`](crate::model::Produktdaten).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Produkt {
    pub id: ProduktId,
    pub bezeichnung: String,
    pub beschreibung: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Produkt {
    pub fn new(id: ProduktId, params: ProduktCreate) -> Self {
        Self {
            id,
            bezeichnung: params.bezeichnung,
            beschreibung: params.beschreibung,
            audit: Audit::neu(),
        }
    }

    pub fn pruefe(&self) -> Result<(), Violations> {
        let mut v = Violations::new();
        v.pruefe(
            hat_laenge(&self.bezeichnung, 1, 64),
            "bezeichnung",
            "must be 1 to 64 characters",
        )
        .pruefe(
            self.beschreibung
                .as_deref()
                .is_none_or(|b| b.chars().count() <= 2048),
            "beschreibung",
            "must be at most 2048 characters",
        );
        v.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduktCreate {
    pub bezeichnung: String,
    #[serde(default)]
    pub beschreibung: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProduktUpdate {
    pub bezeichnung: Option<String>,
    pub beschreibung: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ProduktAction {}

#[derive(Debug, Clone)]
pub enum ProduktQuery {
    Alle,
    /// Case-insensitive substring of the name.
    Bezeichnung(String),
}
