use crate::model::{hat_laenge, ist_plz, Audit, KundeId, Violations};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for addresses.
    AdresseId,
    "adresse"
);

/// A postal address belonging to one customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adresse {
    pub id: AdresseId,
    pub kunde_id: KundeId,
    pub plz: String,
    pub ort: String,
    pub strasse: String,
    pub hausnr: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Adresse {
    pub fn new(id: AdresseId, params: AdresseCreate) -> Self {
        Self {
            id,
            kunde_id: params.kunde_id,
            plz: params.plz,
            ort: params.ort,
            strasse: params.strasse,
            hausnr: params.hausnr,
            audit: Audit::neu(),
        }
    }

    pub fn pruefe(&self) -> Result<(), Violations> {
        let mut v = Violations::new();
        v.pruefe(ist_plz(&self.plz), "plz", "must be exactly 5 digits")
            .pruefe(hat_laenge(&self.ort, 1, 64), "ort", "must be 1 to 64 characters")
            .pruefe(
                hat_laenge(&self.strasse, 1, 64),
                "strasse",
                "must be 1 to 64 characters",
            )
            .pruefe(
                self.hausnr.as_deref().is_none_or(|h| hat_laenge(h, 1, 8)),
                "hausnr",
                "must be 1 to 8 characters",
            );
        v.into_result()
    }
}

/// Address fields as sent by a client; the owner comes from the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdresseDaten {
    pub plz: String,
    pub ort: String,
    pub strasse: String,
    #[serde(default)]
    pub hausnr: Option<String>,
}

impl AdresseDaten {
    pub fn fuer(self, kunde_id: KundeId) -> AdresseCreate {
        AdresseCreate {
            kunde_id,
            plz: self.plz,
            ort: self.ort,
            strasse: self.strasse,
            hausnr: self.hausnr,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdresseCreate {
    pub kunde_id: KundeId,
    pub plz: String,
    pub ort: String,
    pub strasse: String,
    pub hausnr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdresseUpdate {
    pub plz: Option<String>,
    pub ort: Option<String>,
    pub strasse: Option<String>,
    pub hausnr: Option<String>,
}

/// Addresses have no custom actions.
#[derive(Debug, Clone)]
pub enum AdresseAction {}

#[derive(Debug, Clone)]
pub enum AdresseQuery {
    Alle,
    Kunde(KundeId),
}
