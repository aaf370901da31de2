//! Entity trait implementation for the Adresse domain type.
//!
//! Addresses validate themselves on create and update and have no dependencies.

use super::AdresseError;
use crate::model::{
    Adresse, AdresseAction, AdresseCreate, AdresseId, AdresseQuery, AdresseUpdate,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Adresse {
    type Id = AdresseId;
    type Create = AdresseCreate;
    type Update = AdresseUpdate;
    type Action = AdresseAction;
    type ActionResult = ();
    type Query = AdresseQuery;
    type Context = ();
    type Error = AdresseError;

    fn from_create_params(id: AdresseId, params: AdresseCreate) -> Result<Self, Self::Error> {
        let adresse = Adresse::new(id, params);
        adresse.pruefe().map_err(AdresseError::Validation)?;
        Ok(adresse)
    }

    fn matches(&self, query: &AdresseQuery) -> bool {
        match query {
            AdresseQuery::Alle => true,
            AdresseQuery::Kunde(kunde_id) => self.kunde_id == *kunde_id,
        }
    }

    fn version(&self) -> u32 {
        self.audit.version
    }

    fn touch(&mut self) {
        self.audit.touch();
    }

    async fn on_update(&mut self, update: AdresseUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(plz) = update.plz {
            self.plz = plz;
        }
        if let Some(ort) = update.ort {
            self.ort = ort;
        }
        if let Some(strasse) = update.strasse {
            self.strasse = strasse;
        }
        if let Some(hausnr) = update.hausnr {
            self.hausnr = Some(hausnr);
        }
        self.pruefe().map_err(AdresseError::Validation)
    }

    async fn handle_action(&mut self, action: AdresseAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
