//! Entity trait implementation for the Kunde domain type.
//!
//! Customers are unique by email (case-insensitive). Deleting a customer deletes their
//! addresses through the injected [`AdresseClient`].

use super::KundeError;
use crate::clients::AdresseClient;
use crate::model::{
    AdresseQuery, Kunde, KundeAction, KundeCreate, KundeId, KundeQuery, KundeUpdate,
};
use actor_framework::ActorClient;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Kunde {
    type Id = KundeId;
    type Create = KundeCreate;
    type Update = KundeUpdate;
    type Action = KundeAction;
    type ActionResult = Kunde;
    type Query = KundeQuery;
    type Context = AdresseClient;
    type Error = KundeError;

    fn from_create_params(id: KundeId, params: KundeCreate) -> Result<Self, Self::Error> {
        let kunde = Kunde::new(id, params);
        kunde.pruefe().map_err(KundeError::Validation)?;
        Ok(kunde)
    }

    fn matches(&self, query: &KundeQuery) -> bool {
        match query {
            KundeQuery::Alle => true,
            KundeQuery::Nachname(prefix) => self
                .nachname
                .to_lowercase()
                .starts_with(&prefix.to_lowercase()),
            KundeQuery::Email(email) => self.email.to_lowercase() == email.to_lowercase(),
        }
    }

    fn version(&self) -> u32 {
        self.audit.version
    }

    fn touch(&mut self) {
        self.audit.touch();
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.to_lowercase())
    }

    async fn on_update(
        &mut self,
        update: KundeUpdate,
        _ctx: &AdresseClient,
    ) -> Result<(), Self::Error> {
        if let Some(nachname) = update.nachname {
            self.nachname = nachname;
        }
        if let Some(vorname) = update.vorname {
            self.vorname = vorname;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(newsletter) = update.newsletter {
            self.newsletter = newsletter;
        }
        self.pruefe().map_err(KundeError::Validation)
    }

    /// Cascades to the customer's addresses.
    async fn on_delete(&self, adressen: &AdresseClient) -> Result<(), Self::Error> {
        let eigene = adressen.find(AdresseQuery::Kunde(self.id)).await?;
        debug!(kunde = %self.id, anzahl = eigene.len(), "Deleting addresses");
        for adresse in eigene {
            adressen.delete(adresse.id).await?;
        }
        Ok(())
    }

    /// Handles custom actions for the Kunde entity.
    ///
    /// # Actions
    /// - `PasswortAendern`: replaces the stored bcrypt hash
    /// - `RolleHinzufuegen` / `RolleEntfernen`: grants or revokes a role
    ///
    /// Returns the changed customer.
    async fn handle_action(
        &mut self,
        action: KundeAction,
        _ctx: &AdresseClient,
    ) -> Result<Kunde, Self::Error> {
        match action {
            KundeAction::PasswortAendern(hash) => {
                self.passwort_hash = hash;
                info!(kunde = %self.id, "Password changed");
            }
            KundeAction::RolleHinzufuegen(rolle) => {
                self.rollen.insert(rolle);
            }
            KundeAction::RolleEntfernen(rolle) => {
                self.rollen.remove(&rolle);
            }
        }
        self.audit.touch();
        Ok(self.clone())
    }
}
