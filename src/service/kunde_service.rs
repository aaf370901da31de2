//! Customer and address use cases.

use crate::clients::{AdresseClient, BestellungClient, KundeClient};
use crate::kunde_actor::KundeError;
use crate::model::{
    Adresse, AdresseDaten, AdresseId, AdresseQuery, AdresseUpdate, BestellungQuery, Kunde,
    KundeCreate, KundeId, KundeQuery, KundeUpdate, Rolle, Violations,
};
use actor_framework::ActorClient;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::{info, instrument, warn};

const MIN_PASSWORT_LAENGE: usize = 8;

/// Self-registration payload.
#[derive(Clone, Deserialize)]
pub struct Registrierung {
    pub nachname: String,
    #[serde(default)]
    pub vorname: String,
    pub email: String,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default)]
    pub seit: Option<NaiveDate>,
    pub passwort: String,
    /// Optional first address, stored together with the customer.
    #[serde(default)]
    pub adresse: Option<AdresseDaten>,
}

impl std::fmt::Debug for Registrierung {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registrierung")
            .field("nachname", &self.nachname)
            .field("email", &self.email)
            .field("adresse", &self.adresse)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct KundeService {
    kunden: KundeClient,
    adressen: AdresseClient,
    bestellungen: BestellungClient,
    bcrypt_cost: u32,
}

impl KundeService {
    pub fn new(
        kunden: KundeClient,
        adressen: AdresseClient,
        bestellungen: BestellungClient,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            kunden,
            adressen,
            bestellungen,
            bcrypt_cost,
        }
    }

    /// Registers a customer with the `Kunde` role.
    pub async fn create_kunde(&self, registrierung: Registrierung) -> Result<Kunde, KundeError> {
        self.create_kunde_mit_rollen(registrierung, BTreeSet::from([Rolle::Kunde]))
            .await
    }

    /// Registers a customer with the given roles.
    ///
    /// The password is hashed on the blocking pool. If the optional first address is
    /// rejected, the customer is deleted again and the address error is returned.
    #[instrument(skip(self))]
    pub async fn create_kunde_mit_rollen(
        &self,
        registrierung: Registrierung,
        rollen: BTreeSet<Rolle>,
    ) -> Result<Kunde, KundeError> {
        pruefe_passwort(&registrierung.passwort)?;
        let passwort_hash = hash_passwort(registrierung.passwort, self.bcrypt_cost).await?;

        let id = self
            .kunden
            .create_kunde(KundeCreate {
                nachname: registrierung.nachname,
                vorname: registrierung.vorname,
                email: registrierung.email,
                newsletter: registrierung.newsletter,
                seit: registrierung.seit,
                rollen,
                passwort_hash,
            })
            .await?;

        if let Some(daten) = registrierung.adresse {
            if let Err(e) = self.adressen.create_adresse(daten.fuer(id)).await {
                warn!(kunde = %id, error = %e, "Initial address rejected, removing customer");
                if let Err(cleanup) = self.kunden.delete(id).await {
                    warn!(kunde = %id, error = %cleanup, "Compensation failed");
                }
                return Err(e.into());
            }
        }

        info!(kunde = %id, "Customer registered");
        self.find_kunde(id).await
    }

    pub async fn find_kunde(&self, id: KundeId) -> Result<Kunde, KundeError> {
        self.kunden
            .get(id)
            .await?
            .ok_or_else(|| KundeError::NotFound(id.to_string()))
    }

    pub async fn find_kunden(&self, query: KundeQuery) -> Result<Vec<Kunde>, KundeError> {
        self.kunden.find(query).await
    }

    /// Applies `update` if the stored customer still has `version`.
    pub async fn update_kunde(
        &self,
        id: KundeId,
        update: KundeUpdate,
        version: u32,
    ) -> Result<Kunde, KundeError> {
        self.kunden.update_kunde(id, update, Some(version)).await
    }

    #[instrument(skip(self, passwort))]
    pub async fn change_password(
        &self,
        id: KundeId,
        passwort: String,
    ) -> Result<Kunde, KundeError> {
        pruefe_passwort(&passwort)?;
        let hash = hash_passwort(passwort, self.bcrypt_cost).await?;
        self.kunden.change_password(id, hash).await
    }

    pub async fn add_rolle(&self, id: KundeId, rolle: Rolle) -> Result<Kunde, KundeError> {
        self.kunden.add_rolle(id, rolle).await
    }

    pub async fn remove_rolle(&self, id: KundeId, rolle: Rolle) -> Result<Kunde, KundeError> {
        self.kunden.remove_rolle(id, rolle).await
    }

    /// Deletes a customer and their addresses. Refused while the customer has orders.
    #[instrument(skip(self))]
    pub async fn delete_kunde(&self, id: KundeId) -> Result<(), KundeError> {
        let bestellungen = self
            .bestellungen
            .find(BestellungQuery::Kunde(id))
            .await
            .map_err(|e| KundeError::ActorCommunicationError(e.to_string()))?;
        if !bestellungen.is_empty() {
            return Err(KundeError::HasOrders(id.to_string()));
        }
        self.kunden.delete(id).await?;
        info!(kunde = %id, "Customer deleted");
        Ok(())
    }

    // --- Addresses ---

    pub async fn create_adresse(
        &self,
        kunde_id: KundeId,
        daten: AdresseDaten,
    ) -> Result<Adresse, KundeError> {
        self.find_kunde(kunde_id).await?;
        let id = self.adressen.create_adresse(daten.fuer(kunde_id)).await?;
        self.find_adresse(id).await
    }

    pub async fn find_adresse(&self, id: AdresseId) -> Result<Adresse, KundeError> {
        self.adressen
            .get(id)
            .await?
            .ok_or_else(|| crate::adresse_actor::AdresseError::NotFound(id.to_string()).into())
    }

    pub async fn adressen(&self, kunde_id: KundeId) -> Result<Vec<Adresse>, KundeError> {
        self.find_kunde(kunde_id).await?;
        Ok(self.adressen.find(AdresseQuery::Kunde(kunde_id)).await?)
    }

    pub async fn update_adresse(
        &self,
        id: AdresseId,
        update: AdresseUpdate,
        version: u32,
    ) -> Result<Adresse, KundeError> {
        Ok(self.adressen.update_adresse(id, update, Some(version)).await?)
    }

    pub async fn delete_adresse(&self, id: AdresseId) -> Result<(), KundeError> {
        Ok(self.adressen.delete(id).await?)
    }
}

fn pruefe_passwort(passwort: &str) -> Result<(), KundeError> {
    let mut v = Violations::new();
    v.pruefe(
        passwort.chars().count() >= MIN_PASSWORT_LAENGE,
        "passwort",
        format!("must be at least {MIN_PASSWORT_LAENGE} characters"),
    );
    v.into_result().map_err(KundeError::Validation)
}

async fn hash_passwort(passwort: String, cost: u32) -> Result<String, KundeError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(passwort, cost))
        .await
        .map_err(|e| KundeError::Internal(e.to_string()))?
        .map_err(|e| KundeError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActorConfig;
    use crate::lifecycle::ShopSystem;

    fn registrierung(email: &str) -> Registrierung {
        Registrierung {
            nachname: "Mustermann".into(),
            vorname: "Max".into(),
            email: email.into(),
            newsletter: false,
            seit: None,
            passwort: "geheim123".into(),
            adresse: None,
        }
    }

    fn service(system: &ShopSystem) -> KundeService {
        KundeService::new(
            system.kunde_client.clone(),
            system.adresse_client.clone(),
            system.bestellung_client.clone(),
            4,
        )
    }

    #[tokio::test]
    async fn registration_hashes_password() {
        let system = ShopSystem::new(&ActorConfig::default());
        let kunde = service(&system)
            .create_kunde(registrierung("max@example.com"))
            .await
            .unwrap();
        assert!(kunde.hat_rolle(Rolle::Kunde));
        assert_ne!(kunde.passwort_hash, "geheim123");
        assert!(bcrypt::verify("geheim123", &kunde.passwort_hash).unwrap());
    }

    #[tokio::test]
    async fn short_password_is_a_violation() {
        let system = ShopSystem::new(&ActorConfig::default());
        let mut reg = registrierung("max@example.com");
        reg.passwort = "kurz".into();
        let err = service(&system).create_kunde(reg).await.unwrap_err();
        assert!(matches!(err, KundeError::Validation(ref v) if v.felder() == vec!["passwort"]));
    }

    #[tokio::test]
    async fn rejected_initial_address_removes_customer() {
        let system = ShopSystem::new(&ActorConfig::default());
        let service = service(&system);
        let mut reg = registrierung("max@example.com");
        reg.adresse = Some(AdresseDaten {
            plz: "falsch".into(),
            ort: "Karlsruhe".into(),
            strasse: "Kaiserstr.".into(),
            hausnr: None,
        });

        let err = service.create_kunde(reg).await.unwrap_err();
        assert!(matches!(err, KundeError::Adresse(_)));
        assert!(service.find_kunden(KundeQuery::Alle).await.unwrap().is_empty());

        // The email is free again.
        assert!(service.create_kunde(registrierung("max@example.com")).await.is_ok());
    }

    #[tokio::test]
    async fn address_for_unknown_customer_is_not_found() {
        let system = ShopSystem::new(&ActorConfig::default());
        let daten = AdresseDaten {
            plz: "76133".into(),
            ort: "Karlsruhe".into(),
            strasse: "Kaiserstr.".into(),
            hausnr: None,
        };
        let err = service(&system)
            .create_adresse(KundeId(99), daten)
            .await
            .unwrap_err();
        assert_eq!(err, KundeError::NotFound("kunde_99".into()));
    }

    #[tokio::test]
    async fn changed_password_replaces_hash() {
        let system = ShopSystem::new(&ActorConfig::default());
        let service = service(&system);
        let kunde = service.create_kunde(registrierung("max@example.com")).await.unwrap();

        let geaendert = service
            .change_password(kunde.id, "neues-passwort".into())
            .await
            .unwrap();
        assert!(bcrypt::verify("neues-passwort", &geaendert.passwort_hash).unwrap());
        assert_eq!(geaendert.audit.version, kunde.audit.version + 1);
    }
}
