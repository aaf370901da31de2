//! # Kunde Actor
//!
//! Owns all registered customers.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Kunde`]
//! - [`error`] - [`KundeError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with an [`AdresseClient`](crate::clients::AdresseClient) as context:
//!
//! ```rust,ignore
//! let (kunde_actor, kunde_client) = kunde_actor::new(32);
//! tokio::spawn(kunde_actor.run(adresse_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::KundeClient;
use crate::model::Kunde;
use actor_framework::ResourceActor;

/// Creates a new Kunde actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Kunde>, KundeClient) {
    let (actor, inner) = ResourceActor::new(buffer_size);
    (actor, KundeClient::new(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adresse_actor;
    use crate::clients::AdresseClient;
    use crate::model::{
        AdresseDaten, AdresseQuery, KundeCreate, KundeQuery, KundeUpdate, Rolle,
    };
    use actor_framework::ActorClient;
    use std::collections::BTreeSet;

    fn spawn() -> (KundeClient, AdresseClient) {
        let (adresse_actor, adresse_client) = adresse_actor::new(8);
        let (kunde_actor, kunde_client) = new(8);
        tokio::spawn(adresse_actor.run(()));
        tokio::spawn(kunde_actor.run(adresse_client.clone()));
        (kunde_client, adresse_client)
    }

    fn kunde(nachname: &str, email: &str) -> KundeCreate {
        KundeCreate {
            nachname: nachname.to_string(),
            vorname: "Erika".to_string(),
            email: email.to_string(),
            newsletter: true,
            seit: None,
            rollen: BTreeSet::from([Rolle::Kunde]),
            passwort_hash: "$2b$04$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn email_is_unique_ignoring_case() {
        let (kunden, _) = spawn();
        kunden.create_kunde(kunde("Mustermann", "erika@example.com")).await.unwrap();

        let err = kunden
            .create_kunde(kunde("Musterfrau", "Erika@Example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, KundeError::EmailExists("erika@example.com".into()));
    }

    #[tokio::test]
    async fn finds_by_name_prefix_and_email() {
        let (kunden, _) = spawn();
        kunden.create_kunde(kunde("Mustermann", "a@example.com")).await.unwrap();
        kunden.create_kunde(kunde("Meier", "b@example.com")).await.unwrap();
        kunden.create_kunde(kunde("Musterfrau", "c@example.com")).await.unwrap();

        let muster = kunden.find(KundeQuery::Nachname("muster".into())).await.unwrap();
        assert_eq!(muster.len(), 2);

        let b = kunden.find(KundeQuery::Email("B@EXAMPLE.COM".into())).await.unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].nachname, "Meier");

        kunden.create_kunde(kunde("Jürgens", "JÜRGEN@example.com")).await.unwrap();
        let juergen = kunden.find(KundeQuery::Email("jürgen@example.com".into())).await.unwrap();
        assert_eq!(juergen.len(), 1);
        assert_eq!(juergen[0].nachname, "Jürgens");
        let err = kunden.create_kunde(kunde("Jürgens", "jürgen@example.com")).await.unwrap_err();
        assert!(matches!(err, KundeError::EmailExists(_)));
    }

    #[tokio::test]
    async fn versioned_update_detects_stale_writers() {
        let (kunden, _) = spawn();
        let id = kunden.create_kunde(kunde("Mustermann", "a@example.com")).await.unwrap();

        let update = KundeUpdate {
            vorname: Some("Max".into()),
            ..Default::default()
        };
        let updated = kunden.update_kunde(id, update.clone(), Some(0)).await.unwrap();
        assert_eq!(updated.audit.version, 1);

        let err = kunden.update_kunde(id, update, Some(0)).await.unwrap_err();
        assert!(matches!(err, KundeError::VersionConflict { actual: 1, .. }));
    }

    #[tokio::test]
    async fn invalid_update_reports_violations() {
        let (kunden, _) = spawn();
        let id = kunden.create_kunde(kunde("Mustermann", "a@example.com")).await.unwrap();
        let update = KundeUpdate {
            nachname: Some("x".into()),
            ..Default::default()
        };
        let err = kunden.update_kunde(id, update, None).await.unwrap_err();
        assert!(matches!(err, KundeError::Validation(ref v) if v.felder() == vec!["nachname"]));
        assert_eq!(kunden.get(id).await.unwrap().unwrap().nachname, "Mustermann");
    }

    #[tokio::test]
    async fn roles_can_be_granted_and_revoked() {
        let (kunden, _) = spawn();
        let id = kunden.create_kunde(kunde("Mustermann", "a@example.com")).await.unwrap();

        let k = kunden.add_rolle(id, Rolle::Mitarbeiter).await.unwrap();
        assert!(k.ist_personal());
        let k = kunden.remove_rolle(id, Rolle::Mitarbeiter).await.unwrap();
        assert!(!k.ist_personal());
        assert_eq!(k.audit.version, 2);
    }

    #[tokio::test]
    async fn delete_cascades_to_addresses() {
        let (kunden, adressen) = spawn();
        let id = kunden.create_kunde(kunde("Mustermann", "a@example.com")).await.unwrap();
        let other = kunden.create_kunde(kunde("Meier", "b@example.com")).await.unwrap();
        let daten = AdresseDaten {
            plz: "76133".into(),
            ort: "Karlsruhe".into(),
            strasse: "Kaiserstr.".into(),
            hausnr: None,
        };
        adressen.create_adresse(daten.clone().fuer(id)).await.unwrap();
        adressen.create_adresse(daten.clone().fuer(id)).await.unwrap();
        adressen.create_adresse(daten.fuer(other)).await.unwrap();

        kunden.delete(id).await.unwrap();

        assert!(kunden.get(id).await.unwrap().is_none());
        assert!(adressen.find(AdresseQuery::Kunde(id)).await.unwrap().is_empty());
        assert_eq!(adressen.find(AdresseQuery::Alle).await.unwrap().len(), 1);
    }
}
