//! Represents a registered customer.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Kunde`](#impl-ActorEntity-for-Kunde) for details on:
//! - Creation parameters ([`KundeCreate`])
//! - Update parameters ([`KundeUpdate`])
//! - Custom actions ([`KundeAction`])

use crate::model::{ist_email, ist_nachname, Audit, Violations};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

entity_id!(
    /// Type-safe identifier for customers.
    KundeId,
    "kunde"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rolle {
    Admin,
    Mitarbeiter,
    Kunde,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kunde {
    pub id: KundeId,
    pub nachname: String,
    pub vorname: String,
    pub email: String,
    pub newsletter: bool,
    pub seit: NaiveDate,
    pub rollen: BTreeSet<Rolle>,
    #[serde(skip_serializing)]
    pub passwort_hash: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Kunde {
    pub fn new(id: KundeId, params: KundeCreate) -> Self {
        Self {
            id,
            nachname: params.nachname,
            vorname: params.vorname,
            email: params.email,
            newsletter: params.newsletter,
            seit: params.seit.unwrap_or_else(|| Utc::now().date_naive()),
            rollen: params.rollen,
            passwort_hash: params.passwort_hash,
            audit: Audit::neu(),
        }
    }

    pub fn hat_rolle(&self, rolle: Rolle) -> bool {
        self.rollen.contains(&rolle)
    }

    /// Admin or Mitarbeiter.
    pub fn ist_personal(&self) -> bool {
        self.hat_rolle(Rolle::Admin) || self.hat_rolle(Rolle::Mitarbeiter)
    }

    pub fn pruefe(&self) -> Result<(), Violations> {
        let mut v = Violations::new();
        v.pruefe(
            ist_nachname(&self.nachname),
            "nachname",
            "must be 2 to 32 characters and start with an uppercase letter",
        )
        .pruefe(
            self.vorname.chars().count() <= 32,
            "vorname",
            "must be at most 32 characters",
        )
        .pruefe(ist_email(&self.email), "email", "must be a valid email address")
        .pruefe(
            self.seit <= Utc::now().date_naive(),
            "seit",
            "must not be in the future",
        );
        v.into_result()
    }
}

/// Payload for creating a new customer. The password arrives already hashed.
#[derive(Clone)]
pub struct KundeCreate {
    pub nachname: String,
    pub vorname: String,
    pub email: String,
    pub newsletter: bool,
    pub seit: Option<NaiveDate>,
    pub rollen: BTreeSet<Rolle>,
    pub passwort_hash: String,
}

impl fmt::Debug for KundeCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KundeCreate")
            .field("nachname", &self.nachname)
            .field("vorname", &self.vorname)
            .field("email", &self.email)
            .field("newsletter", &self.newsletter)
            .field("seit", &self.seit)
            .field("rollen", &self.rollen)
            .finish_non_exhaustive()
    }
}

/// Payload for updating an existing customer; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KundeUpdate {
    pub nachname: Option<String>,
    pub vorname: Option<String>,
    pub email: Option<String>,
    pub newsletter: Option<bool>,
}

#[derive(Clone)]
pub enum KundeAction {
    PasswortAendern(String),
    RolleHinzufuegen(Rolle),
    RolleEntfernen(Rolle),
}

impl fmt::Debug for KundeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PasswortAendern(_) => f.write_str("PasswortAendern(..)"),
            Self::RolleHinzufuegen(r) => f.debug_tuple("RolleHinzufuegen").field(r).finish(),
            Self::RolleEntfernen(r) => f.debug_tuple("RolleEntfernen").field(r).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum KundeQuery {
    Alle,
    /// Case-insensitive prefix of the last name.
    Nachname(String),
    /// Case-insensitive exact email.
    Email(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(nachname: &str, email: &str) -> KundeCreate {
        KundeCreate {
            nachname: nachname.to_string(),
            vorname: "Test".to_string(),
            email: email.to_string(),
            newsletter: false,
            seit: None,
            rollen: BTreeSet::from([Rolle::Kunde]),
            passwort_hash: "hash".to_string(),
        }
    }

    #[test]
    fn valid_kunde_passes() {
        let kunde = Kunde::new(KundeId(1), create("Meier", "meier@example.com"));
        assert!(kunde.pruefe().is_ok());
        assert_eq!(kunde.audit.version, 0);
    }

    #[test]
    fn reports_every_broken_field() {
        let kunde = Kunde::new(KundeId(1), create("m", "kaputt"));
        let violations = kunde.pruefe().unwrap_err();
        assert_eq!(violations.felder(), vec!["nachname", "email"]);
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let kunde = Kunde::new(KundeId(1), create("Meier", "meier@example.com"));
        let json = serde_json::to_value(&kunde).unwrap();
        assert!(json.get("passwort_hash").is_none());
        assert_eq!(json["version"], 0);
        assert_eq!(json["rollen"], serde_json::json!(["kunde"]));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let params = create("Meier", "meier@example.com");
        assert!(!format!("{params:?}").contains("hash"));
        assert_eq!(
            format!("{:?}", KundeAction::PasswortAendern("geheim".into())),
            "PasswortAendern(..)"
        );
    }
}
