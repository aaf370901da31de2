use crate::config::SeedConfig;
use crate::kunde_actor::KundeError;
use crate::model::{KundeQuery, Rolle};
use crate::service::{KundeService, Registrierung};
use std::collections::BTreeSet;
use tracing::info;

/// Creates the configured admin account unless a customer with that email exists.
///
/// Returns `true` if an account was created.
pub async fn seed_admin(service: &KundeService, seed: &SeedConfig) -> Result<bool, KundeError> {
    if !service
        .find_kunden(KundeQuery::Email(seed.email.clone()))
        .await?
        .is_empty()
    {
        info!(email = %seed.email, "Admin account already present");
        return Ok(false);
    }

    let admin = service
        .create_kunde_mit_rollen(
            Registrierung {
                nachname: seed.nachname.clone(),
                vorname: String::new(),
                email: seed.email.clone(),
                newsletter: false,
                seit: None,
                passwort: seed.passwort.clone(),
                adresse: None,
            },
            BTreeSet::from([Rolle::Admin, Rolle::Mitarbeiter]),
        )
        .await?;
    info!(kunde = %admin.id, "Admin account created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActorConfig;
    use crate::lifecycle::ShopSystem;

    #[tokio::test]
    async fn seeds_once() {
        let system = ShopSystem::new(&ActorConfig::default());
        let service = KundeService::new(
            system.kunde_client.clone(),
            system.adresse_client.clone(),
            system.bestellung_client.clone(),
            4,
        );
        let seed = SeedConfig {
            email: "admin@example.com".into(),
            passwort: "admin-passwort".into(),
            nachname: "Admin".into(),
        };

        assert!(seed_admin(&service, &seed).await.unwrap());
        assert!(!seed_admin(&service, &seed).await.unwrap());

        let admins = service
            .find_kunden(KundeQuery::Email("admin@example.com".into()))
            .await
            .unwrap();
        assert_eq!(admins.len(), 1);
        assert!(admins[0].hat_rolle(Rolle::Admin));
    }
}
