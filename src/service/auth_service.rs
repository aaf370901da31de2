//! Login and bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the customer id in `sub`. The roles in the token are
//! informational only: [`AuthService::authenticate`] reloads the customer, so a revoked
//! role or a deleted account takes effect immediately.

use crate::clients::KundeClient;
use crate::config::AuthConfig;
use crate::model::{Kunde, KundeId, Rolle};
use actor_framework::ActorClient;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JWT claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u32,
    pub email: String,
    pub rollen: Vec<Rolle>,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Clone)]
pub struct AuthService {
    kunden: KundeClient,
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl AuthService {
    pub fn new(kunden: KundeClient, config: &AuthConfig) -> Self {
        Self {
            kunden,
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_secs: config.token_ttl_secs,
        }
    }

    /// Checks email and password and issues a token.
    #[instrument(skip(self, passwort))]
    pub async fn login(&self, email: &str, passwort: &str) -> Result<(String, Kunde), AuthError> {
        let kunde = self
            .kunden
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = kunde.passwort_hash.clone();
        let passwort = passwort.to_string();
        let ok = tokio::task::spawn_blocking(move || bcrypt::verify(passwort, &hash))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .unwrap_or(false);
        if !ok {
            debug!(kunde = %kunde.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue(&kunde)?;
        info!(kunde = %kunde.id, "Logged in");
        Ok((token, kunde))
    }

    pub fn issue(&self, kunde: &Kunde) -> Result<String, AuthError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: kunde.id.0,
            email: kunde.email.clone(),
            rollen: kunde.rollen.iter().copied().collect(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Checks signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// Verifies the token and loads the customer it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<Kunde, AuthError> {
        let claims = self.verify(token)?;
        self.kunden
            .get(KundeId(claims.sub))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| AuthError::InvalidToken("account no longer exists".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActorConfig;
    use crate::lifecycle::ShopSystem;
    use crate::service::{KundeService, Registrierung};

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            token_ttl_secs: 60,
            bcrypt_cost: 4,
        }
    }

    async fn registriere(system: &ShopSystem) -> Kunde {
        KundeService::new(
            system.kunde_client.clone(),
            system.adresse_client.clone(),
            system.bestellung_client.clone(),
            4,
        )
        .create_kunde(Registrierung {
            nachname: "Mustermann".into(),
            vorname: "Max".into(),
            email: "Max@Example.com".into(),
            newsletter: false,
            seit: None,
            passwort: "geheim123".into(),
            adresse: None,
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let system = ShopSystem::new(&ActorConfig::default());
        let kunde = registriere(&system).await;
        let auth = AuthService::new(system.kunde_client.clone(), &config());

        let (token, eingeloggt) = auth.login("max@example.com", "geheim123").await.unwrap();
        assert_eq!(eingeloggt.id, kunde.id);

        let claims = auth.verify(&token).unwrap();
        assert_eq!(claims.sub, kunde.id.0);
        assert_eq!(claims.rollen, vec![Rolle::Kunde]);
        assert_eq!(claims.exp - claims.iat, 60);
        assert_eq!(auth.authenticate(&token).await.unwrap().id, kunde.id);
    }

    #[tokio::test]
    async fn huge_ttl_saturates_instead_of_overflowing() {
        let system = ShopSystem::new(&ActorConfig::default());
        let kunde = registriere(&system).await;
        let mut ewig = config();
        ewig.token_ttl_secs = u64::MAX;
        let auth = AuthService::new(system.kunde_client.clone(), &ewig);

        let token = auth.issue(&kunde).unwrap();
        assert_eq!(auth.verify(&token).unwrap().exp, u64::MAX);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let system = ShopSystem::new(&ActorConfig::default());
        registriere(&system).await;
        let auth = AuthService::new(system.kunde_client.clone(), &config());

        let falsch = auth.login("max@example.com", "falsch").await.unwrap_err();
        let unbekannt = auth.login("nobody@example.com", "geheim123").await.unwrap_err();
        assert_eq!(falsch, AuthError::InvalidCredentials);
        assert_eq!(falsch, unbekannt);
    }

    #[tokio::test]
    async fn rejects_foreign_and_expired_tokens() {
        let system = ShopSystem::new(&ActorConfig::default());
        let kunde = registriere(&system).await;
        let auth = AuthService::new(system.kunde_client.clone(), &config());

        let mut anderer = config();
        anderer.jwt_secret = "other-secret".into();
        let fremd = AuthService::new(system.kunde_client.clone(), &anderer)
            .issue(&kunde)
            .unwrap();
        assert!(matches!(auth.verify(&fremd), Err(AuthError::InvalidToken(_))));

        let now = Utc::now().timestamp() as u64;
        let abgelaufen = encode(
            &Header::default(),
            &Claims {
                sub: kunde.id.0,
                email: kunde.email.clone(),
                rollen: vec![],
                iat: now - 7200,
                exp: now - 3600,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(matches!(auth.verify(&abgelaufen), Err(AuthError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn token_of_deleted_customer_is_rejected() {
        let system = ShopSystem::new(&ActorConfig::default());
        let kunde = registriere(&system).await;
        let auth = AuthService::new(system.kunde_client.clone(), &config());
        let token = auth.issue(&kunde).unwrap();

        system.kunde_client.delete(kunde.id).await.unwrap();

        assert!(matches!(
            auth.authenticate(&token).await,
            Err(AuthError::InvalidToken(_))
        ));
    }
}
