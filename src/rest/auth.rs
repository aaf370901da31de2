//! Bearer authentication and the login endpoint.

use super::error::ApiError;
use super::links::KundeModel;
use super::AppState;
use crate::model::{Kunde, KundeId, Rolle};
use axum::extract::{FromRequestParts, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use serde::{Deserialize, Serialize};

/// The authenticated customer, reloaded from the actor on every request.
///
/// Handlers that take this extractor answer 401 without a valid
/// `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct Angemeldet(pub Kunde);

impl FromRequestParts<AppState> for Angemeldet {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?;
        let kunde = state.auth.authenticate(token.trim()).await?;
        Ok(Self(kunde))
    }
}

impl Angemeldet {
    pub fn id(&self) -> KundeId {
        self.0.id
    }

    pub fn ist_personal(&self) -> bool {
        self.0.ist_personal()
    }

    pub fn nur_personal(&self) -> Result<(), ApiError> {
        if self.ist_personal() {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }

    pub fn nur_admin(&self) -> Result<(), ApiError> {
        if self.0.hat_rolle(Rolle::Admin) {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }

    /// The customer themself or staff.
    pub fn darf_lesen(&self, kunde_id: KundeId) -> Result<(), ApiError> {
        if self.id() == kunde_id || self.ist_personal() {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }

    /// The customer themself or an admin.
    pub fn darf_aendern(&self, kunde_id: KundeId) -> Result<(), ApiError> {
        if self.id() == kunde_id {
            Ok(())
        } else {
            self.nur_admin()
        }
    }
}

#[derive(Deserialize)]
pub struct Login {
    pub email: String,
    pub passwort: String,
}

#[derive(Debug, Serialize)]
pub struct Token {
    pub token: String,
    pub kunde: KundeModel,
}

pub async fn login(
    State(state): State<AppState>,
    Json(login): Json<Login>,
) -> Result<Json<Token>, ApiError> {
    let (token, kunde) = state.auth.login(&login.email, &login.passwort).await?;
    Ok(Json(Token {
        token,
        kunde: state.links.kunde_model(kunde),
    }))
}
