//! HTTP error mapping.

use crate::adresse_actor::AdresseError;
use crate::bestellung_actor::BestellungError;
use crate::kunde_actor::KundeError;
use crate::model::Violations;
use crate::produkt_actor::ProduktError;
use crate::produktdaten_actor::ProduktdatenError;
use crate::service::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every failure a handler can return.
///
/// The body is `{"error": <message>, "status": <code>}`, plus `violations` for
/// validation errors. Internal details are logged, never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(Violations),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("access denied")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    /// Duplicate email, stale version, illegal order state, pending orders, stock.
    #[error("{0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Validation(violations) => json!({
                "error": "validation failed",
                "status": status.as_u16(),
                "violations": violations,
            }),
            Self::Internal(detail) => {
                error!(%detail, "Request failed");
                json!({ "error": "internal server error", "status": status.as_u16() })
            }
            other => json!({ "error": other.to_string(), "status": status.as_u16() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<AdresseError> for ApiError {
    fn from(e: AdresseError) -> Self {
        match e {
            AdresseError::Validation(v) => Self::Validation(v),
            AdresseError::NotFound(_) => Self::NotFound(e.to_string()),
            AdresseError::VersionConflict { .. } => Self::Conflict(e.to_string()),
            AdresseError::ActorCommunicationError(_) => Self::Internal(e.to_string()),
        }
    }
}

impl From<KundeError> for ApiError {
    fn from(e: KundeError) -> Self {
        match e {
            KundeError::Validation(v) => Self::Validation(v),
            KundeError::NotFound(_) => Self::NotFound(e.to_string()),
            KundeError::EmailExists(_)
            | KundeError::VersionConflict { .. }
            | KundeError::HasOrders(_) => Self::Conflict(e.to_string()),
            KundeError::Adresse(inner) => inner.into(),
            KundeError::Internal(_) | KundeError::ActorCommunicationError(_) => {
                Self::Internal(e.to_string())
            }
        }
    }
}

impl From<ProduktdatenError> for ApiError {
    fn from(e: ProduktdatenError) -> Self {
        match e {
            ProduktdatenError::Validation(v) => Self::Validation(v),
            ProduktdatenError::NotFound(_) => Self::NotFound(e.to_string()),
            ProduktdatenError::VersionConflict { .. }
            | ProduktdatenError::InsufficientStock { .. } => Self::Conflict(e.to_string()),
            ProduktdatenError::InvalidQuantity(_) => Self::BadRequest(e.to_string()),
            ProduktdatenError::ActorCommunicationError(_) => Self::Internal(e.to_string()),
        }
    }
}

impl From<ProduktError> for ApiError {
    fn from(e: ProduktError) -> Self {
        match e {
            ProduktError::Validation(v) => Self::Validation(v),
            ProduktError::NotFound(_) => Self::NotFound(e.to_string()),
            ProduktError::VersionConflict { .. } => Self::Conflict(e.to_string()),
            ProduktError::Produktdaten(inner) => inner.into(),
            ProduktError::ActorCommunicationError(_) => Self::Internal(e.to_string()),
        }
    }
}

impl From<BestellungError> for ApiError {
    fn from(e: BestellungError) -> Self {
        match e {
            BestellungError::Validation(v) => Self::Validation(v),
            BestellungError::NotFound(_) | BestellungError::KundeNotFound(_) => {
                Self::NotFound(e.to_string())
            }
            BestellungError::IllegalState { .. } | BestellungError::VersionConflict { .. } => {
                Self::Conflict(e.to_string())
            }
            BestellungError::Overflow => Self::BadRequest(e.to_string()),
            BestellungError::Kunde(inner) => inner.into(),
            BestellungError::Produktdaten(inner) => inner.into(),
            BestellungError::ActorCommunicationError(_) => Self::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials | AuthError::InvalidToken(_) => {
                Self::Unauthorized(e.to_string())
            }
            AuthError::Internal(_) => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BestellStatus;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (KundeError::EmailExists("a@b.de".into()).into(), StatusCode::CONFLICT),
            (KundeError::HasOrders("kunde_1".into()).into(), StatusCode::CONFLICT),
            (
                KundeError::Adresse(AdresseError::NotFound("adresse_1".into())).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                BestellungError::IllegalState {
                    id: "bestellung_1".into(),
                    status: BestellStatus::Versendet,
                }
                .into(),
                StatusCode::CONFLICT,
            ),
            (
                BestellungError::Produktdaten(ProduktdatenError::InsufficientStock {
                    id: "produktdaten_1".into(),
                    requested: 3,
                    available: 1,
                })
                .into(),
                StatusCode::CONFLICT,
            ),
            (AuthError::InvalidCredentials.into(), StatusCode::UNAUTHORIZED),
            (
                ProduktError::ActorCommunicationError("closed".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{error:?}");
        }
    }

    #[tokio::test]
    async fn validation_body_lists_violations() {
        let mut v = Violations::new();
        v.pruefe(false, "email", "must be a valid email address");
        let response = ApiError::Validation(v).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["violations"][0]["feld"], "email");
    }

    #[tokio::test]
    async fn internal_details_are_not_exposed() {
        let response = ApiError::Internal("channel closed".into()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "internal server error");
    }
}
