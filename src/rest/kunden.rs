//! Customer and address endpoints.

use super::auth::Angemeldet;
use super::error::ApiError;
use super::links::{AdresseModel, KundeModel};
use super::{created, Created, Versioniert};
use super::AppState;
use crate::model::{
    AdresseDaten, AdresseId, AdresseUpdate, KundeId, KundeQuery, KundeUpdate, Rolle,
};
use crate::service::Registrierung;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct KundenFilter {
    pub nachname: Option<String>,
    pub email: Option<String>,
}

/// At most one of `email` and `nachname`.
impl TryFrom<KundenFilter> for KundeQuery {
    type Error = ApiError;

    fn try_from(filter: KundenFilter) -> Result<Self, Self::Error> {
        match (filter.email, filter.nachname) {
            (Some(_), Some(_)) => Err(ApiError::BadRequest(
                "filter by either email or nachname, not both".into(),
            )),
            (Some(email), None) => Ok(KundeQuery::Email(email)),
            (None, Some(nachname)) => Ok(KundeQuery::Nachname(nachname)),
            (None, None) => Ok(KundeQuery::Alle),
        }
    }
}

/// Self-registration; always yields the `Kunde` role.
pub async fn create(
    State(state): State<AppState>,
    Json(registrierung): Json<Registrierung>,
) -> Result<Created<KundeModel>, ApiError> {
    let kunde = state.kunden.create_kunde(registrierung).await?;
    let model = state.links.kunde_model(kunde);
    Ok(created(model.uri.clone(), model))
}

pub async fn list(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Query(filter): Query<KundenFilter>,
) -> Result<Json<Vec<KundeModel>>, ApiError> {
    angemeldet.nur_personal()?;
    let kunden = state.kunden.find_kunden(filter.try_into()?).await?;
    Ok(Json(
        kunden
            .into_iter()
            .map(|k| state.links.kunde_model(k))
            .collect(),
    ))
}

pub async fn find(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
) -> Result<Json<KundeModel>, ApiError> {
    angemeldet.darf_lesen(id)?;
    let kunde = state.kunden.find_kunde(id).await?;
    Ok(Json(state.links.kunde_model(kunde)))
}

pub async fn update(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
    Json(body): Json<Versioniert<KundeUpdate>>,
) -> Result<Json<KundeModel>, ApiError> {
    angemeldet.darf_aendern(id)?;
    let kunde = state.kunden.update_kunde(id, body.daten, body.version).await?;
    Ok(Json(state.links.kunde_model(kunde)))
}

pub async fn remove(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
) -> Result<StatusCode, ApiError> {
    angemeldet.nur_admin()?;
    state.kunden.delete_kunde(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct NeuesPasswort {
    pub passwort: String,
}

pub async fn change_password(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
    Json(body): Json<NeuesPasswort>,
) -> Result<StatusCode, ApiError> {
    angemeldet.darf_aendern(id)?;
    state.kunden.change_password(id, body.passwort).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_rolle(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path((id, rolle)): Path<(KundeId, Rolle)>,
) -> Result<Json<KundeModel>, ApiError> {
    angemeldet.nur_admin()?;
    let kunde = state.kunden.add_rolle(id, rolle).await?;
    Ok(Json(state.links.kunde_model(kunde)))
}

pub async fn remove_rolle(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path((id, rolle)): Path<(KundeId, Rolle)>,
) -> Result<Json<KundeModel>, ApiError> {
    angemeldet.nur_admin()?;
    if id == angemeldet.id() && rolle == Rolle::Admin {
        return Err(ApiError::Conflict("admins can't revoke their own admin role".into()));
    }
    let kunde = state.kunden.remove_rolle(id, rolle).await?;
    Ok(Json(state.links.kunde_model(kunde)))
}

// --- Addresses ---

pub async fn adressen(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
) -> Result<Json<Vec<AdresseModel>>, ApiError> {
    angemeldet.darf_lesen(id)?;
    let adressen = state.kunden.adressen(id).await?;
    Ok(Json(
        adressen
            .into_iter()
            .map(|a| state.links.adresse_model(a))
            .collect(),
    ))
}

pub async fn create_adresse(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
    Json(daten): Json<AdresseDaten>,
) -> Result<Created<AdresseModel>, ApiError> {
    angemeldet.darf_lesen(id)?;
    let adresse = state.kunden.create_adresse(id, daten).await?;
    let model = state.links.adresse_model(adresse);
    Ok(created(model.uri.clone(), model))
}

pub async fn update_adresse(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<AdresseId>,
    Json(body): Json<Versioniert<AdresseUpdate>>,
) -> Result<Json<AdresseModel>, ApiError> {
    let adresse = state.kunden.find_adresse(id).await?;
    angemeldet.darf_aendern(adresse.kunde_id)?;
    let adresse = state
        .kunden
        .update_adresse(id, body.daten, body.version)
        .await?;
    Ok(Json(state.links.adresse_model(adresse)))
}

pub async fn remove_adresse(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<AdresseId>,
) -> Result<StatusCode, ApiError> {
    let adresse = state.kunden.find_adresse(id).await?;
    angemeldet.darf_aendern(adresse.kunde_id)?;
    state.kunden.delete_adresse(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
