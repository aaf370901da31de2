//! Order endpoints.

use super::auth::Angemeldet;
use super::error::ApiError;
use super::links::BestellungModel;
use super::{created, Created};
use super::AppState;
use crate::model::{
    BestellStatus, Bestellung, BestellungCreate, BestellungId, BestellungQuery, KundeId,
    PostenCreate,
};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

/// Order request; `kunde_id` defaults to the caller and only staff may set another one.
#[derive(Debug, Deserialize)]
pub struct Bestellanfrage {
    #[serde(default)]
    pub kunde_id: Option<KundeId>,
    pub posten: Vec<PostenCreate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BestellFilter {
    pub status: Option<BestellStatus>,
}

pub async fn create(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Json(anfrage): Json<Bestellanfrage>,
) -> Result<Created<BestellungModel>, ApiError> {
    let kunde_id = anfrage.kunde_id.unwrap_or(angemeldet.id());
    if kunde_id != angemeldet.id() {
        angemeldet.nur_personal()?;
    }
    let bestellung = state
        .bestellungen
        .create_bestellung(BestellungCreate {
            kunde_id,
            posten: anfrage.posten,
        })
        .await?;
    let model = state.links.bestellung_model(bestellung);
    Ok(created(model.uri.clone(), model))
}

/// All orders, optionally by status. Staff only.
pub async fn list(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Query(filter): Query<BestellFilter>,
) -> Result<Json<Vec<BestellungModel>>, ApiError> {
    angemeldet.nur_personal()?;
    let query = filter
        .status
        .map_or(BestellungQuery::Alle, BestellungQuery::Status);
    let bestellungen = state.bestellungen.find_bestellungen(query).await?;
    Ok(Json(models(&state, bestellungen)))
}

pub async fn by_kunde(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<KundeId>,
) -> Result<Json<Vec<BestellungModel>>, ApiError> {
    angemeldet.darf_lesen(id)?;
    let bestellungen = state.bestellungen.bestellungen(id).await?;
    Ok(Json(models(&state, bestellungen)))
}

pub async fn find(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<BestellungId>,
) -> Result<Json<BestellungModel>, ApiError> {
    let bestellung = state.bestellungen.find_bestellung(id).await?;
    angemeldet.darf_lesen(bestellung.kunde_id)?;
    Ok(Json(state.links.bestellung_model(bestellung)))
}

/// Cancels an open order and puts its stock back.
pub async fn cancel(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<BestellungId>,
) -> Result<Json<BestellungModel>, ApiError> {
    let bestellung = state.bestellungen.find_bestellung(id).await?;
    angemeldet.darf_lesen(bestellung.kunde_id)?;
    let bestellung = state.bestellungen.cancel(id).await?;
    Ok(Json(state.links.bestellung_model(bestellung)))
}

pub async fn ship(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<BestellungId>,
) -> Result<Json<BestellungModel>, ApiError> {
    angemeldet.nur_personal()?;
    let bestellung = state.bestellungen.ship(id).await?;
    Ok(Json(state.links.bestellung_model(bestellung)))
}

fn models(state: &AppState, bestellungen: Vec<Bestellung>) -> Vec<BestellungModel> {
    bestellungen
        .into_iter()
        .map(|b| state.links.bestellung_model(b))
        .collect()
}
