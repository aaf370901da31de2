//! Catalog endpoints. Reading is public, writing needs staff.

use super::auth::Angemeldet;
use super::error::ApiError;
use super::links::{ProduktModel, ProduktdatenModel};
use super::{created, Created, Versioniert};
use super::AppState;
use crate::model::{
    ProduktCreate, ProduktId, ProduktQuery, ProduktUpdate, ProduktdatenDaten, ProduktdatenId,
    ProduktdatenUpdate,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProduktFilter {
    pub bezeichnung: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProduktFilter>,
) -> Result<Json<Vec<ProduktModel>>, ApiError> {
    let query = filter
        .bezeichnung
        .map_or(ProduktQuery::Alle, ProduktQuery::Bezeichnung);
    let produkte = state.produkte.find_produkte(query).await?;
    Ok(Json(
        produkte
            .into_iter()
            .map(|p| state.links.produkt_model(p))
            .collect(),
    ))
}

pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<ProduktId>,
) -> Result<Json<ProduktModel>, ApiError> {
    let produkt = state.produkte.find_produkt(id).await?;
    Ok(Json(state.links.produkt_model(produkt)))
}

pub async fn create(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Json(params): Json<ProduktCreate>,
) -> Result<Created<ProduktModel>, ApiError> {
    angemeldet.nur_personal()?;
    let produkt = state.produkte.create_produkt(params).await?;
    let model = state.links.produkt_model(produkt);
    Ok(created(model.uri.clone(), model))
}

pub async fn update(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<ProduktId>,
    Json(body): Json<Versioniert<ProduktUpdate>>,
) -> Result<Json<ProduktModel>, ApiError> {
    angemeldet.nur_personal()?;
    let produkt = state
        .produkte
        .update_produkt(id, body.daten, body.version)
        .await?;
    Ok(Json(state.links.produkt_model(produkt)))
}

pub async fn remove(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<ProduktId>,
) -> Result<StatusCode, ApiError> {
    angemeldet.nur_admin()?;
    state.produkte.delete_produkt(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Variants ---

pub async fn produktdaten(
    State(state): State<AppState>,
    Path(id): Path<ProduktId>,
) -> Result<Json<Vec<ProduktdatenModel>>, ApiError> {
    let varianten = state.produkte.produktdaten(id).await?;
    Ok(Json(
        varianten
            .into_iter()
            .map(|v| state.links.produktdaten_model(v))
            .collect(),
    ))
}

/// Variants with stock left, across all products.
pub async fn verfuegbar(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProduktdatenModel>>, ApiError> {
    let varianten = state.produkte.verfuegbare_produktdaten().await?;
    Ok(Json(
        varianten
            .into_iter()
            .map(|v| state.links.produktdaten_model(v))
            .collect(),
    ))
}

pub async fn create_produktdaten(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<ProduktId>,
    Json(daten): Json<ProduktdatenDaten>,
) -> Result<Created<ProduktdatenModel>, ApiError> {
    angemeldet.nur_personal()?;
    let variante = state.produkte.create_produktdaten(id, daten).await?;
    let model = state.links.produktdaten_model(variante);
    Ok(created(model.uri.clone(), model))
}

pub async fn find_produktdaten(
    State(state): State<AppState>,
    Path(id): Path<ProduktdatenId>,
) -> Result<Json<ProduktdatenModel>, ApiError> {
    let variante = state.produkte.find_produktdaten(id).await?;
    Ok(Json(state.links.produktdaten_model(variante)))
}

pub async fn update_produktdaten(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<ProduktdatenId>,
    Json(body): Json<Versioniert<ProduktdatenUpdate>>,
) -> Result<Json<ProduktdatenModel>, ApiError> {
    angemeldet.nur_personal()?;
    let variante = state
        .produkte
        .update_produktdaten(id, body.daten, body.version)
        .await?;
    Ok(Json(state.links.produktdaten_model(variante)))
}

pub async fn remove_produktdaten(
    State(state): State<AppState>,
    angemeldet: Angemeldet,
    Path(id): Path<ProduktdatenId>,
) -> Result<StatusCode, ApiError> {
    angemeldet.nur_admin()?;
    state.produkte.delete_produktdaten(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
