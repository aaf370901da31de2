//! # REST API
//!
//! JSON over HTTP on top of the [service layer](crate::service), built with axum.
//!
//! | Area | Module |
//! |---|---|
//! | login, bearer extractor, role checks | [`auth`] |
//! | `/kunden`, `/adressen` | [`kunden`] |
//! | `/produkte`, `/produktdaten` | [`produkte`] |
//! | `/bestellungen` | [`bestellungen`] |
//! | status codes and error bodies | [`error`] |
//! | `uri` fields in responses | [`links`] |
//!
//! Updates are optimistic: every `PUT` body carries the `version` the client last read,
//! and a stale version answers 409.

pub mod auth;
pub mod bestellungen;
pub mod error;
pub mod kunden;
pub mod links;
pub mod produkte;

pub use error::ApiError;
pub use links::Links;

use crate::config::AppConfig;
use crate::lifecycle::ShopSystem;
use crate::service::{AuthService, BestellungService, KundeService, ProduktService};
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub kunden: KundeService,
    pub produkte: ProduktService,
    pub bestellungen: BestellungService,
    pub auth: AuthService,
    pub links: Links,
}

impl AppState {
    pub fn new(system: &ShopSystem, config: &AppConfig) -> Self {
        Self {
            kunden: KundeService::new(
                system.kunde_client.clone(),
                system.adresse_client.clone(),
                system.bestellung_client.clone(),
                config.auth.bcrypt_cost,
            ),
            produkte: ProduktService::new(
                system.produkt_client.clone(),
                system.produktdaten_client.clone(),
            ),
            bestellungen: BestellungService::new(
                system.bestellung_client.clone(),
                system.kunde_client.clone(),
            ),
            auth: AuthService::new(system.kunde_client.clone(), &config.auth),
            links: Links::new(config.server.base_uri.clone()),
        }
    }
}

/// `PUT` body: the changed fields plus the version they were based on.
#[derive(Debug, Deserialize)]
pub struct Versioniert<T> {
    pub version: u32,
    #[serde(flatten)]
    pub daten: T,
}

/// 201 with a `Location` header.
pub type Created<T> = (StatusCode, [(HeaderName, String); 1], Json<T>);

pub fn created<T>(uri: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(LOCATION, uri)], Json(body))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/kunden", get(kunden::list).post(kunden::create))
        .route(
            "/kunden/{id}",
            get(kunden::find).put(kunden::update).delete(kunden::remove),
        )
        .route("/kunden/{id}/passwort", put(kunden::change_password))
        .route(
            "/kunden/{id}/rollen/{rolle}",
            put(kunden::add_rolle).delete(kunden::remove_rolle),
        )
        .route(
            "/kunden/{id}/adressen",
            get(kunden::adressen).post(kunden::create_adresse),
        )
        .route("/kunden/{id}/bestellungen", get(bestellungen::by_kunde))
        .route(
            "/adressen/{id}",
            put(kunden::update_adresse).delete(kunden::remove_adresse),
        )
        .route("/produkte", get(produkte::list).post(produkte::create))
        .route(
            "/produkte/{id}",
            get(produkte::find)
                .put(produkte::update)
                .delete(produkte::remove),
        )
        .route(
            "/produkte/{id}/produktdaten",
            get(produkte::produktdaten).post(produkte::create_produktdaten),
        )
        .route("/produktdaten", get(produkte::verfuegbar))
        .route(
            "/produktdaten/{id}",
            get(produkte::find_produktdaten)
                .put(produkte::update_produktdaten)
                .delete(produkte::remove_produktdaten),
        )
        .route(
            "/bestellungen",
            get(bestellungen::list).post(bestellungen::create),
        )
        .route("/bestellungen/{id}", get(bestellungen::find))
        .route("/bestellungen/{id}/stornierung", post(bestellungen::cancel))
        .route("/bestellungen/{id}/versand", post(bestellungen::ship))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
