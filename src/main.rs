use actor_framework::tracing::setup_tracing;
use std::time::Duration;
use tracing::{error, info, warn};
use webshop::config::AppConfig;
use webshop::lifecycle::{seed_admin, ShopSystem};
use webshop::rest::{router, AppState};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    setup_tracing(&config.logging.filter);

    if config.uses_dev_secret() {
        warn!("Using the built-in JWT secret; set WEBSHOP_AUTH__JWT_SECRET outside development");
    }

    let system = ShopSystem::new(&config.actors);
    let state = AppState::new(&system, &config);

    if let Some(seed) = &config.seed {
        seed_admin(&state.kunden, seed).await?;
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, base_uri = %config.server.base_uri, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, system.shutdown()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Actor shutdown failed"),
        Err(_) => warn!("Actors did not stop within {:?}", SHUTDOWN_TIMEOUT),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
