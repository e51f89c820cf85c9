mod api;
mod config;
mod dto;
mod error;
mod oracle;
mod state;

use crate::{
    config::{Config, OracleBackend},
    oracle::{Backend, CachedOracle, OsrmClient},
    state::AppState,
};
use axum::routing::{get, post};
use std::sync::Arc;
use tracing::{error, info};
use tripwise::oracle::EstimateOracle;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    let backend = match config.oracle {
        OracleBackend::Osrm => match OsrmClient::new(&config.osrm_url, config.oracle_timeout_secs) {
            Ok(client) => {
                info!("Routing with OSRM at {}", config.osrm_url);
                Backend::Osrm(client)
            }
            Err(err) => {
                error!("Failed to build OSRM client: {err}");
                std::process::exit(1);
            }
        },
        OracleBackend::Estimate => {
            info!(
                "Routing with offline estimates at {} km/h",
                config.estimate_speed_kmh
            );
            Backend::Estimate(EstimateOracle::new().with_speed(config.estimate_speed_kmh))
        }
    };
    let oracle = CachedOracle::new(backend, config.cache_capacity);
    let state = Arc::new(
        AppState::new(oracle, config.failure_policy)
            .with_session_capacity(config.session_capacity),
    );

    let app = axum::Router::new()
        .route("/health", get(api::health))
        .route("/validate", post(api::validate))
        .route("/reorder", post(api::reorder))
        .route("/route", get(api::route))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
