mod api;
mod config;
mod dto;
mod provider;
mod state;

use crate::{config::Config, provider::AirportGapClient, state::AppState};
use airdist::airports::AirportDirectory;
use axum::routing::get;
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting server...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    info!("Loading airports from {}...", config.airports_path.display());
    let now = Instant::now();
    let directory = match AirportDirectory::from_path(&config.airports_path) {
        Ok(directory) => directory,
        Err(err) => {
            error!("Failed to load airport list: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loading {} airports took {:?}",
        directory.len(),
        now.elapsed()
    );

    if config.airportgap_token.is_none() {
        warn!("AIRPORTGAP_TOKEN is not set, lookups will be rate limited");
    }
    let provider = match AirportGapClient::new(
        &config.airportgap_url,
        config.airportgap_token.as_deref(),
    ) {
        Ok(provider) => provider,
        Err(err) => {
            error!("Failed to build Airport Gap client: {err}");
            std::process::exit(1);
        }
    };
    let state = Arc::new(AppState::new(directory, provider));

    let app = axum::Router::new()
        .route("/search", get(api::search))
        .route("/airports/{code}", get(api::airport))
        .route("/distance", get(api::distance))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
