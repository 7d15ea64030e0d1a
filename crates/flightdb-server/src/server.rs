//! Router construction and the serve loop.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use flightdb::FlightStore;

use crate::handlers;

/// Application state shared across handlers.
#[derive(Debug)]
pub struct AppState {
    /// The flight network store every handler reads or mutates.
    pub store: FlightStore,
}

/// Build the API router over the given state.
///
/// Static-file serving and middleware are added by [`run`]; tests drive this
/// router directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/airline", get(handlers::airline_by_code))
        .route("/airport", get(handlers::airport_by_code))
        .route("/airline-routes", get(handlers::airline_routes))
        .route("/airport-routes", get(handlers::airport_routes))
        .route("/airlines-by-code", get(handlers::airlines_by_code))
        .route("/airports-by-code", get(handlers::airports_by_code))
        .route("/one-hop", get(handlers::one_hop))
        .route("/airline-add", post(handlers::add_airline))
        .route("/airline-update", post(handlers::update_airline))
        .route("/airport-add", post(handlers::add_airport))
        .route("/airport-update", post(handlers::update_airport))
        .route("/route-add", post(handlers::add_route))
        .with_state(state)
}

/// Serve the API and the static frontend until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// loop fails.
pub async fn run(store: FlightStore, host: &str, port: u16, static_dir: &Path) -> Result<()> {
    let state = Arc::new(AppState { store });

    let app = router(state)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("{host}:{port}");
    info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
