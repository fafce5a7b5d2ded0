//! Sympathy API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use sympathy_api::error::AppError;
use sympathy_api::routes;
use sympathy_api::state::AppState;
use sympathy_core::clock::SystemClock;
use sympathy_scenes::EmbeddedScenes;
use sympathy_session::{Session, SessionStore};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Sympathy API server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Build the first session and the application state.
    let scenes = Arc::new(EmbeddedScenes);
    let session = Session::new(&SystemClock, scenes.as_ref())?;
    let app_state = AppState::new(SessionStore::new(session), scenes);

    // Build router.
    let app = Router::new()
        .merge(routes::frame::router())
        .merge(routes::command::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
