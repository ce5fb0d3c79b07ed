pub mod handlers;
mod types;

pub use types::{ErrorResponse, GenerateRequest, HealthResponse, ModelsResponse};

use crate::{Result, aliases::ModelAliases, backend::OllamaClient, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router around the given state. Split out so
/// integration tests can drive the routes without binding a socket.
pub fn app(state: handlers::AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate", post(handlers::generate))
        .route("/models", get(handlers::models))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let aliases = ModelAliases::new(config.aliases.clone());
    let backend = OllamaClient::new(config.backend.clone())?;

    info!(
        "Serving {} model aliases against backend {}",
        aliases.len(),
        config.backend.address
    );

    let state = handlers::AppState {
        aliases: Arc::new(aliases),
        backend: Arc::new(backend),
        backend_address: config.backend.address.clone(),
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
