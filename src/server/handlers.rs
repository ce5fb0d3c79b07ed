use super::types::{ErrorResponse, GenerateRequest, HealthResponse, ModelsResponse};
use crate::{
    Error,
    aliases::ModelAliases,
    backend::{GenerateBackend, GeneratePayload},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub aliases: Arc<ModelAliases>,
    pub backend: Arc<dyn GenerateBackend>,
    pub backend_address: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend_address: state.backend_address.clone(),
    })
}

pub async fn models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let aliases = state
        .aliases
        .aliases()
        .into_iter()
        .map(str::to_string)
        .collect();
    let mapping = state
        .aliases
        .mapping()
        .into_iter()
        .map(|(alias, model)| (alias.to_string(), model.into()))
        .collect();

    Json(ModelsResponse { aliases, mapping })
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let model = state.aliases.resolve(&request.model);
    info!(
        "Received generate request for model {} (resolved: {})",
        request.model, model
    );

    let payload = GeneratePayload::new(model, request.prompt.as_str(), request.stream)
        .with_system(request.system);

    match state.backend.generate(&payload).await {
        Ok(body) => Ok(Json(body)),
        Err(Error::Backend { status, body }) => {
            error!("Backend rejected generate request: {} {}", status, body);
            Err((
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                Json(ErrorResponse { error: body }),
            ))
        }
        Err(e) => {
            error!("Failed to reach backend: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
