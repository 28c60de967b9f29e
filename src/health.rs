use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    credential_store: String,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse),
        (status = 503, description = "Service unavailable")
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    match state.credentials.ping().await {
        Ok(_) => {
            info!("Health check passed");
            Ok(Json(HealthResponse {
                status: "OK".to_string(),
                credential_store: "healthy".to_string(),
            }))
        }
        Err(_) => {
            error!("Credential store health check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
