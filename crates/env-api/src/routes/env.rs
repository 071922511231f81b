//! `GET /api/env` and the operational endpoints.

use super::AppState;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::exposure::apply_policy;
use crate::middleware::RequestTimer;
use axum::{extract::State, response::IntoResponse, Json};
use env_types::EnvResponse;
use std::sync::Arc;
use tracing::{debug, error};

/// Read the environment through the configured policy.
///
/// Read failures are logged here and collapse into the fixed 500 message.
pub fn read_snapshot(state: &AppState) -> ApiResult<EnvResponse> {
    match apply_policy(&state.exposure, state.source.as_ref()) {
        Ok(vars) => {
            let response = EnvResponse::success(vars);
            debug!(count = response.count, policy = %state.exposure.policy, "Environment read");
            Ok(response)
        }
        Err(e) => {
            error!(error = %e, "Error fetching environment variables");
            Err(e.into())
        }
    }
}

/// Environment endpoint
pub async fn get_env(State(state): State<AppState>) -> Result<Json<EnvResponse>, ApiError> {
    let timer = RequestTimer::new(Arc::clone(&state.metrics));
    let result = read_snapshot(&state);
    timer.finish(result.is_ok());
    result.map(Json)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "env-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Metrics endpoint
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json())
}
