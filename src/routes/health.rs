use crate::{error::AppError, state::AppState, types::HealthResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Reported by the health probe. Deliberately independent of the crate version.
pub const API_VERSION: &str = "1.0.0";

// Health check endpoint - constant status, no dependencies to probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: API_VERSION,
    })
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.get_snapshot())
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": API_VERSION,
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}

// Unknown routes get the same JSON error shape as handler errors
pub async fn not_found(State(state): State<AppState>) -> AppError {
    state.metrics.inc_client_errors();
    AppError::NotFound("Route not found".to_string())
}
