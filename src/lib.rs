//! # WildID Backend Library
//!
//! HTTP service over a static species reference table (birds, plants, fungi)
//! with a mock identification endpoint that samples the table instead of
//! running real recognition.
//!
//! ## Architecture
//!
//! - **Axum** for routing, **Tokio** as runtime, **Serde** for JSON
//! - The [`catalog::Catalog`] is built once at startup and shared read-only
//! - Identification goes through the [`identify::Identifier`] trait so the
//!   random mock can be replaced without touching the routes
//!
//! ## Modules
//!
//! - [`catalog`]: species table, categories, search and counts
//! - [`config`]: layered configuration (embedded defaults, file, env)
//! - [`error`]: error type and its JSON rendering
//! - [`identify`]: identification capability and the random mock
//! - [`metrics`]: request counters
//! - [`middleware`]: response security headers
//! - [`routes`]: HTTP handlers
//! - [`state`]: shared application state
//! - [`types`]: request/response DTOs

pub mod catalog;
pub mod config;
pub mod error;
pub mod identify;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Builds the full application router, layers included.
pub fn build_router(state: AppState) -> Router {
    let cfg = state.config.clone();

    let app = Router::new()
        .route("/api/identify", post(routes::identify::identify))
        .route("/api/species/search", get(routes::species::search))
        .route("/api/species/{category}", get(routes::species::list_by_category))
        .route("/api/species/{category}/{species}", get(routes::species::get_species))
        .route("/api/stats", get(routes::stats::stats))
        .route("/api/health", get(routes::health::health))
        .route("/api/metrics", get(routes::health::metrics))
        .route("/api/version", get(routes::health::version))
        .fallback(routes::health::not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(cfg.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg.clone(), middleware::security_headers::security_headers_middleware));

    // Public read-only API without cookies: any origin may call it.
    if cfg.cors.allow_any_origin {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
