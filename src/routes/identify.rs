use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use crate::{
    error::AppResult,
    identify::{requested_category, Identification},
    state::AppState,
};

// POST /api/identify
//
// Oversized bodies are a 413; any other failure, an unparseable body included, is a 500.
pub async fn identify(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<Identification>> {
    let category = requested_category(&body?)?;
    let result = state.identifier.identify(&state.catalog, category).await?;
    state.metrics.inc_identifications();
    Ok(Json(result))
}
