use axum::{extract::State, Json};

use crate::{state::AppState, types::StatsResponse};

// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let catalog = &state.catalog;
    let categories = catalog.counts();
    Json(StatsResponse {
        total_species: categories.values().sum(),
        categories,
        supported_categories: catalog.categories().to_vec(),
    })
}
