use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    catalog::Category,
    error::{AppError, AppResult, OptionExt},
    state::AppState,
    types::{RecordView, SearchHit, SearchQuery, SearchResponse, SpeciesDetail, SpeciesListResponse, SpeciesSummary},
};

fn parse_category(state: &AppState, raw: &str) -> AppResult<Category> {
    raw.parse::<Category>().ok().ok_or_not_found("Category").inspect_err(|_| {
        state.metrics.inc_client_errors();
    })
}

/// Lower-cases the raw `q` parameter. Only an absent or empty parameter is rejected;
/// whitespace is part of the query.
fn normalize_search_term(raw: Option<&str>) -> AppResult<String> {
    match raw {
        Some(q) if !q.is_empty() => Ok(q.to_lowercase()),
        _ => Err(AppError::BadRequest("Query parameter required".to_string())),
    }
}

// GET /api/species/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<SpeciesListResponse>> {
    let category = parse_category(&state, &category)?;
    state.metrics.inc_category_listings();

    let species: Vec<SpeciesSummary> =
        state.catalog.species(category).iter().map(SpeciesSummary::from).collect();
    Ok(Json(SpeciesListResponse { category, count: species.len(), species }))
}

// GET /api/species/{category}/{species}
pub async fn get_species(
    State(state): State<AppState>,
    Path((category, name)): Path<(String, String)>,
) -> AppResult<Json<SpeciesDetail>> {
    let category = parse_category(&state, &category)?;
    let entry = state.catalog.find(category, &name).ok_or_not_found("Species").inspect_err(|_| {
        state.metrics.inc_client_errors();
    })?;
    state.metrics.inc_species_lookups();

    Ok(Json(SpeciesDetail {
        species: entry.scientific_name.clone(),
        category,
        record: RecordView::from(entry),
    }))
}

// GET /api/species/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let query = normalize_search_term(params.q.as_deref()).inspect_err(|_| {
        state.metrics.inc_client_errors();
    })?;
    state.metrics.inc_searches();

    let results: Vec<SearchHit> =
        state.catalog.search(&query).into_iter().map(|(c, e)| SearchHit::new(c, e)).collect();
    tracing::debug!(%query, hits = results.len(), "species search");

    Ok(Json(SearchResponse { query, count: results.len(), results }))
}
