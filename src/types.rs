use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, SpeciesEntry};

/// A record as exposed over HTTP, with the habitat default already applied.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub common_name: String,
    pub description: String,
    pub edibility: String,
    pub herbal_benefits: String,
    pub habitat: String,
    pub warning: Option<String>,
    pub uses: Option<String>,
    pub conservation_status: Option<String>,
}

impl From<&SpeciesEntry> for RecordView {
    fn from(entry: &SpeciesEntry) -> Self {
        let r = &entry.record;
        Self {
            common_name: r.common_name.clone(),
            description: r.description.clone(),
            edibility: r.edibility.clone(),
            herbal_benefits: r.herbal_benefits.clone(),
            habitat: r.habitat_or_default().to_string(),
            warning: r.warning.clone(),
            uses: r.uses.clone(),
            conservation_status: r.conservation_status.clone(),
        }
    }
}

// GET /api/species/{category}
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesSummary {
    pub species: String,
    pub common_name: String,
    pub description: String,
}

impl From<&SpeciesEntry> for SpeciesSummary {
    fn from(entry: &SpeciesEntry) -> Self {
        Self {
            species: entry.scientific_name.clone(),
            common_name: entry.record.common_name.clone(),
            description: entry.record.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesListResponse {
    pub category: Category,
    pub count: usize,
    pub species: Vec<SpeciesSummary>,
}

// GET /api/species/{category}/{species}
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesDetail {
    pub species: String,
    pub category: Category,
    #[serde(flatten)]
    pub record: RecordView,
}

// GET /api/species/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub species: String,
    pub common_name: String,
    pub category: Category,
    pub description: String,
}

impl SearchHit {
    pub fn new(category: Category, entry: &SpeciesEntry) -> Self {
        Self {
            species: entry.scientific_name.clone(),
            common_name: entry.record.common_name.clone(),
            category,
            description: entry.record.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

// GET /api/health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

// GET /api/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_species: usize,
    pub categories: BTreeMap<Category, usize>,
    pub supported_categories: Vec<Category>,
}
