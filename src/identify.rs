//! Species identification.
//!
//! Handlers only talk to the [`Identifier`] trait. The shipped implementation,
//! [`RandomIdentifier`], performs no recognition: it returns a uniformly random
//! record of the requested category with a synthetic confidence score.

use std::ops::RangeInclusive;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Catalog, Category, SpeciesEntry};
use crate::config::IdentifyConfig;
use crate::error::{AppError, AppResult};
use crate::types::RecordView;

/// Category used when a request names none, or one the catalog does not know.
pub const FALLBACK_CATEGORY: Category = Category::Plants;

#[derive(Debug, Clone, Serialize)]
pub struct Identification {
    pub species: String,
    pub confidence: u8,
    /// Singular display label, e.g. "Fungus".
    pub category: &'static str,
    #[serde(flatten)]
    pub record: RecordView,
    pub timestamp: String,
}

impl Identification {
    pub fn new(category: Category, entry: &SpeciesEntry, confidence: u8) -> Self {
        Self {
            species: entry.scientific_name.clone(),
            confidence,
            category: category.singular_label(),
            record: RecordView::from(entry),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[async_trait]
pub trait Identifier: Send + Sync {
    async fn identify(&self, catalog: &Catalog, category: Category) -> AppResult<Identification>;
}

pub struct RandomIdentifier {
    confidence: RangeInclusive<u8>,
}

impl RandomIdentifier {
    pub fn new(confidence: RangeInclusive<u8>) -> Self {
        Self { confidence }
    }

    pub fn from_config(cfg: &IdentifyConfig) -> Self {
        Self::new(cfg.min_confidence..=cfg.max_confidence)
    }

    fn pick<'a>(&self, candidates: &'a [SpeciesEntry]) -> Option<(&'a SpeciesEntry, u8)> {
        if self.confidence.is_empty() {
            return None;
        }
        let mut rng = rand::thread_rng();
        let entry = candidates.choose(&mut rng)?;
        Some((entry, rng.gen_range(self.confidence.clone())))
    }
}

#[async_trait]
impl Identifier for RandomIdentifier {
    async fn identify(&self, catalog: &Catalog, category: Category) -> AppResult<Identification> {
        let (entry, confidence) = self
            .pick(catalog.species(category))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("no candidate species for category {}", category)))?;
        tracing::debug!(%category, species = %entry.scientific_name, confidence, "mock identification");
        Ok(Identification::new(category, entry, confidence))
    }
}

/// Resolves the category of an identify request body.
///
/// The body must be a JSON object; anything else, an empty body included, is an error.
/// A missing, null, scalar or unknown `category` resolves to [`FALLBACK_CATEGORY`].
/// Array or object values cannot name a category and are rejected.
pub fn requested_category(body: &[u8]) -> AppResult<Category> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Object(fields) = value else {
        return Err(AppError::Internal(anyhow::anyhow!("identify request body is not a JSON object")));
    };

    let category = match fields.get("category") {
        Some(Value::String(name)) => name.parse().ok(),
        Some(v @ (Value::Array(_) | Value::Object(_))) => {
            return Err(AppError::Internal(anyhow::anyhow!("category must be a scalar, got {}", v)));
        }
        _ => None,
    };

    Ok(category.unwrap_or_else(|| {
        tracing::debug!(requested = ?fields.get("category"), "falling back to {}", FALLBACK_CATEGORY);
        FALLBACK_CATEGORY
    }))
}
