use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::identify::{Identifier, RandomIdentifier};
use crate::metrics::Metrics;

/// The shared application state.
///
/// Cheap to clone: everything sits behind an `Arc`. The catalog is never
/// mutated after construction, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The species table, fully built before the listener starts.
    pub catalog: Arc<Catalog>,
    /// Identification backend. Currently the random mock.
    pub identifier: Arc<dyn Identifier>,
    pub config: Arc<AppConfig>,
    pub metrics: Metrics,
}

impl AppState {
    /// Wires the catalog to a [`RandomIdentifier`] configured from `config.identify`.
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        let identifier = Arc::new(RandomIdentifier::from_config(&config.identify));
        Self::with_identifier(catalog, config, identifier)
    }

    pub fn with_identifier(catalog: Catalog, config: AppConfig, identifier: Arc<dyn Identifier>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            identifier,
            config: Arc::new(config),
            metrics: Metrics::new(),
        }
    }
}
