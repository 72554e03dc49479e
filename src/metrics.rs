use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for the ops endpoint.
#[derive(Clone)]
pub struct Metrics {
    pub identifications: Arc<AtomicU64>,
    pub category_listings: Arc<AtomicU64>,
    pub species_lookups: Arc<AtomicU64>,
    pub searches: Arc<AtomicU64>,
    pub client_errors: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            identifications: Arc::new(AtomicU64::new(0)),
            category_listings: Arc::new(AtomicU64::new(0)),
            species_lookups: Arc::new(AtomicU64::new(0)),
            searches: Arc::new(AtomicU64::new(0)),
            client_errors: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_identifications(&self) {
        self.identifications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_category_listings(&self) {
        self.category_listings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_species_lookups(&self) {
        self.species_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_client_errors(&self) {
        self.client_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            identifications: self.identifications.load(Ordering::Relaxed),
            category_listings: self.category_listings.load(Ordering::Relaxed),
            species_lookups: self.species_lookups.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            client_errors: self.client_errors.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub identifications: u64,
    pub category_listings: u64,
    pub species_lookups: u64,
    pub searches: u64,
    pub client_errors: u64,
    pub uptime_seconds: u64,
}
