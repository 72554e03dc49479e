//! HTTP route handlers for the WildID API.
//!
//! - `health`: health probe, metrics snapshot, build info
//! - `identify`: mock species identification
//! - `species`: category listing, single-species lookup, search
//! - `stats`: catalog statistics

pub mod health;
pub mod identify;
pub mod species;
pub mod stats;
