//! Tests for the WildID service.
//!
//! - **catalog_tests**: species table construction, lookup, search, counts
//! - **identify_tests**: request category resolution and the random identifier
//! - **api_tests**: the full router driven through `tower::ServiceExt::oneshot`
//! - **config_tests**: configuration layering and validation
//! - **error_tests**: error display and JSON rendering

pub mod identify_tests;
