//! Nightout Finder - preference matching for the NYC date night finder
//!
//! This library holds the bundled venue catalog, the matching predicate that
//! turns submitted form preferences into suggestions, and the HTTP routes that
//! expose it alongside the built single-page application.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{apply_budget_filter, Catalog, CatalogError, Matcher, MatchResult};
pub use models::{UserPreferences, VenueIdea, MatchVenuesRequest, MatchVenuesResponse};
