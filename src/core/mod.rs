// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod matcher;
pub mod pricing;

pub use catalog::{Catalog, CatalogError};
pub use filters::{matches_budget_filter, matches_location_and_time, matches_preferences};
pub use matcher::{apply_budget_filter, Matcher, MatchResult, ResultLayout};
pub use pricing::{price_range_label, price_range_text, ticket_text};
