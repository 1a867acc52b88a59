use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::core::pricing::{price_range_label, price_range_text, ticket_text};
use crate::models::domain::{
    ActivityLabel, ActivityType, AdPlacement, DietaryTag, PriceTier, TimeOfDay, VenueIdea,
};

/// Venue as rendered on a result card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueCard {
    #[serde(flatten)]
    pub venue: VenueIdea,
    pub price_text: &'static str,
    pub price_label: &'static str,
    pub ticket_text: &'static str,
}

impl From<VenueIdea> for VenueCard {
    fn from(venue: VenueIdea) -> Self {
        Self {
            price_text: price_range_text(venue.price_range),
            price_label: price_range_label(venue.price_range),
            ticket_text: ticket_text(venue.requires_ticket),
            venue,
        }
    }
}

/// Response for the match endpoint.
///
/// `featured` and `remainder` sit either side of the mid-results ad slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchVenuesResponse {
    pub featured: Vec<VenueCard>,
    pub remainder: Vec<VenueCard>,
    pub total_results: usize,
    pub total_candidates: usize,
    pub render_key: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Whether an activity checkbox can lead to any result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityAvailability {
    pub label: ActivityLabel,
    pub category: ActivityType,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityOption {
    pub label: ActivityLabel,
    pub category: ActivityType,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOption {
    pub value: PriceTier,
    pub label: &'static str,
    pub range_text: &'static str,
}

/// Everything the form needs to render its choices
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptionsResponse {
    pub neighborhoods: Vec<String>,
    pub time_of_day: Vec<TimeOfDay>,
    pub activities: Vec<ActivityOption>,
    pub dietary_restrictions: Vec<DietaryTag>,
    pub budgets: Vec<BudgetOption>,
    pub ad_placements: Vec<AdPlacement>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub venues: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    /// Per-field validation messages, keyed by form field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}
