use serde::{Deserialize, Serialize};
use crate::models::domain::{PriceTier, TimeOfDay, UserPreferences};

/// Request to match venues against submitted preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchVenuesRequest {
    pub preferences: UserPreferences,
    /// Exact-tier filter applied to the matched results. Empty keeps everything.
    #[serde(alias = "budget_filter", rename = "budgetFilter", default)]
    pub budget_filter: Vec<PriceTier>,
}

/// Request to narrow the activity checkboxes for the current form state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    #[serde(default)]
    pub neighborhoods: Vec<String>,
    #[serde(alias = "time_of_day", rename = "timeOfDay", default)]
    pub time_of_day: Vec<TimeOfDay>,
}
