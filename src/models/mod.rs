// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityLabel, ActivityType, AdFormat, AdPlacement, DietaryTag, ParseTagError, PriceTier,
    TimeOfDay, UserPreferences, VenueIdea, AD_PLACEMENTS,
};
pub use requests::{AvailabilityRequest, MatchVenuesRequest};
pub use responses::{
    ActivityAvailability, ActivityOption, BudgetOption, ErrorResponse, FormOptionsResponse,
    HealthResponse, MatchVenuesResponse, VenueCard,
};
