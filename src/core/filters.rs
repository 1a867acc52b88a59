use crate::models::{ActivityLabel, DietaryTag, PriceTier, TimeOfDay, UserPreferences, VenueIdea};

/// Venue price must not exceed the selected tier
#[inline]
pub fn matches_budget(venue: &VenueIdea, budget: Option<PriceTier>) -> bool {
    match budget {
        Some(max_tier) => venue.price_range <= max_tier,
        None => true,
    }
}

/// Venue neighborhood must contain one of the selected areas (case-insensitive).
/// No selection means any area.
#[inline]
pub fn matches_neighborhood(venue: &VenueIdea, neighborhoods: &[String]) -> bool {
    if neighborhoods.is_empty() {
        return true;
    }

    let location = venue.neighborhood.to_lowercase();
    neighborhoods
        .iter()
        .any(|neighborhood| location.contains(&neighborhood.trim().to_lowercase()))
}

#[inline]
pub fn matches_time_of_day(venue: &VenueIdea, times: &[TimeOfDay]) -> bool {
    if times.is_empty() || times.contains(&TimeOfDay::Any) {
        return true;
    }

    if venue.time_of_day.contains(&TimeOfDay::Any) {
        return true;
    }

    times.iter().any(|time| venue.time_of_day.contains(time))
}

/// Venue category must be reachable from at least one selected label
#[inline]
pub fn matches_activity(venue: &VenueIdea, activities: &[ActivityLabel]) -> bool {
    activities
        .iter()
        .any(|activity| activity.category() == venue.activity_type)
}

#[inline]
pub fn matches_accessibility(venue: &VenueIdea, required: bool) -> bool {
    !required || venue.accessibility
}

/// Dietary restrictions only constrain results when food is on the table
#[inline]
pub fn matches_dietary(
    venue: &VenueIdea,
    activities: &[ActivityLabel],
    restrictions: &[DietaryTag],
) -> bool {
    if !activities.contains(&ActivityLabel::FoodAndDrink) || restrictions.is_empty() {
        return true;
    }

    restrictions
        .iter()
        .any(|restriction| venue.dietary_options.contains(restriction))
}

/// Check a venue against every submitted preference
pub fn matches_preferences(venue: &VenueIdea, preferences: &UserPreferences) -> bool {
    matches_budget(venue, preferences.budget)
        && matches_neighborhood(venue, &preferences.neighborhoods)
        && matches_time_of_day(venue, &preferences.time_of_day)
        && matches_activity(venue, &preferences.activities)
        && matches_accessibility(venue, preferences.accessibility)
        && matches_dietary(venue, &preferences.activities, &preferences.dietary_restrictions)
}

/// Where-and-when subset of the preferences, used to narrow the activity choices
#[inline]
pub fn matches_location_and_time(
    venue: &VenueIdea,
    neighborhoods: &[String],
    times: &[TimeOfDay],
) -> bool {
    matches_neighborhood(venue, neighborhoods) && matches_time_of_day(venue, times)
}

/// Exact tier membership for the results-page budget chips.
/// No selected tier means no restriction.
#[inline]
pub fn matches_budget_filter(venue: &VenueIdea, tiers: &[PriceTier]) -> bool {
    tiers.is_empty() || tiers.contains(&venue.price_range)
}
