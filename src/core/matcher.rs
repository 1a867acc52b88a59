use crate::core::filters::{matches_budget_filter, matches_location_and_time, matches_preferences};
use crate::models::{ActivityAvailability, ActivityLabel, PriceTier, TimeOfDay, UserPreferences, VenueIdea};

/// Number of results shown before the mid-results ad slot
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub ideas: Vec<VenueIdea>,
    pub total_candidates: usize,
}

/// Matched ideas split around the mid-results ad slot
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLayout {
    pub featured: Vec<VenueIdea>,
    pub remainder: Vec<VenueIdea>,
}

/// Matching orchestrator
///
/// # Pipeline Stages
/// 1. Preference predicate (budget, area, time, activity, accessibility, diet)
/// 2. Optional exact-tier budget filter
/// 3. First-N / remainder split for ad placement
///
/// Every stage keeps catalog order and nothing is random, so the same
/// inputs always produce the same output.
#[derive(Debug, Clone)]
pub struct Matcher {
    featured_count: usize,
}

impl Matcher {
    pub fn new(featured_count: usize) -> Self {
        Self { featured_count }
    }

    /// Find all venues satisfying every preference, in catalog order
    pub fn find_matches(&self, preferences: &UserPreferences, candidates: &[VenueIdea]) -> MatchResult {
        let ideas = candidates
            .iter()
            .filter(|venue| matches_preferences(venue, preferences))
            .cloned()
            .collect();

        MatchResult {
            ideas,
            total_candidates: candidates.len(),
        }
    }

    /// Decide which activity labels can still produce a result for the
    /// chosen neighborhoods and times. Budget and activity are ignored.
    pub fn available_activities(
        &self,
        neighborhoods: &[String],
        times: &[TimeOfDay],
        candidates: &[VenueIdea],
    ) -> Vec<ActivityAvailability> {
        ActivityLabel::ALL
            .iter()
            .map(|&label| {
                let category = label.category();
                let enabled = candidates.iter().any(|venue| {
                    venue.activity_type == category
                        && matches_location_and_time(venue, neighborhoods, times)
                });

                ActivityAvailability {
                    label,
                    category,
                    enabled,
                }
            })
            .collect()
    }

    /// Split results into the group shown above the mid-results ad and the rest
    pub fn layout(&self, mut ideas: Vec<VenueIdea>) -> ResultLayout {
        let split_at = self.featured_count.min(ideas.len());
        let remainder = ideas.split_off(split_at);

        ResultLayout {
            featured: ideas,
            remainder,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURED_COUNT)
    }
}

/// Keep only ideas whose tier is one of `tiers`. An empty selection keeps everything.
pub fn apply_budget_filter(ideas: Vec<VenueIdea>, tiers: &[PriceTier]) -> Vec<VenueIdea> {
    if tiers.is_empty() {
        return ideas;
    }

    ideas
        .into_iter()
        .filter(|venue| matches_budget_filter(venue, tiers))
        .collect()
}
