use std::collections::BTreeMap;

use actix_web::{web, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};
use crate::core::{apply_budget_filter, price_range_label, price_range_text, Catalog, Matcher};
use crate::models::{
    ActivityLabel, ActivityOption, AvailabilityRequest, BudgetOption, DietaryTag, ErrorResponse,
    FormOptionsResponse, HealthResponse, MatchVenuesRequest, MatchVenuesResponse, PriceTier,
    TimeOfDay, VenueCard, AD_PLACEMENTS,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub matcher: Matcher,
}

/// Configure all venue-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/options", web::get().to(form_options))
        .route("/venues", web::get().to(list_venues))
        .route("/venues/match", web::post().to(match_venues))
        .route("/venues/availability", web::post().to(activity_availability))
        .route("/venues/{id}", web::get().to(get_venue));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        venues: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Choices for every form field
///
/// GET /api/v1/options
async fn form_options(state: web::Data<AppState>) -> impl Responder {
    let activities = ActivityLabel::ALL
        .iter()
        .map(|&label| ActivityOption {
            label,
            category: label.category(),
        })
        .collect();

    let budgets = PriceTier::ALL
        .iter()
        .map(|&tier| BudgetOption {
            value: tier,
            label: price_range_label(tier),
            range_text: price_range_text(tier),
        })
        .collect();

    HttpResponse::Ok().json(FormOptionsResponse {
        neighborhoods: state.catalog.form_neighborhoods(),
        time_of_day: TimeOfDay::FORM_OPTIONS.to_vec(),
        activities,
        dietary_restrictions: DietaryTag::ALL.to_vec(),
        budgets,
        ad_placements: AD_PLACEMENTS.to_vec(),
    })
}

/// Whole catalog as result cards
///
/// GET /api/v1/venues
async fn list_venues(state: web::Data<AppState>) -> impl Responder {
    let cards: Vec<VenueCard> = state
        .catalog
        .venues()
        .iter()
        .cloned()
        .map(VenueCard::from)
        .collect();

    HttpResponse::Ok().json(cards)
}

/// Single result card by venue id
///
/// GET /api/v1/venues/{id}
async fn get_venue(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(venue) => HttpResponse::Ok().json(VenueCard::from(venue.clone())),
        None => {
            tracing::debug!("Venue not found: {}", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Not found".to_string(),
                message: format!("No venue with id {}", id),
                status_code: 404,
                fields: None,
            })
        }
    }
}

/// Match venues endpoint
///
/// POST /api/v1/venues/match
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "budget": "$$",
///     "neighborhoods": ["Brooklyn"],
///     "timeOfDay": ["Evening"],
///     "activities": ["Food & Drink"],
///     "accessibility": false,
///     "dietaryRestrictions": []
///   },
///   "budgetFilter": ["$"]
/// }
/// ```
async fn match_venues(
    state: web::Data<AppState>,
    req: web::Json<MatchVenuesRequest>,
) -> impl Responder {
    let MatchVenuesRequest { preferences, budget_filter } = req.into_inner();

    if let Err(errors) = preferences.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "Please complete the required fields".to_string(),
            status_code: 400,
            fields: Some(field_messages(&errors)),
        });
    }

    tracing::debug!("Matching preferences: {:?}", preferences);

    let result = state.matcher.find_matches(&preferences, state.catalog.venues());
    let ideas = apply_budget_filter(result.ideas, &budget_filter);
    let total_results = ideas.len();
    let layout = state.matcher.layout(ideas);

    tracing::info!(
        "Returning {} venues (from {} candidates, budget filter {:?})",
        total_results,
        result.total_candidates,
        budget_filter
    );

    HttpResponse::Ok().json(MatchVenuesResponse {
        featured: layout.featured.into_iter().map(VenueCard::from).collect(),
        remainder: layout.remainder.into_iter().map(VenueCard::from).collect(),
        total_results,
        total_candidates: result.total_candidates,
        render_key: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
    })
}

/// Which activity checkboxes can still lead to a result
///
/// POST /api/v1/venues/availability
///
/// Request body:
/// ```json
/// { "neighborhoods": ["Brooklyn"], "timeOfDay": ["Evening"] }
/// ```
async fn activity_availability(
    state: web::Data<AppState>,
    req: web::Json<AvailabilityRequest>,
) -> impl Responder {
    let availability = state.matcher.available_activities(
        &req.neighborhoods,
        &req.time_of_day,
        state.catalog.venues(),
    );

    tracing::debug!(
        "Activity availability for {:?} / {:?}: {:?}",
        req.neighborhoods,
        req.time_of_day,
        availability
    );

    HttpResponse::Ok().json(availability)
}

/// Collect validator messages under the JSON field names the form uses
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (camel_case(&field.to_string()), messages)
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
