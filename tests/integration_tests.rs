// Integration tests for Nightout Finder

use std::path::PathBuf;

use actix_web::{http::StatusCode, test, web, App};
use nightout_finder::config::AssetSettings;
use nightout_finder::core::{Catalog, Matcher};
use nightout_finder::routes::{self, assets, venues::AppState};
use serde_json::{json, Value};

fn app_state() -> AppState {
    AppState {
        catalog: Catalog::bundled().unwrap(),
        matcher: Matcher::default(),
    }
}

/// Scratch asset directory, removed on drop
struct AssetDir(PathBuf);

impl AssetDir {
    fn new(with_index: bool) -> Self {
        let dir = std::env::temp_dir().join(format!("nightout-assets-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(dir.join("assets")).unwrap();
        std::fs::write(dir.join("assets").join("app.js"), "console.log('app');").unwrap();
        if with_index {
            std::fs::write(dir.join("index.html"), "<!doctype html><div id=\"root\"></div>").unwrap();
        }
        Self(dir)
    }

    fn settings(&self) -> AssetSettings {
        AssetSettings {
            dir: self.0.clone(),
            index_file: "index.html".to_string(),
        }
    }
}

impl Drop for AssetDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn brooklyn_preferences() -> Value {
    json!({
        "budget": "$$",
        "neighborhoods": ["Brooklyn"],
        "timeOfDay": ["Any"],
        "activities": ["Food & Drink"],
        "accessibility": false,
        "dietaryRestrictions": []
    })
}

#[actix_web::test]
async fn test_match_endpoint_returns_layout() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/venues/match")
        .set_json(json!({ "preferences": brooklyn_preferences() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let featured = body["featured"].as_array().unwrap();
    let remainder = body["remainder"].as_array().unwrap();
    let total = body["totalResults"].as_u64().unwrap() as usize;

    assert_eq!(featured.len() + remainder.len(), total);
    assert!(total > 0);
    assert!(featured.len() <= 3);
    for card in featured.iter().chain(remainder) {
        assert!(card["neighborhood"].as_str().unwrap().starts_with("Brooklyn"));
        assert_eq!(card["activityType"], "Dining");
        assert!(card["priceText"].is_string());
        assert!(card["ticketText"].is_string());
    }
    assert!(body["renderKey"].is_string());
}

#[actix_web::test]
async fn test_match_endpoint_applies_budget_filter() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/venues/match")
        .set_json(json!({ "preferences": brooklyn_preferences(), "budgetFilter": ["$"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let featured = body["featured"].as_array().unwrap();
    assert!(!featured.is_empty());
    for card in featured {
        assert_eq!(card["priceRange"], "$");
    }

    // Exact membership: "$$" does not include cheaper tiers
    let req = test::TestRequest::post()
        .uri("/api/v1/venues/match")
        .set_json(json!({ "preferences": brooklyn_preferences(), "budgetFilter": ["$$"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalResults"], 0);
    assert!(body["featured"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_match_endpoint_rejects_incomplete_form() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/venues/match")
        .set_json(json!({ "preferences": { "budget": "", "neighborhoods": [] } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fields"]["budget"][0], "Budget is required");
    assert_eq!(body["fields"]["timeOfDay"][0], "Please select at least one time of day");
    assert!(body["fields"]["neighborhoods"].is_array());
    assert!(body["fields"]["activities"].is_array());
}

#[actix_web::test]
async fn test_match_endpoint_rejects_blank_neighborhood() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let mut preferences = brooklyn_preferences();
    preferences["neighborhoods"] = json!([" "]);

    let req = test::TestRequest::post()
        .uri("/api/v1/venues/match")
        .set_json(json!({ "preferences": preferences }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fields"]["neighborhoods"][0], "Neighborhood names cannot be blank");
    assert!(body["fields"]["budget"].is_null());
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/venues/match")
        .set_json(json!({ "preferences": { "activities": ["Skydiving"] } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_availability_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/venues/availability")
        .set_json(json!({ "neighborhoods": ["Upper West Side"], "timeOfDay": ["Morning"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    let enabled: Vec<&str> = entries
        .iter()
        .filter(|e| e["enabled"] == true)
        .map(|e| e["label"].as_str().unwrap())
        .collect();
    assert_eq!(enabled, vec!["Food & Drink", "Outdoor & Sports"]);
}

#[actix_web::test]
async fn test_options_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/options").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["neighborhoods"][0], "Manhattan - Upper East Side");
    assert_eq!(body["budgets"].as_array().unwrap().len(), 5);
    assert_eq!(body["budgets"][1]["label"], "$ ($0-25)");
    assert_eq!(body["dietaryRestrictions"][2], "Gluten-Free");
    assert_eq!(body["adPlacements"][2]["slot"], "suggestions-mid");
    assert_eq!(body["adPlacements"][1]["format"], "vertical");
}

#[actix_web::test]
async fn test_venue_by_id() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/venues/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Candlelit Dinner at Il Buco");
    assert!(body["priceText"].is_string());

    let req = test::TestRequest::get().uri("/api/v1/venues/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status_code"], 404);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["venues"], 24);
}

#[actix_web::test]
async fn test_static_files_and_fallback() {
    let assets_dir = AssetDir::new(true);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes)
            .service(assets::static_files(&assets_dir.settings())),
    )
    .await;

    let req = test::TestRequest::get().uri("/assets/app.js").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "console.log('app');");

    let req = test::TestRequest::get().uri("/results/brooklyn").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("id=\"root\""));

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // API routes still take priority over the fallback
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_fallback_without_index() {
    let assets_dir = AssetDir::new(false);
    let app = test::init_service(
        App::new().service(assets::static_files(&assets_dir.settings())),
    )
    .await;

    let req = test::TestRequest::get().uri("/anything").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    assert_eq!(body, assets::MISSING_INDEX_BODY);
}

#[actix_web::test]
async fn test_fallback_with_unreadable_index() {
    let assets_dir = AssetDir::new(false);
    std::fs::create_dir_all(assets_dir.0.join("index.html")).unwrap();

    let app = test::init_service(
        App::new().service(assets::static_files(&assets_dir.settings())),
    )
    .await;

    let req = test::TestRequest::get().uri("/anything").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    assert_eq!(body, assets::INDEX_FAILURE_BODY);
}
