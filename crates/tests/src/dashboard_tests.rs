use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use shared_types::{AppConfig, PricingConfig};

use crate::common::{get, test_app, test_app_with};

#[tokio::test]
async fn dashboard_reports_default_metrics() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["break_even_units"], 529);
    assert_eq!(body["units_to_target"], 252);
    assert_eq!(body["margin_per_unit"], "94.50");
    assert_eq!(body["profit_per_unit"], "79.50");
    assert_eq!(body["highlights"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn dashboard_reflects_configured_pricing() {
    let config = AppConfig {
        pricing: PricingConfig {
            price: Decimal::new(20, 0),
            variable_cost: Decimal::new(10, 0),
            fixed_cost: Decimal::new(105, 0),
            acquisition_cost: Decimal::new(5, 0),
            highlights: Vec::new(),
            ..PricingConfig::default()
        },
        ..AppConfig::default()
    };
    let app = test_app_with(config);

    let (status, body) = get(&app, "/api/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["break_even_units"], 10);
    assert_eq!(body["highlights"], serde_json::json!([]));
}

#[tokio::test]
async fn dashboard_with_invalid_config_is_422() {
    let config = AppConfig {
        pricing: PricingConfig {
            price: Decimal::new(5, 0),
            ..PricingConfig::default()
        },
        ..AppConfig::default()
    };
    let app = test_app_with(config);

    let (status, body) = get(&app, "/api/dashboard").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "InvalidPricingInput");
}

// ---------------------------------------------------------------------------
// Demo series
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_series_defaults_to_twenty_points() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard/demo-series").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["columns"],
        serde_json::json!(["revenue", "cost", "margin"])
    );
    assert_eq!(body["points"].as_array().map(Vec::len), Some(20));
}

#[tokio::test]
async fn demo_series_is_reproducible_with_seed() {
    let app = test_app();

    let (_, first) = get(&app, "/api/dashboard/demo-series?points=15&seed=99").await;
    let (_, second) = get(&app, "/api/dashboard/demo-series?points=15&seed=99").await;

    assert_eq!(first, second);
    assert_eq!(first["points"].as_array().map(Vec::len), Some(15));
}

#[tokio::test]
async fn demo_series_accepts_upper_bound() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard/demo-series?points=500&seed=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["points"].as_array().map(Vec::len), Some(500));
}

#[tokio::test]
async fn demo_series_rejects_zero_points() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard/demo-series?points=0").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"]["points"].is_string());
}

#[tokio::test]
async fn demo_series_rejects_too_many_points() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard/demo-series?points=501").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
}

#[tokio::test]
async fn demo_series_rejects_non_numeric_points() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard/demo-series?points=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn demo_series_rejects_non_numeric_seed() {
    let app = test_app();

    let (status, body) = get(&app, "/api/dashboard/demo-series?seed=-1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
}
