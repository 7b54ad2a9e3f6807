use axum::http::StatusCode;
use server::openapi::ApiDoc;
use shared_types::AppConfig;
use utoipa::OpenApi;

use crate::common::{get_raw, test_app, test_app_with};

#[tokio::test]
async fn docs_hidden_when_flag_off() {
    let app = test_app();

    let (status, _, _) = get_raw(&app, "/docs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_served_when_flag_on() {
    let mut config = AppConfig::default();
    config.features.docs = true;
    let app = test_app_with(config);

    let (status, _, bytes) = get_raw(&app, "/docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!bytes.is_empty());
}

#[test]
fn openapi_document_lists_every_route() {
    let doc = ApiDoc::openapi();
    for path in [
        "/health",
        "/api/pricing/break-even",
        "/api/pricing/units-to-target",
        "/api/dashboard",
        "/api/dashboard/demo-series",
        "/api/templates",
        "/api/templates/{key}",
        "/api/templates/generate",
        "/api/templates/{key}/download",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
