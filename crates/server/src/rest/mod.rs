pub mod dashboard;
pub mod pricing;
pub mod template;

use axum::{http::Uri, routing::{get, post}, Router};
use shared_types::AppError;

use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Pricing
        .route(
            "/api/pricing/break-even",
            get(pricing::configured_break_even).post(pricing::break_even),
        )
        .route("/api/pricing/units-to-target", post(pricing::debt_target))
        // Dashboard
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/dashboard/demo-series", get(dashboard::demo_series))
        // Templates
        .route("/api/templates", get(template::list_templates))
        .route("/api/templates/generate", post(template::generate))
        .route("/api/templates/{key}", get(template::get_template))
        .route("/api/templates/{key}/download", get(template::download_template))
}

/// JSON 404 for paths no route matches.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()))
}
