use axum::Router;
use shared_types::{
    AppConfig, AppError, AppErrorKind, DashboardMetrics, DebtTargetInputs, DebtTargetResult,
    DemoSeries, DemoSeriesPoint, DocumentDraft, GenerateDraftRequest, PricingInputs,
    PricingResult, StaticMetric, TemplateKey, TemplateResponse, TemplateSummary,
};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::error_convert::panic_response;
use crate::health::{self, HealthResponse};
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::pricing::configured_break_even,
        rest::pricing::break_even,
        rest::pricing::debt_target,
        rest::dashboard::get_dashboard,
        rest::dashboard::demo_series,
        rest::template::list_templates,
        rest::template::get_template,
        rest::template::generate,
        rest::template::download_template,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        PricingInputs,
        PricingResult,
        DebtTargetInputs,
        DebtTargetResult,
        StaticMetric,
        DashboardMetrics,
        DemoSeries,
        DemoSeriesPoint,
        TemplateKey,
        TemplateSummary,
        TemplateResponse,
        GenerateDraftRequest,
        DocumentDraft,
        HealthResponse,
    )),
    tags(
        (name = "pricing", description = "Break-even and debt-target calculations"),
        (name = "dashboard", description = "Dashboard metrics and demo chart data"),
        (name = "templates", description = "Legal document templates and downloads"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Break-Even API",
        description = "Pricing calculator and legal document template service",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the REST API at `/api/*`, `/health`,
/// and the API docs at `/docs` when `features.docs` is on. Unmatched paths
/// and handler panics render as JSON `AppError`s.
pub fn api_router(config: &AppConfig) -> Router {
    let state = AppState::from_config(config);

    let mut router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if config.features.docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router
        .fallback(rest::route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
}
