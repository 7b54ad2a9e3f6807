use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use shared_types::{
    AppError, DashboardMetrics, DemoSeries, DemoSeriesParams, PricingConfig,
    DEFAULT_SERIES_POINTS,
};
use std::sync::Arc;

use crate::dashboard::{build_metrics, seeded_demo_series};
use crate::error_convert::{query_rejection, ValidateRequest};

/// All dashboard display metrics, computed from the pricing config.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardMetrics),
        (status = 422, description = "Configured inputs are invalid", body = AppError)
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip_all)]
pub async fn get_dashboard(
    State(pricing): State<Arc<PricingConfig>>,
) -> Result<Json<DashboardMetrics>, AppError> {
    Ok(Json(build_metrics(&pricing)?))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/demo-series",
    params(DemoSeriesParams),
    responses(
        (status = 200, description = "Random-walk demo chart data", body = DemoSeries),
        (status = 400, description = "points or seed is not a number", body = AppError),
        (status = 422, description = "points out of range", body = AppError)
    ),
    tag = "dashboard"
)]
#[tracing::instrument(skip_all)]
pub async fn demo_series(
    query: Result<Query<DemoSeriesParams>, QueryRejection>,
) -> Result<Json<DemoSeries>, AppError> {
    let Query(params) = query.map_err(query_rejection)?;
    params.validate_request()?;
    tracing::debug!(points = ?params.points, seed = ?params.seed, "building demo series");
    let points = params.points.unwrap_or(DEFAULT_SERIES_POINTS);
    Ok(Json(seeded_demo_series(points, params.seed)))
}
