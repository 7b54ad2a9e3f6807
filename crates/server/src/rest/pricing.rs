use axum::{extract::rejection::JsonRejection, extract::State, Json};
use shared_types::{
    AppError, DebtTargetInputs, DebtTargetResult, PricingConfig, PricingInputs, PricingResult,
};
use std::sync::Arc;

use crate::error_convert::json_rejection;
use crate::pricing::{compute_break_even, units_to_target};

// ---------------------------------------------------------------------------
// GET /api/pricing/break-even: break-even from configured constants
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/pricing/break-even",
    responses(
        (status = 200, description = "Break-even quantity for the configured inputs", body = PricingResult),
        (status = 422, description = "Configured inputs are invalid", body = AppError)
    ),
    tag = "pricing"
)]
#[tracing::instrument(skip_all)]
pub async fn configured_break_even(
    State(pricing): State<Arc<PricingConfig>>,
) -> Result<Json<PricingResult>, AppError> {
    let result = compute_break_even(&pricing.pricing_inputs())?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// POST /api/pricing/break-even: break-even from supplied inputs
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/pricing/break-even",
    request_body = PricingInputs,
    responses(
        (status = 200, description = "Break-even quantity", body = PricingResult),
        (status = 400, description = "Body is not valid JSON", body = AppError),
        (status = 422, description = "Price does not exceed variable cost, or a cost is missing or negative", body = AppError)
    ),
    tag = "pricing"
)]
#[tracing::instrument(skip_all)]
pub async fn break_even(
    payload: Result<Json<PricingInputs>, JsonRejection>,
) -> Result<Json<PricingResult>, AppError> {
    let Json(body) = payload.map_err(|r| json_rejection(r, AppError::invalid_pricing_input))?;
    let result = compute_break_even(&body)?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// POST /api/pricing/units-to-target: units needed to clear a debt target
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/pricing/units-to-target",
    request_body = DebtTargetInputs,
    responses(
        (status = 200, description = "Units required to reach the debt target", body = DebtTargetResult),
        (status = 400, description = "Body is not valid JSON", body = AppError),
        (status = 422, description = "Price does not exceed acquisition cost, or an input is missing or negative", body = AppError)
    ),
    tag = "pricing"
)]
#[tracing::instrument(skip_all)]
pub async fn debt_target(
    payload: Result<Json<DebtTargetInputs>, JsonRejection>,
) -> Result<Json<DebtTargetResult>, AppError> {
    let Json(body) = payload.map_err(|r| json_rejection(r, AppError::invalid_pricing_input))?;
    let result = units_to_target(&body)?;
    Ok(Json(result))
}
