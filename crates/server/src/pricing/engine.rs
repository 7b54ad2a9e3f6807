//! Break-even and debt-target unit computations.
//!
//! Both solve a linear cost equation for a unit count:
//!
//! - break-even: `price * q = variable_cost * q + fixed_cost`, so
//!   `q = fixed_cost / (price - variable_cost)`, truncated toward zero.
//! - debt target: `q = debt_target / (price - acquisition_cost)`, rounded up.
//!
//! Inputs are exact decimals. The per-unit margin must be strictly positive;
//! a zero or negative margin has no meaningful unit count and is rejected.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared_types::{DebtTargetInputs, DebtTargetResult, PricingInputs, PricingResult};
use thiserror::Error;

/// Invalid pricing inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("price {price} must exceed {cost_field} {cost}")]
    NonPositiveMargin {
        price: Decimal,
        cost_field: &'static str,
        cost: Decimal,
    },

    #[error("{field} must not be negative (got {value})")]
    NegativeInput { field: &'static str, value: Decimal },

    #[error("unit count is too large to represent")]
    Overflow,
}

impl PricingError {
    /// Name of the input field responsible for the error, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PricingError::NonPositiveMargin { .. } => Some("price"),
            PricingError::NegativeInput { field, .. } => Some(*field),
            PricingError::Overflow => None,
        }
    }
}

/// Result type for pricing operations.
pub type PricingOutcome<T> = Result<T, PricingError>;

/// Compute the break-even unit count.
pub fn compute_break_even(inputs: &PricingInputs) -> PricingOutcome<PricingResult> {
    require_non_negative("variable_cost", inputs.variable_cost)?;
    require_non_negative("fixed_cost", inputs.fixed_cost)?;

    let margin = unit_margin(inputs.price, "variable_cost", inputs.variable_cost)?;
    let quotient = inputs
        .fixed_cost
        .checked_div(margin)
        .ok_or(PricingError::Overflow)?;
    let break_even_quantity = quotient.trunc().to_u64().ok_or(PricingError::Overflow)?;

    tracing::debug!(
        price = %inputs.price,
        variable_cost = %inputs.variable_cost,
        fixed_cost = %inputs.fixed_cost,
        break_even_quantity,
        "computed break-even quantity"
    );

    Ok(PricingResult {
        break_even_quantity,
    })
}

/// Compute how many sales clear `debt_target` at `price - acquisition_cost` profit each.
pub fn units_to_target(inputs: &DebtTargetInputs) -> PricingOutcome<DebtTargetResult> {
    require_non_negative("debt_target", inputs.debt_target)?;
    require_non_negative("acquisition_cost", inputs.acquisition_cost)?;

    let profit_per_unit = unit_margin(inputs.price, "acquisition_cost", inputs.acquisition_cost)?;
    let quotient = inputs
        .debt_target
        .checked_div(profit_per_unit)
        .ok_or(PricingError::Overflow)?;
    let units_to_target = quotient.ceil().to_u64().ok_or(PricingError::Overflow)?;

    tracing::debug!(
        debt_target = %inputs.debt_target,
        profit_per_unit = %profit_per_unit,
        units_to_target,
        "computed units to debt target"
    );

    Ok(DebtTargetResult {
        units_to_target,
        profit_per_unit,
    })
}

fn require_non_negative(field: &'static str, value: Decimal) -> PricingOutcome<()> {
    if value < Decimal::ZERO {
        return Err(PricingError::NegativeInput { field, value });
    }
    Ok(())
}

/// `price - cost`, which must be strictly positive.
fn unit_margin(price: Decimal, cost_field: &'static str, cost: Decimal) -> PricingOutcome<Decimal> {
    let margin = price.checked_sub(cost).ok_or(PricingError::Overflow)?;
    if margin <= Decimal::ZERO {
        return Err(PricingError::NonPositiveMargin {
            price,
            cost_field,
            cost,
        });
    }
    Ok(margin)
}
