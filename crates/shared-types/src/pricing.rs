use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Break-even
// ---------------------------------------------------------------------------

/// Inputs to the break-even formula `q = fixed_cost / (price - variable_cost)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PricingInputs {
    /// Selling price per unit.
    pub price: Decimal,
    /// Cost incurred per unit produced or sold.
    pub variable_cost: Decimal,
    /// Cost incurred independent of unit volume.
    pub fixed_cost: Decimal,
}

/// Break-even unit count, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PricingResult {
    pub break_even_quantity: u64,
}

// ---------------------------------------------------------------------------
// Debt target
// ---------------------------------------------------------------------------

/// Inputs for "how many sales clear a debt target".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DebtTargetInputs {
    pub debt_target: Decimal,
    pub price: Decimal,
    /// Cost to acquire one unit for resale.
    pub acquisition_cost: Decimal,
}

/// Units required to clear the debt target, rounded up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DebtTargetResult {
    pub units_to_target: u64,
    pub profit_per_unit: Decimal,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// A static display metric shown on the dashboard as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StaticMetric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl StaticMetric {
    fn new(label: &str, value: &str, delta: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            delta: delta.map(str::to_string),
        }
    }
}

/// Pricing constants read from the `[pricing]` table of `config.toml`.
///
/// Passed to the calculator at call time; nothing in the engine reads a
/// global. Missing fields fall back to the dashboard's reference figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct PricingConfig {
    pub price: Decimal,
    pub variable_cost: Decimal,
    pub fixed_cost: Decimal,
    pub acquisition_cost: Decimal,
    pub debt_target: Decimal,
    pub highlights: Vec<StaticMetric>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            price: Decimal::new(10450, 2),
            variable_cost: Decimal::new(10, 0),
            fixed_cost: Decimal::new(50_000, 0),
            acquisition_cost: Decimal::new(25, 0),
            debt_target: Decimal::new(20_000, 0),
            highlights: vec![
                StaticMetric::new("Interim Distribution Sought", "$700,000", None),
                StaticMetric::new("Estate Debt Target", "$20,000", Some("-$20,000")),
                StaticMetric::new("Unit Price", "$104.50", None),
                StaticMetric::new("Acquisition Cost", "$25.00", None),
            ],
        }
    }
}

impl PricingConfig {
    pub fn pricing_inputs(&self) -> PricingInputs {
        PricingInputs {
            price: self.price,
            variable_cost: self.variable_cost,
            fixed_cost: self.fixed_cost,
        }
    }

    pub fn debt_target_inputs(&self) -> DebtTargetInputs {
        DebtTargetInputs {
            debt_target: self.debt_target,
            price: self.price,
            acquisition_cost: self.acquisition_cost,
        }
    }
}
