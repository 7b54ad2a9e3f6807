use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::pricing::StaticMetric;

/// Default number of rows in the demo chart.
pub const DEFAULT_SERIES_POINTS: u32 = 20;

/// Upper bound on requested demo chart rows.
pub const MAX_SERIES_POINTS: u32 = 500;

/// Column names of the demo chart, in row order.
pub const DEMO_SERIES_COLUMNS: &[&str] = &["revenue", "cost", "margin"];

/// Everything the dashboard page displays, computed from the pricing config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DashboardMetrics {
    pub price: Decimal,
    pub variable_cost: Decimal,
    pub fixed_cost: Decimal,
    /// `price - variable_cost`.
    pub margin_per_unit: Decimal,
    pub break_even_units: u64,
    pub acquisition_cost: Decimal,
    pub debt_target: Decimal,
    /// `price - acquisition_cost`.
    pub profit_per_unit: Decimal,
    pub units_to_target: u64,
    pub highlights: Vec<StaticMetric>,
}

/// Query parameters for the demo chart series.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct DemoSeriesParams {
    /// Number of rows (1..=500, default 20).
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 500, message = "points must be between 1 and 500"))
    )]
    pub points: Option<u32>,
    /// Fixes the random sequence so repeated calls return the same series.
    pub seed: Option<u64>,
}

/// One row of the demo chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DemoSeriesPoint {
    pub index: u32,
    /// One value per entry of `columns`.
    pub values: Vec<f64>,
}

/// Randomly generated chart data for the dashboard demo panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DemoSeries {
    pub columns: Vec<String>,
    pub points: Vec<DemoSeriesPoint>,
}
