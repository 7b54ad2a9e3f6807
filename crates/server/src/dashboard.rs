//! Dashboard assembly: display metrics from the pricing config and the
//! randomly generated demo chart series.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{
    DashboardMetrics, DemoSeries, DemoSeriesPoint, PricingConfig, DEMO_SERIES_COLUMNS,
};

use crate::pricing::{compute_break_even, units_to_target, PricingOutcome};

/// Compute every dashboard metric from `config`.
pub fn build_metrics(config: &PricingConfig) -> PricingOutcome<DashboardMetrics> {
    let break_even = compute_break_even(&config.pricing_inputs())?;
    let debt = units_to_target(&config.debt_target_inputs())?;

    Ok(DashboardMetrics {
        price: config.price,
        variable_cost: config.variable_cost,
        fixed_cost: config.fixed_cost,
        margin_per_unit: config.price - config.variable_cost,
        break_even_units: break_even.break_even_quantity,
        acquisition_cost: config.acquisition_cost,
        debt_target: config.debt_target,
        profit_per_unit: debt.profit_per_unit,
        units_to_target: debt.units_to_target,
        highlights: config.highlights.clone(),
    })
}

/// Random walk over [`DEMO_SERIES_COLUMNS`], one row per point.
pub fn demo_series<R: Rng>(rng: &mut R, points: u32) -> DemoSeries {
    let mut current = vec![0.0_f64; DEMO_SERIES_COLUMNS.len()];
    let rows = (0..points)
        .map(|index| {
            for value in current.iter_mut() {
                *value += rng.gen_range(-1.0..1.0);
            }
            DemoSeriesPoint {
                index,
                values: current.clone(),
            }
        })
        .collect();

    DemoSeries {
        columns: DEMO_SERIES_COLUMNS.iter().map(|c| c.to_string()).collect(),
        points: rows,
    }
}

/// Demo series from a fixed seed, or from entropy when `seed` is `None`.
pub fn seeded_demo_series(points: u32, seed: Option<u64>) -> DemoSeries {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    demo_series(&mut rng, points)
}
