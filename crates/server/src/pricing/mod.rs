pub mod engine;

pub use engine::{compute_break_even, units_to_target, PricingError, PricingOutcome};
