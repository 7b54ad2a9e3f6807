use axum::extract::FromRef;
use shared_types::{AppConfig, PricingConfig};
use std::sync::Arc;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<PricingConfig>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pricing: Arc<PricingConfig>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            pricing: Arc::new(config.pricing.clone()),
        }
    }
}
