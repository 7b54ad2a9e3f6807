use serde::{Deserialize, Serialize};

use crate::feature_flags::FeatureFlags;
use crate::pricing::PricingConfig;

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub pricing: PricingConfig,
}
