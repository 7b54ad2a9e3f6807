use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables all
/// optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces to an OTLP collector.
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the interactive API reference at `/docs`.
    #[serde(default)]
    pub docs: bool,
}
