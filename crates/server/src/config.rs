use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Read the config file named by `CONFIG_PATH` (default `config.toml`),
/// apply the `BIND_ADDR` override, and store the result in the global
/// `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file yields `AppConfig::default()`.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = read_config_file(Path::new(&path));

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            if !addr.trim().is_empty() {
                config.server.bind_addr = addr.trim().to_string();
            }
        }

        tracing::info!(
            telemetry = config.features.telemetry,
            docs = config.features.docs,
            bind_addr = %config.server.bind_addr,
            "configuration loaded"
        );
        config
    })
}

/// Parse `path`, falling back to defaults when it is absent or malformed.
pub fn read_config_file(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config file not found, using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}
