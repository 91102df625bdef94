use shared_types::AppConfig;
use std::sync::OnceLock;
use tracing::{debug, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse `config.toml` contents. A parse failure falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        warn!(error = %e, "failed to parse config.toml; using defaults");
        AppConfig::default()
    })
}

/// Parse the embedded config and store it in the global `OnceLock`.
/// `api_override` (a build-time variable) replaces the configured base URL.
/// Only the first call has effect.
pub fn load_config(contents: &str, api_override: Option<&str>) -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_config(contents);
        if let Some(url) = api_override {
            config = config.with_base_url(url);
        }
        debug!(base_url = %config.api.base_url, features = ?config.features, "config loaded");
        config
    })
}

/// The loaded config, or defaults if `load_config` has not run yet.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
