use serde::{Deserialize, Serialize};

use crate::Language;

/// Base URL used when `config.toml` does not name one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Where the REST backend lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub default_language: Language,
}

/// Feature flags controlling which optional screens are shown.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file hides all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Public `/statistics` page and its navbar link.
    #[serde(default)]
    pub statistics: bool,
    /// Public `/submit-report` form for unauthenticated visitors.
    #[serde(default)]
    pub public_reports: bool,
    /// English/Arabic switch in the navbars.
    #[serde(default)]
    pub language_toggle: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Replace the configured base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api.base_url = trimmed.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.statistics);
        assert!(!flags.public_reports);
        assert!(!flags.language_toggle);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.ui.default_language, Language::En);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            statistics = true
            "#,
        )
        .unwrap();
        assert!(config.features.statistics);
        assert!(!config.features.public_reports);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://api.monitor360.org"

            [ui]
            default_language = "ar"

            [features]
            statistics = true
            public_reports = true
            language_toggle = true
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.monitor360.org");
        assert_eq!(config.ui.default_language, Language::Ar);
        assert!(config.features.public_reports);
        assert!(config.features.language_toggle);
    }

    #[test]
    fn base_url_override_trims_trailing_slash() {
        let config = AppConfig::default().with_base_url("https://example.org/api/");
        assert_eq!(config.api.base_url, "https://example.org/api");
    }

    #[test]
    fn blank_override_keeps_configured_url() {
        let config = AppConfig::default().with_base_url("   ");
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }
}
