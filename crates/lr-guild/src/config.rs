//! Advisor configuration.

/// Environment variable checked first for the API key.
pub const API_KEY_VAR: &str = "LIFERPG_API_KEY";
/// Fallback environment variable for the API key.
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "LIFERPG_MODEL";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for a [`GeminiAdvisor`](crate::GeminiAdvisor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// API key. Without one every call returns its fallback.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// API base URL, without a trailing slash.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl AdvisorConfig {
    /// Read the API key and model from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        config.api_key = non_empty(API_KEY_VAR).or_else(|| non_empty(LEGACY_API_KEY_VAR));
        if let Some(model) = non_empty(MODEL_VAR) {
            config.model = model;
        }
        config
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Returns true if a non-blank API key is set.
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = AdvisorConfig::default();
        assert!(!cfg.has_credentials());
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn primary_key_wins() {
        let cfg = AdvisorConfig::from_vars(vars(&[
            ("LIFERPG_API_KEY", "primary"),
            ("API_KEY", "legacy"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn legacy_key_fallback() {
        let cfg = AdvisorConfig::from_vars(vars(&[("API_KEY", "legacy")]));
        assert_eq!(cfg.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn blank_key_is_no_key() {
        let cfg = AdvisorConfig::from_vars(vars(&[("LIFERPG_API_KEY", "  ")]));
        assert!(cfg.api_key.is_none());
        assert!(!AdvisorConfig::default().with_api_key("").has_credentials());
    }

    #[test]
    fn model_override() {
        let cfg = AdvisorConfig::from_vars(vars(&[("LIFERPG_MODEL", "gemini-pro")]));
        assert_eq!(cfg.model, "gemini-pro");
    }

    #[test]
    fn builder_methods() {
        let cfg = AdvisorConfig::default()
            .with_api_key("k")
            .with_model("m")
            .with_endpoint("http://localhost:9/")
            .with_timeout(5);
        assert!(cfg.has_credentials());
        assert_eq!(cfg.model, "m");
        assert_eq!(cfg.endpoint, "http://localhost:9");
        assert_eq!(cfg.timeout_secs, 5);
    }
}
