use serde::{Deserialize, Serialize};

/// Service-wide configuration, loaded from `{data_dir}/config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// URL of the widget loader script baked into embed snippets.
    pub widget_script_url: String,
    /// API base URL the widget sends conversation traffic to.
    pub api_base_url: String,
    /// Default bind host for `chatforge serve`.
    pub host: String,
    /// Default bind port for `chatforge serve`.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            widget_script_url: "https://cdn.chatforge.dev/widget.js".to_string(),
            api_base_url: "https://api.chatforge.dev".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert!(config.widget_script_url.ends_with("widget.js"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ServiceConfig = toml::from_str(r#"port = 8080"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.api_base_url.starts_with("https://"));
    }
}
