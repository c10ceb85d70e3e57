use crate::error::BandsyncError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming the analysis service endpoint
pub const UPSTREAM_URL_ENV: &str = "PYTHON_SERVICE_URL";

/// Placeholder endpoint used when `PYTHON_SERVICE_URL` is unset
pub const DEFAULT_UPSTREAM_URL: &str = "http://your-python-service.com/analyze";

/// Bandsync relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Analysis service URL that uploads are forwarded to
    pub upstream_url: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, BandsyncError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Resolve configuration through an arbitrary key lookup
    ///
    /// Missing, blank or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            upstream_url: value(UPSTREAM_URL_ENV).unwrap_or(defaults.upstream_url),
            server_host: value("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: value("SERVER_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            log_dir: value("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: value("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Whether uploads would be forwarded to the placeholder endpoint
    pub fn upstream_is_default(&self) -> bool {
        self.upstream_url == DEFAULT_UPSTREAM_URL
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), BandsyncError> {
        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://") {
            return Err(BandsyncError::config(format!(
                "{} must start with http:// or https://",
                UPSTREAM_URL_ENV
            )));
        }

        if self.server_port == 0 {
            return Err(BandsyncError::config("Server port cannot be 0"));
        }

        if self.log_level.trim().is_empty() {
            return Err(BandsyncError::config("Log level cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.upstream_url, "http://your-python-service.com/analyze");
        assert!(config.upstream_is_default());
    }

    #[test]
    fn test_unset_upstream_uses_placeholder() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert!(config.upstream_is_default());
    }

    #[test]
    fn test_upstream_override() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "PYTHON_SERVICE_URL",
            "http://analysis.internal:5000/analyze",
        )]));
        assert_eq!(config.upstream_url, "http://analysis.internal:5000/analyze");
        assert!(!config.upstream_is_default());
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PYTHON_SERVICE_URL", ""),
            ("SERVER_HOST", "  "),
            ("LOG_DIR", ""),
            ("LOG_LEVEL", ""),
        ]));
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.log_dir, PathBuf::from("./log"));
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("SERVER_HOST", "127.0.0.1"),
        ]));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.upstream_url = "ftp://example.com".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.server_port = 0;
        assert!(invalid_config.validate().is_err());
    }
}
