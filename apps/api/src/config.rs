use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Origin allowed to call the API from a browser (the intake form).
    pub cors_origin: String,
    pub request_timeout: Duration,
    /// Serves the alternate age-band rule set at `/api/v1/recommendation/legacy`.
    pub enable_legacy_rules: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            rust_log: "info".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
            enable_legacy_rules: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => defaults.request_timeout,
        };

        let enable_legacy_rules = match lookup("ENABLE_LEGACY_RULES") {
            Some(v) => parse_flag(&v)
                .with_context(|| format!("ENABLE_LEGACY_RULES must be true or false, got '{v}'"))?,
            None => defaults.enable_legacy_rules,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_origin: lookup("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            request_timeout,
            enable_legacy_rules,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.cors_origin, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(!config.enable_legacy_rules);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("CORS_ORIGIN", "https://advisor.example.com"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("ENABLE_LEGACY_RULES", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "https://advisor.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.enable_legacy_rules);
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = load(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_flag_fails() {
        let err = load(&[("ENABLE_LEGACY_RULES", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("ENABLE_LEGACY_RULES"));
    }
}
