//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::time::Duration;

use serde::Deserialize;

use crate::breaker::BreakerConfig;
use crate::error::ConfigError;

/// Log levels accepted in `logging.level` and `LOG_LEVEL`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Access token for the breaker-guarded external resource class.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Cache TTL settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Circuit breaker settings.
    #[serde(default)]
    pub breaker: BreakerSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breaker.failure_threshold == 0 {
            return Err(ConfigError::ValidationError {
                message: "breaker.failure_threshold must be at least 1".to_string(),
            });
        }

        for (name, secs) in self.cache.named_ttls() {
            if secs == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("cache.{name} must be at least 1 second"),
                });
            }
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

/// Cache TTLs in seconds, one per handler family.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// TTL for entries no tool owns, such as the `anime://examples` index.
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,

    /// `get_anime_component` results.
    #[serde(default = "long_ttl_secs")]
    pub component_ttl_secs: u64,

    /// `list_anime_components` results.
    #[serde(default = "long_ttl_secs")]
    pub list_ttl_secs: u64,

    /// `get_anime_example` results.
    #[serde(default = "example_ttl_secs")]
    pub example_ttl_secs: u64,

    /// `search_anime_examples` results.
    #[serde(default = "search_ttl_secs")]
    pub search_ttl_secs: u64,

    /// `get_anime_docs` results.
    #[serde(default = "long_ttl_secs")]
    pub docs_ttl_secs: u64,
}

impl CacheConfig {
    fn named_ttls(&self) -> [(&'static str, u64); 6] {
        [
            ("default_ttl_secs", self.default_ttl_secs),
            ("component_ttl_secs", self.component_ttl_secs),
            ("list_ttl_secs", self.list_ttl_secs),
            ("example_ttl_secs", self.example_ttl_secs),
            ("search_ttl_secs", self.search_ttl_secs),
            ("docs_ttl_secs", self.docs_ttl_secs),
        ]
    }

    /// Converts the seconds fields into durations.
    #[must_use]
    pub const fn ttls(&self) -> CacheTtls {
        CacheTtls {
            default: Duration::from_secs(self.default_ttl_secs),
            component: Duration::from_secs(self.component_ttl_secs),
            list: Duration::from_secs(self.list_ttl_secs),
            example: Duration::from_secs(self.example_ttl_secs),
            search: Duration::from_secs(self.search_ttl_secs),
            docs: Duration::from_secs(self.docs_ttl_secs),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            component_ttl_secs: long_ttl_secs(),
            list_ttl_secs: long_ttl_secs(),
            example_ttl_secs: example_ttl_secs(),
            search_ttl_secs: search_ttl_secs(),
            docs_ttl_secs: long_ttl_secs(),
        }
    }
}

const fn default_ttl_secs() -> u64 {
    5 * 60
}

const fn long_ttl_secs() -> u64 {
    60 * 60
}

const fn example_ttl_secs() -> u64 {
    30 * 60
}

const fn search_ttl_secs() -> u64 {
    15 * 60
}

/// Per-method cache TTLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    /// Fallback TTL.
    pub default: Duration,
    /// Component lookups.
    pub component: Duration,
    /// Component listings.
    pub list: Duration,
    /// Example lookups.
    pub example: Duration,
    /// Searches.
    pub search: Duration,
    /// Documentation topics.
    pub docs: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        CacheConfig::default().ttls()
    }
}

/// Circuit breaker settings for the `external` resource class.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakerSettings {
    /// Consecutive failures before the breaker opens.
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: u32,

    /// Cooldown in seconds before a trial call is admitted.
    #[serde(default = "default_reset_timeout_secs")]
    pub reset_timeout_secs: u64,
}

impl BreakerSettings {
    /// Converts into the breaker's runtime configuration.
    #[must_use]
    pub const fn to_breaker_config(&self) -> BreakerConfig {
        BreakerConfig {
            failure_threshold: self.failure_threshold,
            reset_timeout: Duration::from_secs(self.reset_timeout_secs),
        }
    }
}

impl Default for BreakerSettings {
    fn default() -> Self {
        Self {
            failure_threshold: default_failure_threshold(),
            reset_timeout_secs: default_reset_timeout_secs(),
        }
    }
}

const fn default_failure_threshold() -> u32 {
    crate::breaker::DEFAULT_FAILURE_THRESHOLD
}

const fn default_reset_timeout_secs() -> u64 {
    crate::breaker::DEFAULT_RESET_TIMEOUT.as_secs()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.access_token.is_none());
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Test config",
            "access_token": "ghp_example",
            "cache": {
                "default_ttl_secs": 120,
                "component_ttl_secs": 1800,
                "list_ttl_secs": 1800,
                "example_ttl_secs": 900,
                "search_ttl_secs": 300,
                "docs_ttl_secs": 7200
            },
            "breaker": {
                "failure_threshold": 3,
                "reset_timeout_secs": 30
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.access_token.as_deref(), Some("ghp_example"));

        let ttls = config.cache.ttls();
        assert_eq!(ttls.default, Duration::from_secs(120));
        assert_eq!(ttls.search, Duration::from_secs(300));
        assert_eq!(ttls.docs, Duration::from_secs(7200));

        let breaker = config.breaker.to_breaker_config();
        assert_eq!(breaker.failure_threshold, 3);
        assert_eq!(breaker.reset_timeout, Duration::from_secs(30));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn cache_config_defaults() {
        let ttls = CacheTtls::default();
        assert_eq!(ttls.default, Duration::from_secs(300));
        assert_eq!(ttls.component, Duration::from_secs(3600));
        assert_eq!(ttls.list, Duration::from_secs(3600));
        assert_eq!(ttls.example, Duration::from_secs(1800));
        assert_eq!(ttls.search, Duration::from_secs(900));
        assert_eq!(ttls.docs, Duration::from_secs(3600));
    }

    #[test]
    fn breaker_settings_defaults() {
        let breaker = BreakerSettings::default().to_breaker_config();
        assert_eq!(breaker, BreakerConfig::default());
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn reject_zero_threshold() {
        let json = r#"{ "breaker": { "failure_threshold": 0 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("failure_threshold"));
    }

    #[test]
    fn reject_zero_ttl() {
        let json = r#"{ "cache": { "search_ttl_secs": 0 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("search_ttl_secs"));
    }

    #[test]
    fn reject_invalid_log_level() {
        let json = r#"{ "logging": { "level": "loud" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{
            "unknown_field": "value"
        }"#;

        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
