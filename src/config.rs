//! Configuration management for the `PlaceScout` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PlaceScoutError;
use crate::models::place::{DEFAULT_LIMIT, DEFAULT_RADIUS_METERS};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `PlaceScout` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceScoutConfig {
    /// Geoapify API configuration
    #[serde(default)]
    pub geoapify: GeoapifyConfig,
    /// Tavily API configuration
    #[serde(default)]
    pub tavily: TavilyConfig,
    /// Report cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Geoapify API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoapifyConfig {
    /// Geoapify API key (required)
    #[serde(default)]
    pub api_key: String,
    /// Geocoding endpoint URL
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,
    /// Places endpoint URL
    #[serde(default = "default_places_url")]
    pub places_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
    /// Search radius around the geocoded coordinate in meters
    #[serde(default = "default_search_radius")]
    pub radius_meters: u32,
    /// Maximum number of places to request per search
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

/// Tavily API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TavilyConfig {
    /// Tavily API key (required)
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the Tavily API
    #[serde(default = "default_tavily_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
}

/// Report cache configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether finished reports are cached in memory
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Cache TTL in minutes
    #[serde(default = "default_cache_ttl")]
    pub ttl_minutes: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_geocode_url() -> String {
    "https://api.geoapify.com/v1/geocode/search".to_string()
}

fn default_places_url() -> String {
    "https://api.geoapify.com/v2/places".to_string()
}

fn default_tavily_base_url() -> String {
    "https://api.tavily.com".to_string()
}

fn default_request_timeout() -> u32 {
    10
}

fn default_search_radius() -> u32 {
    DEFAULT_RADIUS_METERS
}

fn default_search_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeoapifyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            geocode_url: default_geocode_url(),
            places_url: default_places_url(),
            timeout_seconds: default_request_timeout(),
            radius_meters: default_search_radius(),
            limit: default_search_limit(),
        }
    }
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tavily_base_url(),
            timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_minutes: default_cache_ttl(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for PlaceScoutConfig {
    fn default() -> Self {
        Self {
            geoapify: GeoapifyConfig::default(),
            tavily: TavilyConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PlaceScoutConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with PLACESCOUT_ prefix,
        // e.g. PLACESCOUT_GEOAPIFY__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("PLACESCOUT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PlaceScoutConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("placescout").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.geoapify.geocode_url.is_empty() {
            self.geoapify.geocode_url = default_geocode_url();
        }
        if self.geoapify.places_url.is_empty() {
            self.geoapify.places_url = default_places_url();
        }
        if self.geoapify.timeout_seconds == 0 {
            self.geoapify.timeout_seconds = default_request_timeout();
        }
        if self.geoapify.radius_meters == 0 {
            self.geoapify.radius_meters = default_search_radius();
        }
        if self.geoapify.limit == 0 {
            self.geoapify.limit = default_search_limit();
        }
        if self.tavily.base_url.is_empty() {
            self.tavily.base_url = default_tavily_base_url();
        }
        if self.tavily.timeout_seconds == 0 {
            self.tavily.timeout_seconds = default_request_timeout();
        }
        if self.cache.ttl_minutes == 0 {
            self.cache.ttl_minutes = default_cache_ttl();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        if self.geoapify.api_key.is_empty() {
            return Err(PlaceScoutError::config(
                "Geoapify API key is missing. Set geoapify.api_key in the config file or the PLACESCOUT_GEOAPIFY__API_KEY environment variable."
            ).into());
        }

        if self.geoapify.api_key.len() < 8 || self.geoapify.api_key.len() > 100 {
            return Err(PlaceScoutError::config(
                "Geoapify API key appears to be invalid. Please check your API key.",
            )
            .into());
        }

        if self.tavily.api_key.is_empty() {
            return Err(PlaceScoutError::config(
                "Tavily API key is missing. Set tavily.api_key in the config file or the PLACESCOUT_TAVILY__API_KEY environment variable."
            ).into());
        }

        if self.tavily.api_key.len() < 8 || self.tavily.api_key.len() > 100 {
            return Err(PlaceScoutError::config(
                "Tavily API key appears to be invalid. Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.geoapify.timeout_seconds > 300 || self.tavily.timeout_seconds > 300 {
            return Err(
                PlaceScoutError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.geoapify.radius_meters > 100_000 {
            return Err(
                PlaceScoutError::config("Search radius cannot exceed 100000 meters").into(),
            );
        }

        if self.geoapify.limit > 100 {
            return Err(PlaceScoutError::config("Search limit cannot exceed 100").into());
        }

        if self.cache.ttl_minutes > 10080 {
            return Err(
                PlaceScoutError::config("Cache TTL cannot exceed 10080 minutes (1 week)").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlaceScoutError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        for url in [
            &self.geoapify.geocode_url,
            &self.geoapify.places_url,
            &self.tavily.base_url,
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(PlaceScoutError::config(format!(
                    "Endpoint URL '{url}' must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_keys() -> PlaceScoutConfig {
        let mut config = PlaceScoutConfig::default();
        config.geoapify.api_key = "geoapify_test_key_123".to_string();
        config.tavily.api_key = "tavily_test_key_123".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = PlaceScoutConfig::default();
        assert_eq!(
            config.geoapify.geocode_url,
            "https://api.geoapify.com/v1/geocode/search"
        );
        assert_eq!(config.geoapify.places_url, "https://api.geoapify.com/v2/places");
        assert_eq!(config.geoapify.timeout_seconds, 10);
        assert_eq!(config.geoapify.radius_meters, 5000);
        assert_eq!(config.geoapify.limit, 10);
        assert_eq!(config.tavily.base_url, "https://api.tavily.com");
        assert!(config.cache.enabled);
        assert_eq!(config.cache.ttl_minutes, 30);
        assert_eq!(config.logging.level, "info");
        assert!(config.geoapify.api_key.is_empty());
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let config = PlaceScoutConfig::default();
        let result = config.validate_api_keys();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Geoapify API key"));
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = config_with_keys();
        config.tavily.api_key = "short".to_string();
        let result = config.validate_api_keys();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Tavily API key"));
    }

    #[test]
    fn test_config_validation_valid_api_keys() {
        let config = config_with_keys();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_keys();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = config_with_keys();
        config.geoapify.timeout_seconds = 500; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = config_with_keys();
        config.tavily.base_url = "ftp://api.tavily.com".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTP or HTTPS"));
    }

    #[test]
    fn test_apply_defaults_fills_zeroed_values() {
        let mut config = config_with_keys();
        config.geoapify.timeout_seconds = 0;
        config.geoapify.radius_meters = 0;
        config.cache.ttl_minutes = 0;
        config.apply_defaults();
        assert_eq!(config.geoapify.timeout_seconds, 10);
        assert_eq!(config.geoapify.radius_meters, 5000);
        assert_eq!(config.cache.ttl_minutes, 30);
    }

    #[test]
    fn test_config_path_generation() {
        let path = PlaceScoutConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("placescout"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
