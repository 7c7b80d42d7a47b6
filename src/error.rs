//! Error types and handling for the `PlaceScout` application

use thiserror::Error;

/// Application-level errors raised outside the provider call path
#[derive(Error, Debug)]
pub enum PlaceScoutError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl PlaceScoutError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Errors raised while talking to a search provider.
///
/// The `Display` text of a variant doubles as the failure cause quoted in
/// fallback reports, so it must stay readable on its own.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = PlaceScoutError::config("missing API key");
        assert!(matches!(config_err, PlaceScoutError::Config { .. }));

        let validation_err = PlaceScoutError::validation("unknown category");
        assert!(matches!(validation_err, PlaceScoutError::Validation { .. }));
    }

    #[test]
    fn test_provider_error_display_is_self_describing() {
        let network = ProviderError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "Network error: connection refused");

        let api = ProviderError::Api("Geoapify returned HTTP 500".to_string());
        assert_eq!(api.to_string(), "API error: Geoapify returned HTTP 500");

        let parse = ProviderError::Parse("unexpected end of input".to_string());
        assert_eq!(parse.to_string(), "Parse error: unexpected end of input");
    }
}
