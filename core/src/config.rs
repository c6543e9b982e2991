//! Client configuration.
//!
//! The base URL is an explicit value handed to `SiteClient::new`, read once
//! at startup by the host.

use std::env;

use crate::error::ApiError;

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "AGENCY_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read `AGENCY_API_BASE_URL`, falling back to the development address.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = ApiConfig::default().with_base_url("https://api.example.com/v1/");
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn validation_rejects_bad_urls() {
        assert!(ApiConfig::default().with_base_url("").validate().is_err());
        let err = ApiConfig::default()
            .with_base_url("ftp://example.com")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
