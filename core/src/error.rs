//! Error types for the site API client.
//!
//! # Design
//! Every non-2xx response is classified into one variant by status code, in
//! a fixed precedence: 429, then 400, then 5xx, then anything else. The
//! `Display` text of each classified variant is the user-facing message, so
//! the contact form can show it verbatim. Transport failures get their own
//! `Network` variant because they carry no envelope at all.

use thiserror::Error;

use crate::envelope::FieldErrors;

pub const NETWORK_MESSAGE: &str =
    "Network error. Please check your connection and ensure the backend is running.";
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests. Please try again later.";
pub const VALIDATION_MESSAGE: &str = "Validation failed";
pub const SERVER_MESSAGE: &str = "Server error. Please try again later.";
pub const GENERIC_MESSAGE: &str = "An error occurred";

/// Shown by the contact form in place of any rate-limit text.
pub const RATE_LIMIT_USER_MESSAGE: &str =
    "You have submitted too many requests. Please wait an hour before trying again.";

/// Errors returned by `SiteClient` parse methods and `Backend` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, reset).
    #[error("{0}")]
    Network(String),

    /// The server returned 429.
    #[error("{0}")]
    RateLimited(String),

    /// The server returned 400. `fields` keeps the per-field messages.
    #[error("{message}")]
    Validation { message: String, fields: FieldErrors },

    /// The server returned a 5xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Any other non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The response body could not be deserialized into an envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn network() -> Self {
        Self::Network(NETWORK_MESSAGE.to_string())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited(_) => Some(429),
            Self::Validation { .. } => Some(400),
            Self::Server { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::Network(_)
            | Self::Deserialization(_)
            | Self::Serialization(_)
            | Self::Config(_) => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Text to show an end user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited(_) => RATE_LIMIT_USER_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Failure of the transport itself, before any HTTP status exists.
#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

impl From<TransportError> for ApiError {
    fn from(_: TransportError) -> Self {
        ApiError::network()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_errors_display_their_message() {
        assert_eq!(ApiError::RateLimited("slow down".into()).to_string(), "slow down");
        let err = ApiError::Server {
            status: 503,
            message: SERVER_MESSAGE.into(),
        };
        assert_eq!(err.to_string(), SERVER_MESSAGE);
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn rate_limit_has_specialized_user_message() {
        let err = ApiError::RateLimited("slow down".into());
        assert!(err.is_rate_limited());
        assert_eq!(err.user_message(), RATE_LIMIT_USER_MESSAGE);

        let err = ApiError::Http {
            status: 404,
            message: "Not here".into(),
        };
        assert_eq!(err.user_message(), "Not here");
    }

    #[test]
    fn transport_error_becomes_network_error() {
        let err: ApiError = TransportError("connection refused".into()).into();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.to_string(), NETWORK_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
