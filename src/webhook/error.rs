//! Error types for webhook delivery.

use thiserror::Error;

use crate::message::ValidationError;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level, before any
/// response status could be inspected.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// The webhook endpoint or credential is unusable.
///
/// Raised once when a [`WebhookTarget`](super::WebhookTarget) is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// No auth token was provided.
    #[error("Webhook token is missing")]
    MissingCredential,

    /// The auth token cannot be sent as a header value.
    #[error("Webhook token is not a valid header value: {reason}")]
    InvalidCredential {
        /// Reason for invalidity
        reason: String,
    },

    /// The HTTP transport for the target could not be created.
    #[error("Failed to init HTTP client: {reason}")]
    HttpClient {
        /// Reason for the failure
        reason: String,
    },

    /// The endpoint is not a usable URL.
    #[error("Invalid webhook endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The endpoint as given
        endpoint: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Error type for a single notification delivery.
#[derive(Debug, Error)]
pub enum SendError {
    /// The message could not be converted to its wire format.
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),

    /// The wire message could not be serialized.
    #[error("Failed to encode message: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The endpoint could not be reached.
    #[error("Failed to reach webhook: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with something other than 200 OK.
    #[error("HTTP request failed: status: {status}: url={endpoint}")]
    Delivery {
        /// Response status code
        status: http::StatusCode,
        /// Endpoint the request was posted to
        endpoint: url::Url,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },
}

impl SendError {
    /// Returns the response status for delivery failures.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Delivery { status, .. } => Some(*status),
            _ => None,
        }
    }
}
