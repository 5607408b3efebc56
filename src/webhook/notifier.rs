//! Posting notifications to the webhook.

use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};

use crate::config::defaults;
use crate::message::{Message, to_wire_format};

use super::{
    HttpClient, HttpRequest, ReqwestClient, SendError, TOKEN_HEADER, TargetError, WebhookTarget,
};

/// Sends notifications to one webhook target.
///
/// Holds the target, the fixed header set and the HTTP transport. Each
/// [`send`](WebhookClient::send) is a single request with no retry.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```
/// use zoom_notify::webhook::WebhookClient;
///
/// let client = WebhookClient::new("https://inbots.zoom.us/incoming/hook/abc", "secret").unwrap();
/// assert_eq!(client.target().endpoint().host_str(), Some("inbots.zoom.us"));
/// ```
#[derive(Debug)]
pub struct WebhookClient<H = ReqwestClient> {
    http: H,
    target: WebhookTarget,
    headers: HeaderMap,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client whose requests time out after
    /// [`defaults::TIMEOUT_SECS`](crate::config::defaults::TIMEOUT_SECS).
    ///
    /// # Errors
    ///
    /// Returns [`TargetError`] if the endpoint or token is invalid, or if the
    /// HTTP client cannot be built.
    pub fn new(endpoint: &str, token: &str) -> Result<Self, TargetError> {
        Self::with_timeout(endpoint, token, defaults::timeout())
    }

    /// Creates a client whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Same as [`WebhookClient::new`].
    pub fn with_timeout(
        endpoint: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, TargetError> {
        let target = WebhookTarget::new(endpoint, token)?;
        let http = ReqwestClient::with_timeout(timeout).map_err(|e| TargetError::HttpClient {
            reason: e.to_string(),
        })?;
        Ok(Self::from_target(target, http))
    }
}

impl<H> WebhookClient<H> {
    /// Creates a client for an already validated target.
    #[must_use]
    pub fn from_target(target: WebhookTarget, http: H) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(TOKEN_HEADER, target.token().clone());

        Self {
            http,
            target,
            headers,
        }
    }

    /// Returns the target notifications are sent to.
    #[must_use]
    pub const fn target(&self) -> &WebhookTarget {
        &self.target
    }

    /// Returns the HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Builds the request that [`send`](Self::send) would post.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Validation`] for an unknown action token and
    /// [`SendError::Encoding`] if serialization fails.
    pub fn build_request(&self, message: &Message) -> Result<HttpRequest, SendError> {
        let wire = to_wire_format(message)?;
        let body = serde_json::to_vec(&wire)?;

        Ok(HttpRequest::post(self.target.endpoint().clone())
            .with_headers(self.headers.clone())
            .with_body(body))
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Posts `message` to the webhook once.
    ///
    /// # Errors
    ///
    /// - [`SendError::Validation`] / [`SendError::Encoding`] before any request is made
    /// - [`SendError::Transport`] if the endpoint cannot be reached
    /// - [`SendError::Delivery`] if the response status is not 200
    pub async fn send(&self, message: &Message) -> Result<(), SendError> {
        let request = self.build_request(message)?;

        tracing::debug!("Posting notification to {}", self.target.endpoint());
        let response = self.http.request(request).await?;

        if response.is_ok() {
            return Ok(());
        }

        Err(SendError::Delivery {
            status: response.status,
            endpoint: self.target.endpoint().clone(),
            body: response.body_text().map(ToString::to_string),
        })
    }
}
