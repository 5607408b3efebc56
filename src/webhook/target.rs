//! Validated webhook endpoint and credential.

use std::fmt;

use http::HeaderValue;
use url::Url;

use super::TargetError;

/// Header carrying the webhook auth token.
pub const TOKEN_HEADER: &str = "x-zoom-token";

/// Where notifications are posted and how they authenticate.
///
/// Both parts are validated in [`WebhookTarget::new`] and never change
/// afterwards. Formatting with `{}` or `{:?}` never prints the token.
#[derive(Clone)]
pub struct WebhookTarget {
    endpoint: Url,
    token: HeaderValue,
}

impl WebhookTarget {
    /// Validates an endpoint URL and auth token.
    ///
    /// # Errors
    ///
    /// - [`TargetError::MissingCredential`] if `token` is empty, whatever the endpoint
    /// - [`TargetError::InvalidEndpoint`] if `endpoint` is not an http(s) URL
    /// - [`TargetError::InvalidCredential`] if `token` cannot be a header value
    pub fn new(endpoint: &str, token: &str) -> Result<Self, TargetError> {
        if token.is_empty() {
            return Err(TargetError::MissingCredential);
        }

        let endpoint = parse_endpoint(endpoint)?;

        let mut token =
            HeaderValue::from_str(token).map_err(|e| TargetError::InvalidCredential {
                reason: e.to_string(),
            })?;
        token.set_sensitive(true);

        Ok(Self { endpoint, token })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the auth token as a header value (marked sensitive).
    #[must_use]
    pub const fn token(&self) -> &HeaderValue {
        &self.token
    }
}

impl fmt::Debug for WebhookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookTarget")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for WebhookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (token: <redacted>)", self.endpoint)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, TargetError> {
    let invalid = |reason: String| TargetError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }

    if !url.has_host() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}
