//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// reqwest sets no overall request timeout by default, so every
/// constructor here takes one explicitly.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use zoom_notify::webhook::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let url = Url::parse("https://inbots.zoom.us/incoming/hook/abc")?;
/// let request = HttpRequest::post(url).with_body(b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates an HTTP client whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;
        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// The caller is responsible for configuring a timeout.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers);

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
