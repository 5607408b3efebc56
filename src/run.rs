//! Application execution logic.
//!
//! Composes the notification for the configured build and posts it once.

use thiserror::Error;

use zoom_notify::config::ValidatedConfig;
use zoom_notify::message::{Message, ValidationError, compose};
use zoom_notify::webhook::{HttpClient, HttpError, ReqwestClient, SendError, WebhookClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The build metadata cannot be turned into a message.
    #[error("Failed to compose message: {0}")]
    Compose(#[source] ValidationError),

    /// The HTTP client could not be created.
    #[error("Failed to init client: {0}")]
    HttpClient(#[source] HttpError),

    /// The notification could not be delivered.
    #[error("Failed to send message: {0}")]
    Send(#[source] SendError),
}

/// Executes the plugin.
///
/// This function:
/// 1. Creates the HTTP client with the configured timeout
/// 2. Composes the notification from the build metadata
/// 3. Posts it to the webhook, unless in dry-run mode
///
/// # Errors
///
/// Returns [`RunError`] if any step fails. Nothing is retried.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let http = ReqwestClient::with_timeout(config.timeout).map_err(RunError::HttpClient)?;
    let client = WebhookClient::from_target(config.target.clone(), http);

    notify(&config, &client).await
}

/// Composes the notification and hands it to `client`.
async fn notify<H: HttpClient>(
    config: &ValidatedConfig,
    client: &WebhookClient<H>,
) -> Result<(), RunError> {
    tracing::debug!("{}", config.context);

    let message = compose_message(config)?;
    tracing::info!("Title: {}", message.title);
    tracing::info!("Summary: {}", message.summary);
    tracing::info!("Body: {}", message.body);

    if config.dry_run {
        let request = client.build_request(&message).map_err(RunError::Send)?;
        let payload = request
            .body
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();
        tracing::info!("[dry-run] Would post to {}: {payload}", client.target().endpoint());
        return Ok(());
    }

    client.send(&message).await.map_err(RunError::Send)?;
    tracing::info!("Notification sent to {}", client.target().endpoint());
    Ok(())
}

fn compose_message(config: &ValidatedConfig) -> Result<Message, RunError> {
    let message = compose(&config.context).map_err(RunError::Compose)?;

    Ok(match config.action {
        Some(action) => message.with_action(action.as_str()),
        None => message,
    })
}
