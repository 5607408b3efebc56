//! Webhook delivery for build notifications.
//!
//! This module provides types and traits for:
//! - Describing HTTP exchanges ([`HttpRequest`], [`HttpResponse`])
//! - Abstracting the HTTP transport ([`HttpClient`])
//! - Production transport over reqwest ([`ReqwestClient`])
//! - The validated endpoint and credential ([`WebhookTarget`])
//! - Posting a notification and classifying the outcome ([`WebhookClient`])

mod client;
mod error;
mod http;
mod notifier;
mod target;

#[cfg(test)]
mod notifier_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, SendError, TargetError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use notifier::WebhookClient;
pub use target::{TOKEN_HEADER, WebhookTarget};
