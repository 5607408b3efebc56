//! zoom-notify: CI build notifications for Zoom chat webhooks
//!
//! A library for turning CI build metadata into a short status message
//! and posting it to a Zoom incoming webhook.

pub mod build;
pub mod config;
pub mod message;
pub mod webhook;
