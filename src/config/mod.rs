//! Configuration layer for zoom-notify.
//!
//! This module provides:
//! - CLI argument and environment binding ([`Cli`], [`BuildArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Webhook settings are resolved with the following priority (highest to lowest):
//!
//! 1. **CLI arguments or `PLUGIN_*` variables** - e.g. `--webhook` / `PLUGIN_WEBHOOK`
//! 2. **Legacy `ZOOM_*` variables** - `ZOOM_WEBHOOK`, `ZOOM_TOKEN`
//! 3. **TOML config file** - the `[webhook]` section
//! 4. **Built-in defaults** - see [`defaults`]
//!
//! Build metadata only comes from CLI arguments or the runner's `DRONE_*` variables.
//!
//! The library never reads the process environment itself; clap does it once
//! while parsing [`Cli`], and everything downstream receives plain values.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{BuildArgs, Cli};
pub use error::{ConfigError, field};
pub use self::toml::TomlConfig;
pub use validated::ValidatedConfig;
