//! Tests for validated configuration.

use std::time::Duration;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;
use crate::message::Action;
use crate::webhook::TargetError;

const URL: &str = "https://inbots.zoom.us/incoming/hook/abc";

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["zoom-notify"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to create CLI args with a valid webhook and token
fn cli_with_target(args: &[&str]) -> Cli {
    let mut full_args = vec!["--webhook", URL, "--token", "secret"];
    full_args.extend(args);
    cli(&full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}
