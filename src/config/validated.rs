//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::time::Duration;

use crate::build::{Build, BuildContext, Commit, Repo};
use crate::message::Action;
use crate::webhook::WebhookTarget;

use super::cli::{BuildArgs, Cli};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Assembled once by the entry point and passed by value into the core.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook endpoint and token
    pub target: WebhookTarget,

    /// Build metadata
    pub context: BuildContext,

    /// Button to attach, if any
    pub action: Option<Action>,

    /// HTTP request timeout
    pub timeout: Duration,

    /// Dry-run mode (compose without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = self.action.map_or("none", Action::as_str);

        write!(
            f,
            "Config {{ webhook: {}, repo: {}, action: {}, timeout: {}s, dry_run: {} }}",
            self.target,
            self.context.full_name(),
            action,
            self.timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and the environment variables bound to them) take
    /// precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing or invalid
    /// - The token is missing or not a valid header value
    /// - The timeout is zero
    /// - The action is not `send` or `copy`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let target = Self::resolve_target(cli, toml)?;
        let action = Self::resolve_action(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            target,
            context: build_context(&cli.build),
            action,
            timeout,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_target(cli: &Cli, toml: Option<&TomlConfig>) -> Result<WebhookTarget, ConfigError> {
        let url = cli
            .webhook_url()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK,
                    "Use --webhook, set PLUGIN_WEBHOOK, or set webhook.url in config file",
                )
            })?;

        // An absent token is reported by the target as a missing credential
        let token = cli
            .webhook_token()
            .or_else(|| toml.and_then(|t| t.webhook.token.as_deref()))
            .unwrap_or_default();

        Ok(WebhookTarget::new(url, token)?)
    }

    fn resolve_action(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Action>, ConfigError> {
        let token = cli
            .action
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.action.as_deref()))
            .unwrap_or_default();

        Action::parse_optional(token).map_err(ConfigError::InvalidAction)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

fn build_context(args: &BuildArgs) -> BuildContext {
    BuildContext {
        repo: Repo {
            owner: args.repo_owner.clone().unwrap_or_default(),
            name: args.repo_name.clone().unwrap_or_default(),
        },
        commit: Commit {
            sha: args.commit_sha.clone(),
            git_ref: args.commit_ref.clone(),
            branch: args.commit_branch.clone(),
            author: args.commit_author.clone().unwrap_or_default(),
            pull: args.commit_pull.clone().unwrap_or_default(),
            message: args.commit_message.clone().unwrap_or_default(),
        },
        build: Build {
            status: args.build_status.clone(),
            link: args.build_link.clone().unwrap_or_default(),
            event: args.build_event.clone(),
            number: args.build_number,
            tag: args.build_tag.clone().unwrap_or_default(),
            deploy_to: args.build_deploy_to.clone().unwrap_or_default(),
            started: args.build_started,
            created: args.build_created,
            job_started: args.job_started,
        },
    }
}
