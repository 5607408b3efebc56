//! CLI argument parsing using clap.
//!
//! Every option can also be supplied through the environment variables a
//! Drone-style CI runner exports, so the plugin usually runs with no
//! arguments at all.

use std::path::PathBuf;

use clap::{Args, CommandFactory, FromArgMatches, Parser};

use super::defaults;

/// zoom-notify: post CI build status to a Zoom chat webhook
///
/// Reads build metadata from the CI runner and sends a one-line
/// status notification to the configured webhook.
#[derive(Debug, Parser)]
#[command(name = "zoom-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Webhook URL
    #[arg(long, env = "PLUGIN_WEBHOOK")]
    pub webhook: Option<String>,

    /// Webhook URL (legacy variable)
    #[arg(long = "zoom-webhook", env = "ZOOM_WEBHOOK", hide = true)]
    pub zoom_webhook: Option<String>,

    /// Webhook auth token
    #[arg(long, env = "PLUGIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Webhook auth token (legacy variable)
    #[arg(
        long = "zoom-token",
        env = "ZOOM_TOKEN",
        hide = true,
        hide_env_values = true
    )]
    pub zoom_token: Option<String>,

    /// Button to attach to the notification: send or copy
    #[arg(long, env = "PLUGIN_ACTION")]
    pub action: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "PLUGIN_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Build metadata reported by the CI runner
    #[command(flatten)]
    pub build: BuildArgs,

    /// Path to configuration file
    #[arg(long, short, env = "PLUGIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Compose and log the notification without sending it
    #[arg(long, env = "PLUGIN_DRY_RUN")]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, env = "PLUGIN_VERBOSE")]
    pub verbose: bool,
}

/// Build metadata arguments, bound to the runner's `DRONE_*` variables.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Repository owner
    #[arg(long = "repo-owner", env = "DRONE_REPO_OWNER")]
    pub repo_owner: Option<String>,

    /// Repository name
    #[arg(long = "repo-name", env = "DRONE_REPO_NAME")]
    pub repo_name: Option<String>,

    /// Git commit SHA
    #[arg(long = "commit-sha", env = "DRONE_COMMIT_SHA", default_value = defaults::COMMIT_SHA)]
    pub commit_sha: String,

    /// Git commit ref
    #[arg(long = "commit-ref", env = "DRONE_COMMIT_REF", default_value = defaults::COMMIT_REF)]
    pub commit_ref: String,

    /// Git commit branch
    #[arg(
        long = "commit-branch",
        env = "DRONE_COMMIT_BRANCH",
        default_value = defaults::COMMIT_BRANCH
    )]
    pub commit_branch: String,

    /// Git author name
    #[arg(long = "commit-author", env = "DRONE_COMMIT_AUTHOR")]
    pub commit_author: Option<String>,

    /// Pull request number
    #[arg(long = "commit-pull", env = "DRONE_PULL_REQUEST")]
    pub commit_pull: Option<String>,

    /// Commit message
    #[arg(long = "commit-message", env = "DRONE_COMMIT_MESSAGE")]
    pub commit_message: Option<String>,

    /// Build event
    #[arg(long = "build-event", env = "DRONE_BUILD_EVENT", default_value = defaults::BUILD_EVENT)]
    pub build_event: String,

    /// Build number
    #[arg(long = "build-number", env = "DRONE_BUILD_NUMBER", default_value_t = 0)]
    pub build_number: u64,

    /// Build status
    #[arg(
        long = "build-status",
        env = "DRONE_BUILD_STATUS",
        default_value = defaults::BUILD_STATUS
    )]
    pub build_status: String,

    /// Build link
    #[arg(long = "build-link", env = "DRONE_BUILD_LINK")]
    pub build_link: Option<String>,

    /// Build started (unix timestamp)
    #[arg(long = "build-started", env = "DRONE_BUILD_STARTED", default_value_t = 0)]
    pub build_started: i64,

    /// Build created (unix timestamp)
    #[arg(long = "build-created", env = "DRONE_BUILD_CREATED", default_value_t = 0)]
    pub build_created: i64,

    /// Build tag
    #[arg(long = "build-tag", env = "DRONE_TAG")]
    pub build_tag: Option<String>,

    /// Environment deployed to
    #[arg(long = "build-deploy-to", env = "DRONE_DEPLOY_TO")]
    pub build_deploy_to: Option<String>,

    /// Job started (unix timestamp)
    #[arg(long = "job-started", env = "DRONE_JOB_STARTED", default_value_t = 0)]
    pub job_started: i64,
}

impl Cli {
    /// Parses CLI arguments from the command line and environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator, ignoring the environment.
    ///
    /// Only the given arguments and built-in defaults are used, so the result
    /// does not depend on variables exported by the CI runner (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from_iter(iter).unwrap_or_else(|e| e.exit())
    }

    /// Fallible form of [`Cli::parse_from_iter`].
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or unparsable values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .try_get_matches_from(iter)?;
        Self::from_arg_matches(&matches)
    }

    /// Returns the webhook URL from the CLI or environment, preferring `PLUGIN_WEBHOOK`.
    #[must_use]
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook.as_deref().or(self.zoom_webhook.as_deref())
    }

    /// Returns the token from the CLI or environment, preferring `PLUGIN_TOKEN`.
    #[must_use]
    pub fn webhook_token(&self) -> Option<&str> {
        self.token.as_deref().or(self.zoom_token.as_deref())
    }
}
