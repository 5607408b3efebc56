//! Default values for configuration options.
//!
//! Build metadata defaults match what the CI runner reports when a
//! variable is absent.

use std::time::Duration;

/// Default HTTP request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default commit SHA.
pub const COMMIT_SHA: &str = "00000000";

/// Default commit ref.
pub const COMMIT_REF: &str = "refs/heads/master";

/// Default commit branch.
pub const COMMIT_BRANCH: &str = "master";

/// Default build event.
pub const BUILD_EVENT: &str = "push";

/// Default build status.
pub const BUILD_STATUS: &str = "success";

/// Default HTTP request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
