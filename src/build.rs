//! CI build metadata.
//!
//! A [`BuildContext`] is assembled once by the configuration layer and then
//! only read. Nothing in this module touches the process environment.

use std::fmt;

/// Repository the build ran for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repo {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

/// Commit the build ran against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    /// Full commit SHA
    pub sha: String,
    /// Git ref, e.g. `refs/heads/master`
    pub git_ref: String,
    /// Branch name
    pub branch: String,
    /// Commit author name
    pub author: String,
    /// Pull request number, empty outside of pull request builds
    pub pull: String,
    /// Commit message
    pub message: String,
}

/// Build outcome and bookkeeping reported by the runner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    /// Build status, e.g. `success` or `failure`
    pub status: String,
    /// Link to the build in the CI web UI
    pub link: String,
    /// Build event, e.g. `push`, `tag`, `pull_request`
    pub event: String,
    /// Build number
    pub number: u64,
    /// Tag name for tag builds
    pub tag: String,
    /// Deployment target for deploy builds
    pub deploy_to: String,
    /// Unix timestamp the build started at
    pub started: i64,
    /// Unix timestamp the build was created at
    pub created: i64,
    /// Unix timestamp the current job started at
    pub job_started: i64,
}

/// Immutable snapshot of everything the runner told us about this build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Repository metadata
    pub repo: Repo,
    /// Commit metadata
    pub commit: Commit,
    /// Build metadata
    pub build: Build,
}

impl BuildContext {
    /// Returns `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.repo.owner, self.repo.name)
    }
}

impl fmt::Display for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Build {{ repo: {}, number: {}, event: {}, status: {}, ref: {}, branch: {}, \
             author: {}, message: {:?}, tag: {}, pull: {}, deploy_to: {}, created: {}, \
             started: {}, job_started: {} }}",
            self.full_name(),
            self.build.number,
            self.build.event,
            self.build.status,
            self.commit.git_ref,
            self.commit.branch,
            self.commit.author,
            self.commit.message,
            self.build.tag,
            self.commit.pull,
            self.build.deploy_to,
            self.build.created,
            self.build.started,
            self.build.job_started,
        )
    }
}
