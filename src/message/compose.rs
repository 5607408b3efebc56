//! Plain-text message composition.

use crate::build::BuildContext;

use super::ValidationError;

/// Fixed title identifying where the notification came from.
pub const TITLE: &str = "drone notification";

/// Number of commit SHA characters shown in messages.
pub const COMMIT_PREFIX_LEN: usize = 8;

/// A notification before any markup has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Notification title
    pub title: String,
    /// One-line summary with link markup
    pub summary: String,
    /// Plain-text fallback
    pub body: String,
    /// Raw action token (`send`, `copy`, or empty)
    pub action: String,
}

impl Message {
    /// Sets the raw action token.
    ///
    /// The token is validated when the message is converted with
    /// [`to_wire_format`](super::to_wire_format).
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }
}

/// Builds the notification for a build.
///
/// # Errors
///
/// Returns [`ValidationError::CommitTooShort`] if the commit SHA has fewer
/// than [`COMMIT_PREFIX_LEN`] characters.
pub fn compose(ctx: &BuildContext) -> Result<Message, ValidationError> {
    let commit = commit_prefix(&ctx.commit.sha)?;

    let summary = format!(
        "*{}* [{}|{}/{}#{}] ({}) by {}",
        ctx.build.status,
        ctx.build.link,
        ctx.repo.owner,
        ctx.repo.name,
        commit,
        ctx.commit.branch,
        ctx.commit.author,
    );

    let body = format!(
        "{} {}/{}#{} ({}) by {}",
        ctx.build.status,
        ctx.repo.owner,
        ctx.repo.name,
        commit,
        ctx.commit.branch,
        ctx.commit.author,
    );

    Ok(Message {
        title: TITLE.to_string(),
        summary,
        body,
        action: String::new(),
    })
}

fn commit_prefix(sha: &str) -> Result<&str, ValidationError> {
    // `get` also rejects a prefix that would split a multi-byte character
    sha.get(..COMMIT_PREFIX_LEN)
        .ok_or_else(|| ValidationError::CommitTooShort {
            commit: sha.to_string(),
            required: COMMIT_PREFIX_LEN,
        })
}
