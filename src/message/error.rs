//! Error types for message composition.

use thiserror::Error;

/// Input metadata that cannot be turned into a notification.
///
/// Raised before anything is serialized or sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The commit SHA is too short to take the display prefix from.
    #[error("Commit SHA '{commit}' is too short: at least {required} characters required")]
    CommitTooShort {
        /// The commit SHA as received
        commit: String,
        /// Minimum number of characters
        required: usize,
    },

    /// The action token is not one of the known button templates.
    #[error("Unknown action '{0}': expected 'send', 'copy', or empty")]
    UnknownAction(String),
}
