//! Chat markup applied right before serialization.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Message, ValidationError};

/// Button attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A "send" button
    Send,
    /// A "copy" button
    Copy,
}

impl Action {
    /// Parses an action token, where the empty token means "no action".
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownAction`] for any other token.
    pub fn parse_optional(token: &str) -> Result<Option<Self>, ValidationError> {
        if token.is_empty() {
            return Ok(None);
        }
        token.parse().map(Some)
    }

    /// Returns the token this action is configured with.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Copy => "copy",
        }
    }

    /// Returns the button markup for this action.
    #[must_use]
    pub fn markup(self) -> String {
        let token = self.as_str();
        match self {
            Self::Send => {
                format!("<p><button onclick=\"sendMsg('1', {token})\">send</button></p>")
            }
            Self::Copy => {
                format!("<p><button onclick=\"copyMsg('1', {token})\">copy</button></p>")
            }
        }
    }
}

impl FromStr for Action {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send" => Ok(Self::Send),
            "copy" => Ok(Self::Copy),
            other => Err(ValidationError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message with markup applied, ready to be serialized as the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireMessage {
    /// Title label markup
    pub title: String,
    /// Summary label markup
    pub summary: String,
    /// Body label markup
    pub body: String,
    /// Button markup, empty when no action is set
    pub action: String,
}

/// Applies chat markup to every field of `message`.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownAction`] if the action token is not
/// `send`, `copy`, or empty.
pub fn to_wire_format(message: &Message) -> Result<WireMessage, ValidationError> {
    let action = Action::parse_optional(&message.action)?;

    Ok(WireMessage {
        title: label(&message.title),
        summary: label(&message.summary),
        body: label(&message.body),
        action: action.map(Action::markup).unwrap_or_default(),
    })
}

fn label(text: &str) -> String {
    format!("<p><label>{text}</label></p>")
}
