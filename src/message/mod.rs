//! Message composition for build notifications.
//!
//! Composition happens in two pure stages:
//! - [`compose`] turns a [`BuildContext`](crate::build::BuildContext) into a plain [`Message`]
//! - [`to_wire_format`] wraps a [`Message`] in the chat markup, producing a [`WireMessage`]
//!
//! The [`Action`] enum models the closed set of button templates.

mod compose;
mod error;
mod wire;


pub use compose::{COMMIT_PREFIX_LEN, Message, TITLE, compose};
pub use error::ValidationError;
pub use wire::{Action, WireMessage, to_wire_format};
