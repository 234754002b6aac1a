//! Message types for generation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a generation request.
///
/// # Examples
///
/// ```
/// use reelscript_core::{Message, Role};
///
/// let message = Message::user("Write the script now.");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.text, "Write the script now.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the message
    pub text: String,
}

impl Message {
    /// Create a user-role message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}
