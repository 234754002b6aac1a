//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message sent to a text generator.
///
/// # Examples
///
/// ```
/// use reelscript_core::Role;
///
/// assert_ne!(Role::User, Role::Model);
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// Messages from the person (or program) asking
    User,
    /// Messages previously produced by the model
    Model,
}
