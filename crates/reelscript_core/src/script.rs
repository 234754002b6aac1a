//! Raw generated script text.

use serde::{Deserialize, Serialize};

/// The unmodified text returned upstream for one request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct GeneratedScript(String);

impl GeneratedScript {
    /// The script text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the script, returning its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}
