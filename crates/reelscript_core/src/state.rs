//! Request lifecycle state.

use crate::{GeneratedScript, Section};
use serde::{Deserialize, Serialize};

/// Where the current script request stands.
///
/// Exactly one state holds at a time. A new submission moves any state to
/// `Loading`, discarding the previous result or error.
///
/// # Examples
///
/// ```
/// use reelscript_core::RequestState;
///
/// let state = RequestState::default();
/// assert!(state.is_idle());
/// assert!(state.sections().is_empty());
/// assert_eq!(state.error_message(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum RequestState {
    /// Nothing submitted yet, or the last request was cancelled
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request produced a script
    Success {
        /// Raw text as returned upstream
        script: GeneratedScript,
        /// Parsed sections, never empty
        sections: Vec<Section>,
    },
    /// The last request failed; holds the user-facing message
    Failed(String),
}

impl RequestState {
    /// True when no request has produced a result.
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Parsed sections of a successful request, empty otherwise.
    pub fn sections(&self) -> &[Section] {
        match self {
            RequestState::Success { sections, .. } => sections,
            _ => &[],
        }
    }

    /// Raw script of a successful request.
    pub fn script(&self) -> Option<&GeneratedScript> {
        match self {
            RequestState::Success { script, .. } => Some(script),
            _ => None,
        }
    }

    /// User-facing message of a failed request.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
