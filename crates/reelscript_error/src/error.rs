//! Top-level error wrapper types.

use crate::{ClipboardError, ConfigError, OrchestratorError, UpstreamError, ValidationError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error condition in the workspace, by origin.
///
/// # Examples
///
/// ```
/// use reelscript_error::{ReelscriptError, ValidationError, ValidationErrorKind};
///
/// let err: ReelscriptError = ValidationError::new(ValidationErrorKind::MissingField("angle")).into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelscriptErrorKind {
    /// Inputs rejected before submission
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Fault from the generation API
    #[from(UpstreamError)]
    Upstream(UpstreamError),
    /// Request lifecycle error
    #[from(OrchestratorError)]
    Orchestrator(OrchestratorError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Clipboard error
    #[from(ClipboardError)]
    Clipboard(ClipboardError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Reelscript error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelscript_error::{ConfigError, ReelscriptErrorKind, ReelscriptResult};
///
/// fn might_fail() -> ReelscriptResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ReelscriptErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelscript Error: {}", _0)]
pub struct ReelscriptError(Box<ReelscriptErrorKind>);

impl ReelscriptError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelscriptErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelscriptErrorKind {
        &self.0
    }

    /// The upstream fault, if this error came from the generation API.
    pub fn upstream(&self) -> Option<&UpstreamError> {
        match self.kind() {
            ReelscriptErrorKind::Upstream(e) => Some(e),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ReelscriptErrorKind
impl<T> From<T> for ReelscriptError
where
    T: Into<ReelscriptErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelscript operations.
pub type ReelscriptResult<T> = std::result::Result<T, ReelscriptError>;
