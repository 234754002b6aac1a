//! Request lifecycle errors.

/// Orchestrator error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum OrchestratorErrorKind {
    /// A generation request is already in flight
    #[display("A script request is already in progress")]
    RequestInFlight,
}

/// Orchestrator error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelscript_error::{OrchestratorError, OrchestratorErrorKind};
///
/// let err = OrchestratorError::new(OrchestratorErrorKind::RequestInFlight);
/// assert!(format!("{}", err).contains("already in progress"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Orchestrator Error: {} at line {} in {}", kind, line, file)]
pub struct OrchestratorError {
    /// Error kind
    pub kind: OrchestratorErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl OrchestratorError {
    /// Create a new OrchestratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: OrchestratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
