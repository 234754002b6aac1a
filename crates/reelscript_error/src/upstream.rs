//! Errors raised by the upstream generation API.

/// Upstream fault conditions.
///
/// None of these are retried. Callers surface them to users as a generic
/// message and keep the detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// Credential environment variable not set
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),
    /// Failed to create the provider client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// Request failed without an HTTP status (network, DNS, TLS)
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response arrived but could not be interpreted
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// No response within the configured timeout
    #[display("Request timed out after {} seconds", _0)]
    Timeout(u64),
    /// The request was cancelled before it completed
    #[display("Request cancelled")]
    Cancelled,
}

impl UpstreamErrorKind {
    /// True for authentication failures (bad or missing credential).
    pub fn is_auth(&self) -> bool {
        match self {
            UpstreamErrorKind::MissingApiKey(_) => true,
            UpstreamErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 401 | 403)
            }
            _ => false,
        }
    }
}

/// Upstream error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelscript_error::{UpstreamError, UpstreamErrorKind};
///
/// let err = UpstreamError::new(UpstreamErrorKind::MissingApiKey("GEMINI_API_KEY".into()));
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert!(err.kind.is_auth());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at line {} in {}", kind, line, file)]
pub struct UpstreamError {
    /// The kind of error that occurred
    pub kind: UpstreamErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new UpstreamError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
