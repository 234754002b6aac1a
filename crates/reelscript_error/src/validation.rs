//! Input validation errors.

/// Reasons a set of script inputs is rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required field is empty
    #[display("Required field '{}' is missing", _0)]
    MissingField(&'static str),
    /// The area/project name is shorter than the minimum length
    #[display("Area must be at least {} characters (got {})", minimum, length)]
    AreaTooShort {
        /// Length of the submitted area, in characters
        length: usize,
        /// Minimum accepted length
        minimum: usize,
    },
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelscript_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingField("area"));
/// assert!(format!("{}", err).contains("'area'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
