//! Error types for the Reelscript workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every error converts into [`ReelscriptError`], so `?` works across crates.
//!
//! # Examples
//!
//! ```
//! use reelscript_error::{ReelscriptResult, UpstreamError, UpstreamErrorKind};
//!
//! fn call_upstream() -> ReelscriptResult<String> {
//!     Err(UpstreamError::new(UpstreamErrorKind::ApiRequest(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! assert!(call_upstream().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clipboard;
mod config;
mod error;
mod orchestrator;
#[cfg(feature = "tui")]
mod tui;
mod upstream;
mod validation;

pub use clipboard::ClipboardError;
pub use config::ConfigError;
pub use error::{ReelscriptError, ReelscriptErrorKind, ReelscriptResult};
pub use orchestrator::{OrchestratorError, OrchestratorErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TerminalStep, TuiError, TuiErrorKind, TuiResult};
pub use upstream::{UpstreamError, UpstreamErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
