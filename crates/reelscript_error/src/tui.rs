//! Terminal form error types.

/// Terminal lifecycle step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TerminalStep {
    /// Switching the terminal into raw mode
    #[display("enable raw mode")]
    EnableRawMode,
    /// Entering the alternate screen
    #[display("enter alternate screen")]
    EnterAlternateScreen,
    /// Building the ratatui terminal over the backend
    #[display("create terminal")]
    CreateTerminal,
    /// Leaving raw mode on exit
    #[display("disable raw mode")]
    DisableRawMode,
    /// Leaving the alternate screen on exit
    #[display("leave alternate screen")]
    LeaveAlternateScreen,
    /// Showing the cursor again on exit
    #[display("show cursor")]
    ShowCursor,
}

impl TerminalStep {
    /// True for steps that undo setup when the form exits.
    pub fn is_restore(self) -> bool {
        matches!(
            self,
            TerminalStep::DisableRawMode
                | TerminalStep::LeaveAlternateScreen
                | TerminalStep::ShowCursor
        )
    }
}

/// Terminal form error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TuiErrorKind {
    /// A terminal setup or restore step failed
    #[display("Failed to {}: {}", step, message)]
    Terminal {
        /// Step that failed
        step: TerminalStep,
        /// Underlying I/O error
        message: String,
    },
    /// Polling for input failed
    #[display("Failed to poll for events: {}", _0)]
    EventPoll(String),
    /// Reading an input event failed
    #[display("Failed to read event: {}", _0)]
    EventRead(String),
    /// Drawing a frame failed
    #[display("Failed to draw frame: {}", _0)]
    Draw(String),
}

/// Terminal form error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelscript_error::{TerminalStep, TuiError, TuiErrorKind};
///
/// let err = TuiError::terminal(TerminalStep::EnableRawMode, "not a tty");
/// assert!(format!("{}", err).contains("enable raw mode: not a tty"));
/// assert!(!err.is_restore());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// Error kind
    pub kind: TuiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A failed terminal lifecycle step.
    #[track_caller]
    pub fn terminal(step: TerminalStep, err: impl std::fmt::Display) -> Self {
        Self::new(TuiErrorKind::Terminal {
            step,
            message: err.to_string(),
        })
    }

    /// True when the terminal may have been left in raw mode or the
    /// alternate screen.
    pub fn is_restore(&self) -> bool {
        matches!(&self.kind, TuiErrorKind::Terminal { step, .. } if step.is_restore())
    }
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_error_names_the_step() {
        let err = TuiError::terminal(TerminalStep::LeaveAlternateScreen, "broken pipe");
        assert_eq!(
            err.kind,
            TuiErrorKind::Terminal {
                step: TerminalStep::LeaveAlternateScreen,
                message: "broken pipe".to_string(),
            }
        );
        assert_eq!(
            err.kind.to_string(),
            "Failed to leave alternate screen: broken pipe"
        );
        assert!(err.is_restore());
    }

    #[test]
    fn setup_steps_are_not_restore_steps() {
        for step in [
            TerminalStep::EnableRawMode,
            TerminalStep::EnterAlternateScreen,
            TerminalStep::CreateTerminal,
        ] {
            assert!(!step.is_restore(), "{step} should be a setup step");
        }
        assert!(!TuiError::new(TuiErrorKind::Draw("gone".into())).is_restore());
    }

    #[test]
    fn location_points_at_caller() {
        let err = TuiError::terminal(TerminalStep::ShowCursor, "io");
        assert!(err.file.ends_with("tui.rs"));
        assert!(err.line > 0);
    }
}
