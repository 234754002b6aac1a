//! Application state for the script form.

use reelscript_core::{ClientType, ReelDuration, RequestState, ScriptInputs, VideoAngle};
use reelscript_error::{ReelscriptError, ReelscriptErrorKind};
use reelscript_generator::GENERIC_FAILURE_MESSAGE;
use reelscript_interface::ClipboardSink;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    /// Client type choice
    #[default]
    ClientType,
    /// Area free-text field
    Area,
    /// Video angle choice
    Angle,
    /// Duration choice
    Duration,
    /// Section list of the last result
    Results,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::ClientType,
        Focus::Area,
        Focus::Angle,
        Focus::Duration,
        Focus::Results,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Main application state.
///
/// Holds only what the form owns. The request state lives in the
/// orchestrator and is passed in where needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Selected client type
    pub client_type: ClientType,
    /// Area text as typed
    pub area: String,
    /// Selected video angle
    pub angle: VideoAngle,
    /// Selected duration
    pub duration: ReelDuration,
    /// Focused widget
    pub focus: Focus,
    /// Selected section index in the result view
    pub selected_section: usize,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a form with every choice at its first option and an empty area.
    pub fn new() -> Self {
        Self {
            client_type: ClientType::default(),
            area: String::new(),
            angle: VideoAngle::default(),
            duration: ReelDuration::default(),
            focus: Focus::default(),
            selected_section: 0,
            status_message: String::from("Enter: generate | Tab: next field"),
            should_quit: false,
        }
    }

    /// Build fresh inputs from the current form values.
    pub fn inputs(&self) -> ScriptInputs {
        ScriptInputs::from_choices(self.client_type, self.area.clone(), self.angle, self.duration)
    }

    /// Move focus to the next widget.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous widget.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Advance the focused choice, or move down the section list.
    pub fn next_option(&mut self, state: &RequestState) {
        match self.focus {
            Focus::ClientType => self.client_type = cycle(self.client_type, 1),
            Focus::Angle => self.angle = cycle(self.angle, 1),
            Focus::Duration => self.duration = cycle(self.duration, 1),
            Focus::Results => {
                if self.selected_section + 1 < state.sections().len() {
                    self.selected_section += 1;
                }
            }
            Focus::Area => {}
        }
    }

    /// Step back the focused choice, or move up the section list.
    pub fn previous_option(&mut self) {
        match self.focus {
            Focus::ClientType => self.client_type = cycle(self.client_type, -1),
            Focus::Angle => self.angle = cycle(self.angle, -1),
            Focus::Duration => self.duration = cycle(self.duration, -1),
            Focus::Results => self.selected_section = self.selected_section.saturating_sub(1),
            Focus::Area => {}
        }
    }

    /// Type a character into the area field.
    pub fn push_char(&mut self, c: char) {
        if self.focus == Focus::Area {
            self.area.push(c);
        }
    }

    /// Delete the last character of the area field.
    pub fn backspace(&mut self) {
        if self.focus == Focus::Area {
            self.area.pop();
        }
    }

    /// Whether typed characters go into a text field.
    pub fn is_editing_text(&self) -> bool {
        self.focus == Focus::Area
    }

    /// Record that a submission was accepted.
    pub fn on_submitted(&mut self) {
        self.selected_section = 0;
        self.status_message = String::from("Generating... Esc: cancel");
    }

    /// Record that a submission was refused before reaching upstream.
    pub fn on_rejected(&mut self, err: &ReelscriptError) {
        self.status_message = rejection_message(err);
    }

    /// Update the status line after the orchestrator settles.
    pub fn on_settled(&mut self, state: &RequestState) {
        self.selected_section = 0;
        self.status_message = match state {
            RequestState::Success { sections, .. } => {
                self.focus = Focus::Results;
                format!("{} sections | c: copy selected section", sections.len())
            }
            RequestState::Failed(_) => String::from("Generation failed"),
            RequestState::Idle => String::from("Cancelled"),
            RequestState::Loading => String::from("Generating..."),
        };
    }

    /// Copy the selected section's content.
    ///
    /// Success sets a status notification. Failure is logged and otherwise
    /// ignored.
    pub fn copy_selected(&mut self, state: &RequestState, clipboard: &mut dyn ClipboardSink) {
        let Some(section) = state.sections().get(self.selected_section) else {
            return;
        };

        match clipboard.copy(&section.content) {
            Ok(()) => {
                debug!(title = %section.title, "Section copied");
                self.status_message = format!("Copied {}", section.title);
            }
            Err(e) => warn!(error = %e, "Failed to copy section"),
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Short user-facing reason a submission was refused.
fn rejection_message(err: &ReelscriptError) -> String {
    match err.kind() {
        ReelscriptErrorKind::Validation(e) => e.kind.to_string(),
        ReelscriptErrorKind::Orchestrator(e) => e.kind.to_string(),
        _ => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: T, step: isize) -> T {
    let options: Vec<T> = T::iter().collect();
    let len = options.len() as isize;
    let index = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[(index + step).rem_euclid(len) as usize]
}
