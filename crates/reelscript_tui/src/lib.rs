//! Terminal form for generating reel scripts.
//!
//! Provides the four-field form, a loading indicator, the parsed section view
//! and per-section copy to the clipboard. Built with ratatui for rendering;
//! generation runs on a spawned tokio task so the form stays responsive.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod clipboard;
mod events;
mod runner;
mod ui;

pub use app::{App, Focus};
pub use clipboard::Osc52Clipboard;
pub use events::{Event, EventHandler};
pub use runner::run_tui;
