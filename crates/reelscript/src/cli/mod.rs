//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the reelscript binary.

mod commands;
mod generate;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use generate::{print_prompt, run_generate};
pub use tui_handler::{launch_tui, tui_log_path};
