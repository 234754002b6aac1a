//! Reelscript - short-form real estate video scripts.
//!
//! Reelscript turns four form values (client type, area, angle, duration)
//! into a structured Arabic script for a 30-60 second reel, generated by
//! Gemini and split into titled sections.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reelscript::{
//!     ClientType, GeminiClient, GeneratorConfig, Orchestrator, ReelDuration, ScriptGenerator,
//!     ScriptInputs, VideoAngle,
//! };
//!
//! let config = GeneratorConfig::load()?;
//! let client = GeminiClient::new(config.api_key()?, config.model().clone())?;
//! let mut orchestrator = Orchestrator::new(ScriptGenerator::from_config(client, &config));
//!
//! let inputs = ScriptInputs::from_choices(
//!     ClientType::Investment,
//!     "New Cairo",
//!     VideoAngle::Comparison,
//!     ReelDuration::Thirty,
//! );
//! let state = orchestrator.submit(inputs).await?;
//! for section in state.sections() {
//!     println!("{}\n{}", section.title, section.content);
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini provider (default)
//! - `tui` - Terminal form (default)
//!
//! # Architecture
//!
//! - `reelscript_error` - Error types
//! - `reelscript_core` - Data model and section parser
//! - `reelscript_interface` - `TextGenerator` and `ClipboardSink` traits
//! - `reelscript_models` - Gemini provider
//! - `reelscript_generator` - Prompt, generator client, orchestrator, configuration
//! - `reelscript_tui` - Terminal form
//!
//! This crate re-exports everything for convenience.

pub use reelscript_core::*;
pub use reelscript_error::*;
pub use reelscript_generator::*;
pub use reelscript_interface::*;

#[cfg(feature = "gemini")]
pub use reelscript_models::{GeminiClient, classify_upstream_error};

#[cfg(feature = "tui")]
pub use reelscript_tui::{App, Focus, Osc52Clipboard, run_tui};
