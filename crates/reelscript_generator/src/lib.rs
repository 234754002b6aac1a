//! Script generation and request orchestration for Reelscript.
//!
//! - [`ScriptGenerator`] turns [`ScriptInputs`](reelscript_core::ScriptInputs)
//!   into a prompt and asks a [`TextGenerator`](reelscript_interface::TextGenerator)
//!   for the script.
//! - [`Orchestrator`] owns the request lifecycle: validation, the single
//!   in-flight request, cancellation, and the published [`RequestState`](reelscript_core::RequestState).
//! - [`GeneratorConfig`] loads model settings from TOML.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod orchestrator;
mod prompt;

pub use client::{EMPTY_RESPONSE_FALLBACK, ScriptGenerator};
pub use config::GeneratorConfig;
pub use orchestrator::{GENERIC_FAILURE_MESSAGE, Orchestrator, RequestId, Submission};
pub use prompt::{FORBIDDEN_PHRASES, SYSTEM_PROMPT, build_prompt, build_user_prompt};
