//! Core data types for the Reelscript script generator.
//!
//! This crate holds the data model shared by every other crate: the form
//! inputs, the request/response types exchanged with a text generator, the
//! parsed script sections and the request lifecycle state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choices;
mod inputs;
mod message;
mod request;
mod role;
mod script;
mod section;
mod state;
mod telemetry;

pub use choices::{ClientType, ReelDuration, VideoAngle};
pub use inputs::{MIN_AREA_LENGTH, ScriptInputs, ScriptInputsBuilder, ScriptInputsBuilderError};
pub use message::Message;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use script::GeneratedScript;
pub use section::{FULL_SCRIPT_TITLE, SECTION_HEADINGS, Section, parse_sections};
pub use state::RequestState;
pub use telemetry::{init_tracing, init_tracing_to_file};
