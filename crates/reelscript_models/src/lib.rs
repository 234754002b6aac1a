//! Text generation provider integrations for Reelscript.
//!
//! Each provider lives behind its own feature flag.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature
//!
//! # Example
//!
//! ```rust,ignore
//! use reelscript_core::{GenerateRequest, Message};
//! use reelscript_interface::TextGenerator;
//! use reelscript_models::GeminiClient;
//!
//! let client = GeminiClient::new(api_key, "gemini-2.5-flash")?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod upstream_error;

pub use upstream_error::classify_upstream_error;

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;
