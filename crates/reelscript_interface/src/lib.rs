//! Trait definitions for the Reelscript script generator.
//!
//! These traits are the seams between the core and its external
//! collaborators: the text generation provider and the clipboard.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ClipboardSink, TextGenerator};
