//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A text generation request.
///
/// # Examples
///
/// ```
/// use reelscript_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .temperature(Some(0.7))
///     .model(Some("gemini-2.5-flash".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.temperature(), Some(0.7));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct GenerateRequest {
    /// The messages to send, in order
    messages: Vec<Message>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier; the driver's default when `None`
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Create a request from its parts.
    pub fn new(messages: Vec<Message>, temperature: Option<f32>, model: Option<String>) -> Self {
        Self {
            messages,
            temperature,
            model,
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The response from a text generator.
///
/// `text` is `None` when the provider answered without any text.
///
/// # Examples
///
/// ```
/// use reelscript_core::GenerateResponse;
///
/// let response = GenerateResponse { text: Some(String::new()) };
/// assert_eq!(response.non_empty_text(), None);
///
/// let response = GenerateResponse { text: Some("1) HOOK".into()) };
/// assert_eq!(response.non_empty_text(), Some("1) HOOK"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// The generated text, if any
    pub text: Option<String>,
}

impl GenerateResponse {
    /// The generated text when present and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}
