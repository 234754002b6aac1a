//! Traits for text generation backends and clipboard targets.

use async_trait::async_trait;
use reelscript_core::{GenerateRequest, GenerateResponse};
use reelscript_error::{ClipboardError, ReelscriptResult};
use std::sync::Arc;

/// A text generation backend.
///
/// Implementations send the request to a provider and return whatever text
/// came back, including empty text. Transport, authentication and decoding
/// failures are reported as upstream errors; implementations must not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a request.
    async fn generate(&self, req: &GenerateRequest) -> ReelscriptResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> ReelscriptResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate(&self, req: &GenerateRequest) -> ReelscriptResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Destination for copied text.
///
/// Only `Send` is required; the surfaces that copy are single-threaded.
pub trait ClipboardSink: Send {
    /// Place `text` on the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}
