//! Google Gemini API client implementation.
//!
//! [`GeminiClient`] wraps a `gemini-rust` client bound to one default model.
//! Requests naming a different model get a client created for that model.
//!
//! # Example
//!
//! ```no_run
//! use reelscript_core::{GenerateRequest, Message};
//! use reelscript_interface::TextGenerator;
//! use reelscript_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api_key = std::env::var("GEMINI_API_KEY")?;
//! let client = GeminiClient::new(api_key, "gemini-2.5-flash")?;
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Write a hook about New Cairo")])
//!     .temperature(Some(0.7))
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use std::sync::Arc;
use tracing::{debug, instrument};

use reelscript_core::{GenerateRequest, GenerateResponse, Role};
use reelscript_error::{ReelscriptResult, UpstreamError, UpstreamErrorKind};
use reelscript_interface::TextGenerator;

use crate::classify_upstream_error;

/// Client for the Google Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    /// Client bound to the default model
    client: Arc<Gemini>,
    /// API key, kept for clients bound to other models
    api_key: String,
    /// Default model name when `req.model` is None
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names use `Model::Custom` with the `models/` prefix the
    /// API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    fn client_for(api_key: &str, model_name: &str) -> Result<Gemini, UpstreamError> {
        Gemini::with_model(api_key, Self::model_name_to_enum(model_name)).map_err(|e| {
            UpstreamError::new(UpstreamErrorKind::ClientCreation(e.to_string()))
        })
    }

    /// Create a client with an explicit credential and default model.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamErrorKind::MissingApiKey`] for a blank key and
    /// [`UpstreamErrorKind::ClientCreation`] if the SDK client cannot be built.
    #[instrument(name = "gemini_client_new", skip_all, fields(model = tracing::field::Empty))]
    pub fn new(api_key: impl Into<String>, model_name: impl Into<String>) -> ReelscriptResult<Self> {
        let api_key = api_key.into();
        let model_name = model_name.into();
        tracing::Span::current().record("model", model_name.as_str());

        if api_key.trim().is_empty() {
            return Err(UpstreamError::new(UpstreamErrorKind::MissingApiKey(
                "GEMINI_API_KEY".to_string(),
            ))
            .into());
        }

        let client = Self::client_for(&api_key, &model_name)?;
        debug!("Created Gemini client");

        Ok(Self {
            client: Arc::new(client),
            api_key,
            model_name,
        })
    }

    /// Internal generate method that returns upstream-specific errors.
    async fn generate_internal(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, UpstreamError> {
        let client = match req.model() {
            Some(model) if model != &self.model_name => {
                Arc::new(Self::client_for(&self.api_key, model)?)
            }
            _ => Arc::clone(&self.client),
        };

        let mut builder = client.generate_content();
        for msg in req.messages() {
            builder = match msg.role {
                Role::User => builder.with_user_message(&msg.text),
                Role::Model => builder.with_model_message(&msg.text),
            };
        }

        if let Some(temp) = req.temperature() {
            builder = builder.with_temperature(*temp);
        }

        let response = builder.execute().await.map_err(classify_upstream_error)?;
        let text = response.text();
        debug!(chars = text.chars().count(), "Received Gemini response");

        Ok(GenerateResponse { text: Some(text) })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(provider = "gemini", model = %self.model_name))]
    async fn generate(&self, req: &GenerateRequest) -> ReelscriptResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_map_to_variants() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-flash"),
            Model::Gemini25Flash
        ));
    }

    #[test]
    fn custom_models_get_prefix() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
        match GeminiClient::model_name_to_enum("models/gemini-exp") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-exp"),
            _ => panic!("expected custom model"),
        }
    }

    #[test]
    fn blank_key_is_missing_credential() {
        let err = GeminiClient::new("  ", "gemini-2.5-flash").unwrap_err();
        let upstream = err.upstream().expect("upstream error");
        assert!(matches!(upstream.kind, UpstreamErrorKind::MissingApiKey(_)));
    }
}
