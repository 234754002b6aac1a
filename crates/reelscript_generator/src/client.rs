//! The script generator client.

use reelscript_core::{GenerateRequest, Message, ScriptInputs};
use reelscript_error::ReelscriptResult;
use reelscript_interface::TextGenerator;
use tracing::{debug, instrument, warn};

use crate::{GeneratorConfig, build_prompt};

/// Returned in place of a script when the provider answers with no text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "حدث خطأ أثناء توليد السكريبت. يرجى المحاولة مرة أخرى.";

/// Builds the prompt for a set of inputs and asks the provider for a script.
///
/// # Examples
///
/// ```rust,ignore
/// use reelscript_generator::ScriptGenerator;
///
/// let generator = ScriptGenerator::new(gemini_client, "gemini-2.5-flash", 0.7);
/// let script = generator.generate_script(&inputs).await?;
/// ```
#[derive(Debug)]
pub struct ScriptGenerator<D: TextGenerator> {
    driver: D,
    model: String,
    temperature: f32,
}

impl<D: TextGenerator> ScriptGenerator<D> {
    /// Create a generator with an explicit model and temperature.
    pub fn new(driver: D, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            driver,
            model: model.into(),
            temperature,
        }
    }

    /// Create a generator using the model settings from configuration.
    pub fn from_config(driver: D, config: &GeneratorConfig) -> Self {
        Self::new(driver, config.model().clone(), *config.temperature())
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sampling temperature sent with every request.
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// The underlying text generation driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The request sent upstream for a set of inputs: one user message
    /// holding the full prompt, plus the fixed model and temperature.
    pub fn build_request(&self, inputs: &ScriptInputs) -> GenerateRequest {
        GenerateRequest::new(
            vec![Message::user(build_prompt(inputs))],
            Some(self.temperature),
            Some(self.model.clone()),
        )
    }

    /// Generate a script.
    ///
    /// Non-empty text is returned exactly as received. An empty answer yields
    /// [`EMPTY_RESPONSE_FALLBACK`].
    ///
    /// # Errors
    ///
    /// Provider failures are returned unchanged; nothing is retried.
    #[instrument(skip_all, fields(provider = self.driver.provider_name(), model = %self.model))]
    pub async fn generate_script(&self, inputs: &ScriptInputs) -> ReelscriptResult<String> {
        let request = self.build_request(inputs);
        let response = self.driver.generate(&request).await?;

        match response.text {
            Some(text) if !text.is_empty() => {
                debug!(chars = text.chars().count(), "Script generated");
                Ok(text)
            }
            _ => {
                warn!("Provider returned no text, substituting fallback message");
                Ok(EMPTY_RESPONSE_FALLBACK.to_string())
            }
        }
    }
}
