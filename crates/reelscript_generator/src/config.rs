//! Generator configuration.
//!
//! Configuration sources, later ones overriding earlier:
//! 1. Bundled defaults (`reelscript.toml` shipped with the crate)
//! 2. `~/.config/reelscript/reelscript.toml`
//! 3. `./reelscript.toml`

use config::{Config, File, FileFormat};
use reelscript_error::{ConfigError, ReelscriptError, ReelscriptResult, UpstreamError, UpstreamErrorKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../reelscript.toml");

/// Model settings and credential lookup.
///
/// # Example
///
/// ```toml
/// model = "gemini-2.5-flash"
/// temperature = 0.7
/// api_key_env = "GEMINI_API_KEY"
/// request_timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct GeneratorConfig {
    /// Model identifier
    model: String,

    /// Sampling temperature
    temperature: f32,

    /// Name of the environment variable holding the API key
    api_key_env: String,

    /// Upper bound on one request, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_timeout_secs: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            api_key_env: "GEMINI_API_KEY".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a specific file path, over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ReelscriptResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ReelscriptError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelscriptError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// values are invalid.
    #[instrument]
    pub fn load() -> ReelscriptResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("reelscript/reelscript.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("reelscript").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                ReelscriptError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelscriptError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty model or credential variable,
    /// a temperature outside `[0.0, 2.0]`, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model must not be empty"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::new("api_key_env must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "temperature must be in [0.0, 2.0], got {}",
                self.temperature
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::new("request_timeout_secs must be positive"));
        }
        Ok(())
    }

    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Read the API key from the configured environment variable.
    ///
    /// Call once at startup and hand the value to the provider constructor.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamErrorKind::MissingApiKey`] when the variable is unset
    /// or blank.
    pub fn api_key(&self) -> Result<String, UpstreamError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                UpstreamError::new(UpstreamErrorKind::MissingApiKey(self.api_key_env.clone()))
            })
    }
}
