//! Form inputs for one script request.

use crate::{ClientType, ReelDuration, VideoAngle};
use reelscript_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Minimum number of characters in the area/project name.
pub const MIN_AREA_LENGTH: usize = 2;

/// The four values a user submits to generate a script.
///
/// Values are interpolated into the prompt verbatim. A fresh value is built
/// for every submission.
///
/// # Examples
///
/// ```
/// use reelscript_core::ScriptInputs;
///
/// let inputs = ScriptInputs::builder()
///     .client_type("VIP / Luxury")
///     .area("New Cairo")
///     .angle("تحذير (Warning)")
///     .duration("60")
///     .build()
///     .unwrap();
///
/// assert!(inputs.validate().is_ok());
/// assert_eq!(inputs.area(), "New Cairo");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ScriptInputs {
    /// Client type label
    client_type: String,
    /// Area or project name
    area: String,
    /// Video angle label
    angle: String,
    /// Reel duration in seconds
    duration: String,
}

impl ScriptInputs {
    /// Creates a new inputs builder.
    pub fn builder() -> ScriptInputsBuilder {
        ScriptInputsBuilder::default()
    }

    /// Build inputs from the enumerated form choices.
    pub fn from_choices(
        client_type: ClientType,
        area: impl Into<String>,
        angle: VideoAngle,
        duration: ReelDuration,
    ) -> Self {
        Self {
            client_type: client_type.label().to_string(),
            area: area.into(),
            angle: angle.label().to_string(),
            duration: duration.as_str().to_string(),
        }
    }

    /// Check the form constraints.
    ///
    /// Every field must be non-empty and the area must have at least
    /// [`MIN_AREA_LENGTH`] characters. Whitespace counts as content.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("client_type", &self.client_type),
            ("area", &self.area),
            ("angle", &self.angle),
            ("duration", &self.duration),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::new(ValidationErrorKind::MissingField(*name)));
        }

        let length = self.area.chars().count();
        if length < MIN_AREA_LENGTH {
            return Err(ValidationError::new(ValidationErrorKind::AreaTooShort {
                length,
                minimum: MIN_AREA_LENGTH,
            }));
        }

        Ok(())
    }
}
