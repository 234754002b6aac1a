//! Enumerated form choices.
//!
//! Each choice carries the exact bilingual label that is interpolated into
//! the prompt, and parses from a short kebab-case slug for command-line use.

use serde::{Deserialize, Serialize};

/// Target client profile for the reel.
///
/// # Examples
///
/// ```
/// use reelscript_core::ClientType;
///
/// let client: ClientType = "family-home".parse().unwrap();
/// assert_eq!(client, ClientType::FamilyHome);
/// assert_eq!(client.label(), "سكن عائلي (Family Home)");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ClientType {
    /// Buying to invest
    #[default]
    Investment,
    /// Buying a family home
    FamilyHome,
    /// High-end buyers
    VipLuxury,
}

impl ClientType {
    /// Label shown in the form and sent in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            ClientType::Investment => "استثمار (Investment)",
            ClientType::FamilyHome => "سكن عائلي (Family Home)",
            ClientType::VipLuxury => "VIP / Luxury",
        }
    }

    /// Command-line slug.
    pub fn slug(self) -> &'static str {
        self.into()
    }
}

/// Marketing angle the reel takes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum VideoAngle {
    /// A mistake buyers commonly make
    #[default]
    CommonMistake,
    /// Compare two options
    Comparison,
    /// Filter out the wrong audience
    Filtering,
    /// Warn about a risk
    Warning,
    /// Help the viewer make a decision
    DecisionAdvice,
}

impl VideoAngle {
    /// Label shown in the form and sent in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            VideoAngle::CommonMistake => "غلطة شائعة (Common Mistake)",
            VideoAngle::Comparison => "مقارنة (Comparison)",
            VideoAngle::Filtering => "فلترة (Filtering)",
            VideoAngle::Warning => "تحذير (Warning)",
            VideoAngle::DecisionAdvice => "نصيحة قرار (Decision Advice)",
        }
    }

    /// Command-line slug.
    pub fn slug(self) -> &'static str {
        self.into()
    }
}

/// Reel length in seconds.
///
/// # Examples
///
/// ```
/// use reelscript_core::ReelDuration;
///
/// let duration: ReelDuration = "45".parse().unwrap();
/// assert_eq!(duration.seconds(), 45);
/// assert_eq!(duration.as_str(), "45");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum ReelDuration {
    /// 30 seconds
    #[default]
    #[strum(serialize = "30")]
    #[serde(rename = "30")]
    Thirty,
    /// 45 seconds
    #[strum(serialize = "45")]
    #[serde(rename = "45")]
    FortyFive,
    /// 60 seconds
    #[strum(serialize = "60")]
    #[serde(rename = "60")]
    Sixty,
}

impl ReelDuration {
    /// Duration as it appears in the form and prompt.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Duration in seconds.
    pub fn seconds(self) -> u32 {
        match self {
            ReelDuration::Thirty => 30,
            ReelDuration::FortyFive => 45,
            ReelDuration::Sixty => 60,
        }
    }
}
