//! Splitting a generated script into numbered sections.
//!
//! The model is asked to answer with numbered headings (`1) HOOK`,
//! `2) VOICEOVER SCRIPT`, ...). [`parse_sections`] cuts the reply at every
//! line that starts with digits followed by `)`, whatever the heading text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Title of the single section emitted when no numbered headings are found.
pub const FULL_SCRIPT_TITLE: &str = "Full Script";

/// Headings the prompt asks for, in order.
///
/// Display labels only. Parsing never consults this list.
pub const SECTION_HEADINGS: &[&str] = &[
    "HOOK",
    "VOICEOVER SCRIPT",
    "SHOT LIST",
    "CTA DM",
    "CAPTION",
    "HASHTAGS",
    "3 ALTERNATIVE HOOKS",
    "3 ALTERNATIVE CTAS",
    "PEXELS VIDEO SEARCH KEYWORDS",
    "بدائل HOOK",
    "بدائل CTA",
];

static HEADER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\)").expect("header marker pattern is valid")
});

/// A titled block of a generated script.
///
/// # Examples
///
/// ```
/// use reelscript_core::Section;
///
/// let section = Section::new("3) SHOT LIST", "Shot 1: skyline");
/// assert_eq!(section.heading(), "SHOT LIST");
/// assert!(section.is_known_heading());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// Trimmed header line, marker included (e.g. `"1) HOOK"`)
    pub title: String,
    /// Trimmed body text up to the next header
    pub content: String,
}

impl Section {
    /// Create a section.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The title with its numeric marker removed.
    pub fn heading(&self) -> &str {
        match HEADER_MARKER.find(&self.title) {
            Some(marker) => self.title[marker.end()..].trim(),
            None => self.title.trim(),
        }
    }

    /// Whether the heading is one of [`SECTION_HEADINGS`].
    pub fn is_known_heading(&self) -> bool {
        let heading = self.heading();
        SECTION_HEADINGS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(heading))
    }
}

/// Whether a trimmed line opens a new section.
fn is_header(trimmed: &str) -> bool {
    HEADER_MARKER.is_match(trimmed)
}

/// Split a generated script into ordered sections.
///
/// Lines are separated on `'\n'`. A line whose trimmed form starts with one
/// or more ASCII digits immediately followed by `)` becomes the title of a
/// new section; every other line is kept verbatim as body text. Bodies are
/// joined with `'\n'` and trimmed when the section closes. Lines before the
/// first header are dropped.
///
/// Never returns an empty vector: text without headers yields a single
/// [`FULL_SCRIPT_TITLE`] section holding the whole input.
///
/// # Examples
///
/// ```
/// use reelscript_core::{Section, parse_sections};
///
/// let sections = parse_sections("1) HOOK\nfoo\n2) X\nbar");
/// assert_eq!(
///     sections,
///     vec![Section::new("1) HOOK", "foo"), Section::new("2) X", "bar")]
/// );
///
/// let fallback = parse_sections("no headers here");
/// assert_eq!(fallback, vec![Section::new("Full Script", "no headers here")]);
/// ```
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current_title: Option<&str> = None;
    let mut current_content: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if is_header(trimmed) {
            if let Some(title) = current_title {
                sections.push(close_section(title, &current_content));
            }
            current_title = Some(trimmed);
            current_content.clear();
        } else {
            current_content.push(line);
        }
    }

    if let Some(title) = current_title {
        sections.push(close_section(title, &current_content));
    }

    if sections.is_empty() {
        tracing::debug!("No numbered headers found, using full script section");
        sections.push(Section::new(FULL_SCRIPT_TITLE, text));
    } else {
        tracing::debug!(count = sections.len(), "Parsed script sections");
    }

    sections
}

fn close_section(title: &str, content: &[&str]) -> Section {
    Section::new(title, content.join("\n").trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_without_parenthesis_are_content() {
        let sections = parse_sections("1) VOICEOVER SCRIPT\n30 minutes from downtown\n[0-3] hello");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "30 minutes from downtown\n[0-3] hello");
    }

    #[test]
    fn indented_header_is_trimmed() {
        let sections = parse_sections("   2) CTA DM   \nSend us 'filter'");
        assert_eq!(sections, vec![Section::new("2) CTA DM", "Send us 'filter'")]);
    }

    #[test]
    fn heading_strips_marker() {
        assert_eq!(Section::new("12)   HASHTAGS", "").heading(), "HASHTAGS");
        assert_eq!(Section::new(FULL_SCRIPT_TITLE, "").heading(), "Full Script");
        assert!(!Section::new("4) SOMETHING ELSE", "").is_known_heading());
    }

    #[test]
    fn arabic_indic_digits_are_not_markers() {
        let sections = parse_sections("١) HOOK\nbody");
        assert_eq!(sections[0].title, FULL_SCRIPT_TITLE);
    }
}
