//! Tests for splitting generated scripts into sections.

use proptest::prelude::*;
use reelscript_core::{FULL_SCRIPT_TITLE, Section, parse_sections};

const SAMPLE_SCRIPT: &str = "1) HOOK
متشتريش في التجمع قبل ما تعرف الغلطة دي

2) VOICEOVER SCRIPT
[0-3] أغلب الناس بتختار بالسعر بس
[3-7] بس الموقع هو اللي بيحدد العائد

[7-12] خليك فاكر ده

3) SHOT LIST
لقطة 1 - skyline - ON-SCREEN TEXT: الغلطة
4) CTA DM
ابعتلي كلمة \"موقع\"";

#[test]
fn test_parses_all_numbered_sections_in_order() {
    let sections = parse_sections(SAMPLE_SCRIPT);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["1) HOOK", "2) VOICEOVER SCRIPT", "3) SHOT LIST", "4) CTA DM"]
    );
}

#[test]
fn test_content_keeps_embedded_blank_lines() {
    let sections = parse_sections(SAMPLE_SCRIPT);
    assert_eq!(
        sections[1].content,
        "[0-3] أغلب الناس بتختار بالسعر بس\n[3-7] بس الموقع هو اللي بيحدد العائد\n\n[7-12] خليك فاكر ده"
    );
}

#[test]
fn test_spec_example_two_sections() {
    let sections = parse_sections("1) HOOK\nfoo\n2) X\nbar");
    assert_eq!(
        sections,
        vec![Section::new("1) HOOK", "foo"), Section::new("2) X", "bar")]
    );
}

#[test]
fn test_fallback_without_headers() {
    assert_eq!(
        parse_sections("no headers here"),
        vec![Section::new(FULL_SCRIPT_TITLE, "no headers here")]
    );
}

#[test]
fn test_fallback_keeps_text_untrimmed() {
    let text = "  just some prose\n\n";
    assert_eq!(parse_sections(text), vec![Section::new(FULL_SCRIPT_TITLE, text)]);
}

#[test]
fn test_empty_input_yields_fallback() {
    assert_eq!(
        parse_sections(""),
        vec![Section::new(FULL_SCRIPT_TITLE, "")]
    );
}

#[test]
fn test_unknown_heading_still_splits() {
    let sections = parse_sections("1) HOOK\nline\n42) anything\nmore");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1], Section::new("42) anything", "more"));
}

#[test]
fn test_text_before_first_header_is_dropped() {
    let sections = parse_sections("Sure! Here is your script:\n1) HOOK\nfoo");
    assert_eq!(sections, vec![Section::new("1) HOOK", "foo")]);
}

#[test]
fn test_header_with_no_body() {
    let sections = parse_sections("1) HOOK\n2) CAPTION\n");
    assert_eq!(
        sections,
        vec![Section::new("1) HOOK", ""), Section::new("2) CAPTION", "")]
    );
}

#[test]
fn test_carriage_returns_are_trimmed_at_boundaries() {
    let sections = parse_sections("1) HOOK\r\nfoo\r\n2) X\r\nbar\r\n");
    assert_eq!(
        sections,
        vec![Section::new("1) HOOK", "foo"), Section::new("2) X", "bar")]
    );
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn prop_parse_is_total(text in any::<String>()) {
        prop_assert!(!parse_sections(&text).is_empty());
    }

    #[test]
    fn prop_without_markers_is_full_script(text in "[a-zA-Z ,.\n]*") {
        let sections = parse_sections(&text);
        prop_assert_eq!(sections, vec![Section::new(FULL_SCRIPT_TITLE, text.clone())]);
    }

    #[test]
    fn prop_titles_and_contents_rebuild_text(
        bodies in prop::collection::vec("[a-z ]{0,12}(\n[a-z ]{0,12}){0,3}", 1..6)
    ) {
        let text: String = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| format!("{}) HEADING\n{}", i + 1, body))
            .collect::<Vec<_>>()
            .join("\n");

        let sections = parse_sections(&text);
        prop_assert_eq!(sections.len(), bodies.len());

        let rebuilt: String = sections
            .iter()
            .map(|s| format!("{}\n{}", s.title, s.content))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(strip_whitespace(&rebuilt), strip_whitespace(&text));
    }
}
