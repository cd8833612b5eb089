//! Fragment rendering tests (report text → HTML fragment)
//!
//! These tests run the whole pipeline through the public API and check
//! the resulting fragment byte for byte where the shape matters.

use insta::assert_snapshot;
use resumark_render::{render_fragment, OutputRegistry, RenderOptions};

use crate::common::sample_report;

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_heading_levels() {
    assert_eq!(render_fragment("# One"), "<h1>One</h1>");
    assert_eq!(render_fragment("## Two"), "<h2>Two</h2>");
    assert_eq!(render_fragment("### Three"), "<h3>Three</h3>");
}

#[test]
fn test_four_hashes_is_not_a_heading() {
    assert_eq!(render_fragment("#### Four"), "<p>#### Four</p>");
}

#[test]
fn test_paragraph_wrapping() {
    assert_eq!(
        render_fragment("Just a plain sentence."),
        "<p>Just a plain sentence.</p>"
    );
}

#[test]
fn test_adjacent_paragraphs_have_no_break() {
    assert_eq!(render_fragment("one\ntwo"), "<p>one</p><p>two</p>");
}

#[test]
fn test_unordered_list_merging() {
    assert_eq!(
        render_fragment("* a\n* b\n* c"),
        "<ul><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn test_ordered_list_merging() {
    assert_eq!(
        render_fragment("1. first\n2. second"),
        "<ol><li>first</li><li>second</li></ol>"
    );
}

#[test]
fn test_list_kinds_stay_separate() {
    assert_eq!(
        render_fragment("* a\n1. b"),
        "<ul><li>a</li></ul><ol><li>b</li></ol>"
    );
}

#[test]
fn test_emphasis_in_list_items() {
    assert_eq!(
        render_fragment("* **bold** item\n* *italic* item"),
        "<ul><li><strong>bold</strong> item</li><li><em>italic</em> item</li></ul>"
    );
}

#[test]
fn test_emphasis_in_headings() {
    assert_eq!(
        render_fragment("## **Skills** overview"),
        "<h2><strong>Skills</strong> overview</h2>"
    );
}

// ============================================================================
// BLANK LINE AND BREAK TESTS
// ============================================================================

#[test]
fn test_blank_line_becomes_break() {
    assert_eq!(render_fragment("a\n\nb"), "<p>a</p><br /><p>b</p>");
}

#[test]
fn test_consecutive_blank_lines_stack_breaks() {
    assert_eq!(render_fragment("a\n\n\nb"), "<p>a</p><br /><br /><p>b</p>");
}

#[test]
fn test_blank_line_keeps_lists_apart() {
    assert_eq!(
        render_fragment("* a\n\n* b"),
        "<ul><li>a</li></ul><br /><ul><li>b</li></ul>"
    );
}

#[test]
fn test_paragraph_keeps_lists_apart() {
    assert_eq!(
        render_fragment("* a\nbetween\n* b"),
        "<ul><li>a</li></ul><p>between</p><ul><li>b</li></ul>"
    );
}

#[test]
fn test_trailing_newline_adds_nothing() {
    assert_eq!(render_fragment("last\n"), "<p>last</p>");
    assert_eq!(render_fragment("* a\n"), "<ul><li>a</li></ul>");
}

#[test]
fn test_crlf_terminators() {
    assert_eq!(
        render_fragment("# Title\r\n\r\ntext\r\n"),
        "<h1>Title</h1><br /><p>text</p>"
    );
}

// ============================================================================
// PASSTHROUGH AND TRUST TESTS
// ============================================================================

#[test]
fn test_emphasis_led_line_is_not_wrapped() {
    assert_eq!(
        render_fragment("**Verdict:** hire"),
        "<strong>Verdict:</strong> hire"
    );
}

#[test]
fn test_literal_list_markup_passes_through() {
    assert_eq!(
        render_fragment("<ul><li>verbatim</li></ul>"),
        "<ul><li>verbatim</li></ul>"
    );
}

#[test]
fn test_other_markup_is_wrapped() {
    assert_eq!(render_fragment("<div>boxed</div>"), "<p><div>boxed</div></p>");
}

#[test]
fn test_nothing_is_escaped() {
    assert_eq!(
        render_fragment("5 < 7 & \"quotes\""),
        "<p>5 < 7 & \"quotes\"</p>"
    );
}

#[test]
fn test_whitespace_only_line_is_a_paragraph() {
    assert_eq!(render_fragment("  "), "<p>  </p>");
}

// ============================================================================
// TOTALITY TESTS
// ============================================================================

#[test]
fn test_empty_source_renders_empty() {
    assert_eq!(render_fragment(""), "");
}

#[test]
fn test_fragment_contains_no_newlines() {
    assert!(!render_fragment(sample_report()).contains('\n'));
    assert!(!render_fragment("a\r\n\r\nb\n\n\nc").contains('\n'));
}

#[test]
fn test_registry_fragment_output_matches_direct_call() {
    let registry = OutputRegistry::with_defaults();
    let via_registry = registry
        .render(sample_report(), "fragment", &RenderOptions::new())
        .unwrap();
    assert_eq!(via_registry, render_fragment(sample_report()));
}

// ============================================================================
// FULL REPORT SNAPSHOT
// ============================================================================

#[test]
fn test_full_report_fragment() {
    let html = render_fragment(sample_report());

    assert!(html.contains("<h1>Resume Analysis Result</h1>"));
    assert!(html.contains("<ul>"));
    assert!(html.contains("<ol>"));

    assert_snapshot!(html, @"<h1>Resume Analysis Result</h1><br /><h2>Overall Impression</h2><p>A solid mid-level profile with a clear systems focus.</p><br /><h2>Strengths</h2><ul><li><strong>Rust</strong> and systems programming background</li><li>Led a migration to <em>async</em> services</li><li>Clear, quantified impact statements</li></ul><br /><h2>Areas to Improve</h2><ol><li>Add dates to the education section</li><li>Tighten the summary to three lines</li><li>List concrete team sizes</li></ol><br /><p>Overall: strong candidate, minor formatting issues.</p>");
}
