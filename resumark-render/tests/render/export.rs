//! Export tests (report text → standalone HTML document)
//!
//! These tests verify the downloadable report page: the fixed title, the
//! file badge, the embedded stylesheet and the overall document shape.

use insta::assert_snapshot;
use once_cell::sync::Lazy;
use regex::Regex;
use resumark_render::{
    export_file_name, render_document, report_css, OutputRegistry, RenderOptions,
};

use crate::common::{sample_report, short_verdict};

fn snapshot_without_styles(html: &str) -> String {
    static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex for stripping style blocks")
    });
    STYLE_REGEX
        .replace_all(html, "<style data-resumark-snapshot=\"removed\"></style>")
        .into_owned()
}

// ============================================================================
// DOCUMENT STRUCTURE TESTS
// ============================================================================

#[test]
fn test_document_structure() {
    let html = render_document(sample_report(), None);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.ends_with("</html>"));
    assert!(html.contains("<div class=\"container\">"));
    assert!(html.contains("<div class=\"result-content\">"));
}

#[test]
fn test_document_title_is_fixed() {
    let html = render_document("any text at all", None);

    assert!(html.contains("<title>Resume Analysis Result</title>"));
    assert!(html.contains("<h1>Resume Analysis Result</h1>"));
}

#[test]
fn test_fragment_lands_in_result_panel() {
    let html = render_document(short_verdict(), None);

    let panel = html.find("<div class=\"result-content\">").unwrap();
    let fragment = html.find("<h2>Verdict</h2>").unwrap();
    assert!(panel < fragment);
    assert!(html.contains("<h2>Verdict</h2><ul><li><strong>Hire</strong></li></ul>"));
}

#[test]
fn test_viewport_meta_tag() {
    let html = render_document("Mobile test.", None);

    assert!(html.contains("<meta name=\"viewport\""));
    assert!(html.contains("width=device-width"));
}

// ============================================================================
// FILE BADGE TESTS
// ============================================================================

#[test]
fn test_badge_with_display_name() {
    let html = render_document(short_verdict(), Some("jane_cv"));
    assert!(html.contains("<span class=\"badge\">File</span> jane_cv<br/>"));
}

#[test]
fn test_badge_without_display_name() {
    let html = render_document(short_verdict(), None);
    assert!(html.contains("<span class=\"badge\">File</span> N/A<br/>"));
}

#[test]
fn test_badge_name_is_not_escaped() {
    let html = render_document("text", Some("drafts & notes"));
    assert!(html.contains("File</span> drafts & notes<br/>"));
}

// ============================================================================
// FILE NAMING TESTS
// ============================================================================

#[test]
fn test_export_file_name_uses_display_name() {
    assert_eq!(export_file_name(Some("jane_cv")), "jane_cv.html");
}

#[test]
fn test_export_file_name_fallback() {
    assert_eq!(export_file_name(None), "resume_analysis.html");
}

// ============================================================================
// CSS AND SELF-CONTAINMENT TESTS
// ============================================================================

#[test]
fn test_css_embedded() {
    let html = render_document("Test document.", None);

    assert!(html.contains("<style>"));
    assert!(html.contains("Resumark HTML Export - Report Styles"));
    assert!(html.contains("linear-gradient(135deg, #232526 0%, #414345 100%)"));
}

#[test]
fn test_embedded_css_matches_the_accessor() {
    let html = render_document("x", None);
    assert!(html.contains(report_css()));
}

#[test]
fn test_no_external_resources() {
    let html = render_document(sample_report(), Some("cv"));

    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("http://"));
    assert!(!html.contains("https://"));
}

// ============================================================================
// REGISTRY PARITY TESTS
// ============================================================================

#[test]
fn test_registry_document_output_matches_direct_call() {
    let registry = OutputRegistry::with_defaults();
    let options = RenderOptions::new().with_display_name("jane_cv");

    let via_registry = registry
        .render(short_verdict(), "document", &options)
        .unwrap();
    assert_eq!(via_registry, render_document(short_verdict(), Some("jane_cv")));
}

#[test]
fn test_registry_rejects_unknown_output() {
    let registry = OutputRegistry::with_defaults();
    let result = registry.render("text", "pdf", &RenderOptions::new());
    assert!(result.is_err());
}

// ============================================================================
// FULL DOCUMENT SNAPSHOT
// ============================================================================

#[test]
fn test_full_document() {
    let html = render_document(short_verdict(), Some("jane_cv"));

    assert_snapshot!(snapshot_without_styles(&html), @r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
      <meta charset="UTF-8">
      <meta name="viewport" content="width=device-width, initial-scale=1.0">
      <meta name="generator" content="resumark">
      <title>Resume Analysis Result</title>
      <style data-resumark-snapshot="removed"></style>
    </head>
    <body>
      <div class="container">
        <h1>Resume Analysis Result</h1>
        <div class="file-info">
          <span class="badge">File</span> jane_cv<br/>
        </div>
        <div class="result-content">
          <h2>Verdict</h2><ul><li><strong>Hire</strong></li></ul>
        </div>
      </div>
    </body>
    </html>
    "#);
}
