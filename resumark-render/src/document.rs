//! Standalone report document assembly
//!
//! Wraps a rendered fragment in a complete dark-themed HTML page. The
//! page is self-contained: the stylesheet is embedded at build time and
//! nothing references an external resource, so the file opens offline.

/// Title of every exported report document.
pub const DOCUMENT_TITLE: &str = "Resume Analysis Result";

/// File stem used when no display name is supplied.
const FALLBACK_FILE_STEM: &str = "resume_analysis";

/// Placeholder shown in the file badge when no display name is supplied.
const FALLBACK_BADGE_NAME: &str = "N/A";

const REPORT_CSS: &str = include_str!("../css/report.css");

/// The stylesheet embedded into exported documents.
pub fn report_css() -> &'static str {
    REPORT_CSS
}

/// File name an exported document should be saved under.
///
/// The display name is used verbatim as the stem; callers pass the
/// original upload's name (extension already stripped) when they have
/// one.
pub fn export_file_name(display_name: Option<&str>) -> String {
    format!("{}.html", display_name.unwrap_or(FALLBACK_FILE_STEM))
}

/// Wrap a rendered fragment in the standalone report page.
///
/// The fragment and display name are trusted and embedded verbatim,
/// with no escaping. The display name lands in the file badge; absent,
/// the badge shows `N/A`.
pub fn wrap_in_document(fragment: &str, display_name: Option<&str>) -> String {
    let css = REPORT_CSS;
    let badge_name = display_name.unwrap_or(FALLBACK_BADGE_NAME);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="resumark">
  <title>{DOCUMENT_TITLE}</title>
  <style>
{css}
  </style>
</head>
<body>
  <div class="container">
    <h1>{DOCUMENT_TITLE}</h1>
    <div class="file-info">
      <span class="badge">File</span> {badge_name}<br/>
    </div>
    <div class="result-content">
      {fragment}
    </div>
  </div>
</body>
</html>"#
    )
}
