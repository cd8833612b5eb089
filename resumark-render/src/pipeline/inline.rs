//! Inline emphasis (second stage of the pipeline)
//!
//! Rewrites `**bold**` and `*italic*` marker pairs inside one line's text
//! into `<strong>` and `<em>` tags. The bold pass runs first and consumes
//! its spans whole, so a stray marker inside a bold interior is never
//! reprocessed by the italic pass. Pairing is non-greedy and emphasis
//! does not nest.

/// One line's text after emphasis rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineText {
    /// Payload with marker pairs rewritten to inline tags
    pub html: String,
    /// True when the rewritten payload starts with an HTML tag, either
    /// one produced here or one literal in the source. Such lines are
    /// exempt from paragraph wrapping.
    pub leads_with_tag: bool,
}

/// A piece of the line during the two-pass rewrite. Emphasis pieces are
/// finished output; only text pieces are visible to the italic pass.
enum Piece {
    Text(String),
    Emphasis(String),
}

/// Rewrite emphasis markers in one line's text.
///
/// Unpaired markers are left as literal characters. An empty interior
/// (`****`) still produces a tag pair.
pub fn apply_emphasis(text: &str) -> InlineText {
    let mut html = String::with_capacity(text.len());
    for piece in bold_pass(text) {
        match piece {
            Piece::Text(plain) => html.push_str(&italic_pass(&plain)),
            Piece::Emphasis(wrapped) => html.push_str(&wrapped),
        }
    }
    let leads_with_tag = leads_with_html_tag(&html);
    InlineText {
        html,
        leads_with_tag,
    }
}

/// Split off the next non-greedy `marker .. marker` span.
///
/// Returns the text before the span, the span interior and the text
/// after it, or None when no complete pair remains.
fn split_span<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let open = text.find(marker)?;
    let interior_start = open + marker.len();
    let close = interior_start + text[interior_start..].find(marker)?;
    Some((
        &text[..open],
        &text[interior_start..close],
        &text[close + marker.len()..],
    ))
}

/// First pass: wrap `**..**` spans in `<strong>` tags.
fn bold_pass(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while let Some((before, interior, after)) = split_span(rest, "**") {
        if !before.is_empty() {
            pieces.push(Piece::Text(before.to_string()));
        }
        pieces.push(Piece::Emphasis(format!("<strong>{interior}</strong>")));
        rest = after;
    }
    if !rest.is_empty() {
        pieces.push(Piece::Text(rest.to_string()));
    }
    pieces
}

/// Second pass: wrap `*..*` spans in `<em>` tags. Runs only over text
/// left untouched by the bold pass.
fn italic_pass(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((before, interior, after)) = split_span(rest, "*") {
        out.push_str(before);
        out.push_str("<em>");
        out.push_str(interior);
        out.push_str("</em>");
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Whether a rewritten payload starts with one of the tags the block
/// wrapper treats as already-HTML: `<h` plus a digit, `<ul`, `<ol`,
/// `<li`, `<strong` or `<em`.
fn leads_with_html_tag(html: &str) -> bool {
    if let Some(rest) = html.strip_prefix("<h") {
        if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return true;
        }
    }
    ["<ul", "<ol", "<li", "<strong", "<em"]
        .iter()
        .any(|prefix| html.starts_with(prefix))
}
