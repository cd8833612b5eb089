//! Line classification (first stage of the pipeline)
//!
//! Splits source text into lines and tags each one with a [`BlockTag`].
//! Classification looks only at a line's leading characters; it never looks
//! at neighboring lines, so the stage is a plain map over the line sequence.

use serde::Serialize;

/// Block-level classification of one source line.
///
/// Precedence mirrors the dialect: heading markers bind at column zero
/// only, list markers tolerate leading whitespace, everything else
/// non-empty is a plain line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockTag {
    /// `# `, `## ` or `### ` at column zero; level is 1-3
    Heading { level: u8, text: String },
    /// `* ` after optional leading whitespace
    UnorderedItem { text: String },
    /// One or more ASCII digits, a period and a space, after optional
    /// leading whitespace
    OrderedItem { text: String },
    /// Any other non-empty line, kept whole (leading whitespace included)
    Plain { text: String },
    /// Empty line
    Blank,
}

/// Classify a single line into exactly one [`BlockTag`].
///
/// First match wins: h3, h2, h1, unordered item, ordered item, plain,
/// blank. Marker characters cannot be escaped; a literal `# ` at line
/// start is always a heading marker.
pub fn classify_line(line: &str) -> BlockTag {
    for (marker, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = line.strip_prefix(marker) {
            return BlockTag::Heading {
                level,
                text: rest.to_string(),
            };
        }
    }

    let unindented = line.trim_start();
    if let Some(rest) = unindented.strip_prefix("* ") {
        return BlockTag::UnorderedItem {
            text: rest.to_string(),
        };
    }
    if let Some(rest) = strip_ordered_marker(unindented) {
        return BlockTag::OrderedItem {
            text: rest.to_string(),
        };
    }

    if line.is_empty() {
        BlockTag::Blank
    } else {
        BlockTag::Plain {
            text: line.to_string(),
        }
    }
}

/// Classify every line of a source string.
///
/// Uses terminator semantics: the empty string yields no tags, a trailing
/// newline does not yield a trailing blank, and `\r\n` counts as a plain
/// line terminator.
pub fn classify_lines(source: &str) -> Vec<BlockTag> {
    source.lines().map(classify_line).collect()
}

/// Strip a `<digits>. ` marker, returning the remainder of the item.
fn strip_ordered_marker(text: &str) -> Option<&str> {
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    // ASCII digits are one byte each, so the char count is a byte offset
    text[digits..].strip_prefix(". ")
}
