//! Block assembly (third stage of the pipeline)
//!
//! Turns the tagged line sequence into block-level elements, runs the
//! inline emphasis pass over each payload, merges adjacent same-kind
//! lists and serializes the result. Merging happens on the block
//! structure, before any text is emitted, so it cannot be confused by
//! the line breaks inserted later.

use serde::Serialize;

use super::classify::BlockTag;
use super::inline::{apply_emphasis, InlineText};

/// Which list element a [`Block::List`] serializes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// One block-level element of the fragment.
///
/// Payloads already carry inline tags; serialization only adds the
/// block-level wrappers around them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading { level: u8, html: String },
    List { kind: ListKind, items: Vec<String> },
    Paragraph { html: String },
    /// Plain line that already leads with an HTML tag; emitted unwrapped
    Passthrough { html: String },
    /// Blank source line; becomes a `<br />` during break normalization
    Break,
}

/// Build the block sequence for a tagged line sequence.
///
/// Every tag maps to exactly one block, then adjacent same-kind lists
/// collapse into one.
pub fn build_blocks(tags: &[BlockTag]) -> Vec<Block> {
    let blocks = tags.iter().map(block_for_tag).collect();
    merge_adjacent_lists(blocks)
}

fn block_for_tag(tag: &BlockTag) -> Block {
    match tag {
        BlockTag::Heading { level, text } => Block::Heading {
            level: *level,
            html: apply_emphasis(text).html,
        },
        BlockTag::UnorderedItem { text } => Block::List {
            kind: ListKind::Unordered,
            items: vec![apply_emphasis(text).html],
        },
        BlockTag::OrderedItem { text } => Block::List {
            kind: ListKind::Ordered,
            items: vec![apply_emphasis(text).html],
        },
        BlockTag::Plain { text } => {
            let InlineText {
                html,
                leads_with_tag,
            } = apply_emphasis(text);
            if leads_with_tag {
                Block::Passthrough { html }
            } else {
                Block::Paragraph { html }
            }
        }
        BlockTag::Blank => Block::Break,
    }
}

/// Collapse runs of same-kind lists into single lists.
///
/// Only directly adjacent lists merge. Any block in between, including
/// a [`Block::Break`], keeps them separate, and an unordered list never
/// merges with an ordered one.
pub fn merge_adjacent_lists(blocks: Vec<Block>) -> Vec<Block> {
    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match (merged.pop(), block) {
            (
                Some(Block::List {
                    kind: tail_kind,
                    items: mut tail_items,
                }),
                Block::List { kind, items },
            ) if tail_kind == kind => {
                tail_items.extend(items);
                merged.push(Block::List {
                    kind,
                    items: tail_items,
                });
            }
            (Some(tail), block) => {
                merged.push(tail);
                merged.push(block);
            }
            (None, block) => merged.push(block),
        }
    }
    merged
}

/// Serialize blocks to an HTML fragment.
///
/// Breaks serialize as `\n` here; the final pipeline stage rewrites
/// them to `<br />` tags.
pub fn serialize_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, html } => {
                out.push_str(&format!("<h{level}>{html}</h{level}>"));
            }
            Block::List { kind, items } => {
                out.push_str(&format!("<{}>", kind.tag()));
                for item in items {
                    out.push_str(&format!("<li>{item}</li>"));
                }
                out.push_str(&format!("</{}>", kind.tag()));
            }
            Block::Paragraph { html } => {
                out.push_str(&format!("<p>{html}</p>"));
            }
            Block::Passthrough { html } => out.push_str(html),
            Block::Break => out.push('\n'),
        }
    }
    out
}
