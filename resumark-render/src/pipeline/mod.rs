//! The four-stage rendering pipeline
//!
//! Source text flows through line classification, inline emphasis,
//! block assembly and break normalization, in that order. Each stage is
//! a pure function, so the stages are usable on their own (the CLI's
//! inspect command exposes the intermediate results) and
//! [`render_fragment`] is just their composition.

pub mod blocks;
pub mod breaks;
pub mod classify;
pub mod inline;

pub use blocks::{build_blocks, merge_adjacent_lists, serialize_blocks, Block, ListKind};
pub use breaks::normalize_breaks;
pub use classify::{classify_line, classify_lines, BlockTag};
pub use inline::{apply_emphasis, InlineText};

/// Render source text to an HTML fragment.
///
/// Total over all inputs: the empty string renders to the empty
/// fragment and nothing panics on odd markers or stray whitespace. The
/// output contains no literal newlines.
pub fn render_fragment(source: &str) -> String {
    // Step 1: split into lines and tag each one
    let tags = classify::classify_lines(source);

    // Step 2 + 3: emphasis, block wrapping, adjacent list merge
    let blocks = blocks::build_blocks(&tags);

    // Step 4: serialize, then rewrite surviving newlines to <br />
    let fragment = blocks::serialize_blocks(&blocks);
    breaks::normalize_breaks(&fragment)
}
