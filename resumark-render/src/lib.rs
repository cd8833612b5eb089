//! Markdown-subset rendering for resume analysis reports
//!
//!     This crate turns the markdown-flavored text produced by the resume
//!     analysis backend into HTML: either a bare fragment for embedding in a
//!     host page, or a complete self-contained report document for download.
//!
//!     TLDR: for output authors:
//!         - The dialect is a fixed line-oriented subset (headings 1-3, flat
//!           lists, bold and italic), not CommonMark. Do not reach for a
//!           markdown crate; staying byte-compatible with what the analysis
//!           frontend displayed is the point.
//!         - Rendering is total. Any text input produces some HTML; there is
//!           no parse error path anywhere in the pipeline.
//!         - Input is trusted (it comes from our own backend), so nothing is
//!           escaped. Do not feed these renderers untrusted text.
//!
//! Architecture
//!
//!     The pipeline is four pure stages over the line sequence
//!     (./pipeline/mod.rs): classify lines, rewrite inline emphasis, assemble
//!     and merge blocks, normalize the surviving newlines. Keeping the stages
//!     pure means each one is testable in isolation, and the CLI's inspect
//!     command can dump intermediate results without a special code path.
//!
//!     This is a pure lib, that is, it powers the resumark CLI but is shell
//!     agnostic; no code here should suppose a shell environment, be it std
//!     print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── output.rs               # Output trait definition
//!     ├── outputs.rs              # Built-in fragment and document outputs
//!     ├── registry.rs             # OutputRegistry for discovery and selection
//!     ├── document.rs             # Report page template and export naming
//!     ├── pipeline
//!     │   ├── classify.rs         # Line tagging
//!     │   ├── inline.rs           # Bold / italic rewriting
//!     │   ├── blocks.rs           # Block assembly and list merging
//!     │   ├── breaks.rs           # Newline to <br /> rewriting
//!     │   └── mod.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # Shared report fixtures
//!     ├── render                  # Fragment and export integration tests
//!     └── properties.rs           # Property tests over arbitrary input
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so we need to include these in the mod.
//!
//! Core Algorithms
//!
//!     The one structural subtlety is list merging. Consecutive list lines
//!     each produce a single-item list, and adjacent same-kind lists are
//!     merged on the block structure before any text is emitted
//!     (./pipeline/blocks.rs). Merging before break normalization matters:
//!     once blank lines have become <br /> tags, nothing should glue two
//!     lists separated by one back together.
//!
//!     Newline ownership is the other invariant worth knowing. A non-blank
//!     line's terminator is consumed when its block is wrapped, so the only
//!     newlines reaching the final stage are the ones blank lines produced.
//!     That is what makes `* a` / `* b` on consecutive lines one list
//!     instead of two lists with a break between them.
//!
//! Outputs
//!
//!     Render targets are implemented with the Output trait (./output.rs):
//!     outputs have a render() method, a name and a file extension.
//!     - Output trait: uniform interface over render targets
//!     - OutputRegistry: centralized discovery and selection of outputs
//!     - Output implementations: fragment and document (./outputs.rs)
//!
//! Library Choices
//!
//!     The dialect is small enough that the pipeline is hand rolled; a real
//!     markdown crate would quietly fix quirks the analysis frontend depends
//!     on (loose tag prefixes, unescaped payloads, non-nesting emphasis).
//!     serde is on the stage types so the CLI can dump intermediate stage
//!     output as JSON without maintaining mirror types.

pub mod document;
pub mod error;
pub mod output;
pub mod outputs;
pub mod pipeline;
pub mod registry;

pub use error::RenderError;
pub use output::{Output, RenderOptions};
pub use registry::OutputRegistry;

pub use document::{export_file_name, report_css, wrap_in_document};
pub use pipeline::render_fragment;

/// Renders source text to a standalone report document.
///
/// Equivalent to running the "document" output: the pipeline renders the
/// fragment and the report template wraps it. The display name lands in the
/// document's file badge; pass None to get the `N/A` placeholder.
pub fn render_document(source: &str, display_name: Option<&str>) -> String {
    document::wrap_in_document(&pipeline::render_fragment(source), display_name)
}
