//! Built-in outputs
//!
//! Two outputs ship by default: the bare fragment the web client injects
//! into its result panel, and the standalone document the export button
//! offers for download. Both run the same pipeline; the document output
//! additionally wraps the fragment in the report page.

use crate::document;
use crate::output::{Output, RenderOptions};
use crate::pipeline;

/// Bare HTML fragment, for embedding in a host page.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentOutput;

impl Output for FragmentOutput {
    fn name(&self) -> &str {
        "fragment"
    }

    fn description(&self) -> &str {
        "Bare HTML fragment for embedding in a host page"
    }

    fn render(&self, source: &str, _options: &RenderOptions) -> String {
        pipeline::render_fragment(source)
    }
}

/// Self-contained report page with embedded styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentOutput;

impl Output for DocumentOutput {
    fn name(&self) -> &str {
        "document"
    }

    fn description(&self) -> &str {
        "Self-contained HTML report page with embedded styles"
    }

    fn render(&self, source: &str, options: &RenderOptions) -> String {
        let fragment = pipeline::render_fragment(source);
        document::wrap_in_document(&fragment, options.display_name.as_deref())
    }
}
