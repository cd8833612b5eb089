//! Output trait definition
//!
//! This module defines the core Output trait that all output implementations must implement.
//! The trait provides a uniform interface for turning analysis markdown into HTML.

/// Options accepted by every [`Output`] implementation.
///
/// The display name is the only knob the renderer has: it feeds the file
/// badge and the export file name. Outputs that do not wrap the fragment
/// in a document ignore it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Name shown in the "File" badge of exported documents
    pub display_name: Option<String>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Trait for HTML outputs
///
/// Implementors convert a markdown source string into one of the HTML
/// consumption shapes (bare fragment, standalone document). Rendering is
/// total: any string input, including the empty string, produces output.
///
/// # Examples
///
/// ```ignore
/// struct MyOutput;
///
/// impl Output for MyOutput {
///     fn name(&self) -> &str {
///         "my-output"
///     }
///
///     fn render(&self, source: &str, _options: &RenderOptions) -> String {
///         // Turn source into HTML
///         todo!()
///     }
/// }
/// ```
pub trait Output: Send + Sync {
    /// The name of this output (e.g., "fragment", "document")
    fn name(&self) -> &str;

    /// Optional description of this output
    fn description(&self) -> &str {
        ""
    }

    /// File extension for artifacts of this output, without the leading dot
    fn file_extension(&self) -> &str {
        "html"
    }

    /// Render markdown source into this output's HTML shape
    fn render(&self, source: &str, options: &RenderOptions) -> String;
}
