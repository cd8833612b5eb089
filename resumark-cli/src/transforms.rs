//! CLI-specific transforms
//!
//! This module defines the transform names available to the inspect
//! command. Each transform exposes one cut through the rendering pipeline
//! so problems can be narrowed to a stage.
//!
//! ## Transform Pipeline
//!
//! The renderer has four stages, and the transforms snapshot them in order:
//!
//! 1. **Classification** - Source lines → tagged lines
//!    - `lines-json`: one tag per line, as pretty JSON
//!
//! 2. **Block assembly** - Tagged lines → merged block sequence
//!    - `blocks-json`: blocks after emphasis and list merging, as pretty JSON
//!
//! 3. **Serialization** - Blocks → HTML
//!    - `fragment`: the final newline-free fragment
//!    - `document`: the complete standalone report page
//!
//! ## Extra Parameters
//!
//! Transforms accept extra parameters via `--extra-<name> [value]`:
//!
//! - `name`: display name shown in the document transform's file badge
//!
//! Example: `resumark inspect report.md document --extra-name jane_cv`

use resumark_render::pipeline::{build_blocks, classify_lines};
use resumark_render::{render_document, render_fragment};
use std::collections::HashMap;

/// All available CLI transforms, one per pipeline cut
pub const AVAILABLE_TRANSFORMS: &[&str] = &["lines-json", "blocks-json", "fragment", "document"];

/// Execute a named transform on source text with optional extra parameters
///
/// # Arguments
///
/// * `source` - The report text to transform
/// * `transform_name` - The transform to apply (e.g., "blocks-json")
/// * `extra_params` - Optional parameters for the transform
///
/// # Extra Parameters
///
/// - `name`: display name for the document transform's file badge
///
/// # Returns
///
/// The transformed output as a string, or an error message
///
/// # Examples
///
/// ```ignore
/// let source = "# Report\n\n* Finding";
/// let params = HashMap::new();
///
/// // View the merged block structure
/// let output = execute_transform(source, "blocks-json", &params)?;
///
/// // Render the full export page with a badge name
/// let mut named = HashMap::new();
/// named.insert("name".to_string(), "jane_cv".to_string());
/// let output = execute_transform(source, "document", &named)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "lines-json" => {
            let tags = classify_lines(source);
            serde_json::to_string_pretty(&tags)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "blocks-json" => {
            let blocks = build_blocks(&classify_lines(source));
            serde_json::to_string_pretty(&blocks)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "fragment" => Ok(render_fragment(source)),
        "document" => {
            let name = extra_params.get("name").map(|s| s.as_str());
            Ok(render_document(source, name))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}
