//! Error types for output operations

use std::fmt;

/// Errors that can occur when selecting an output through the registry.
///
/// Rendering itself is total: once an output has been resolved, producing
/// HTML from a source string cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Output not found in registry
    OutputNotFound(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::OutputNotFound(name) => write!(f, "Output '{name}' not found"),
        }
    }
}

impl std::error::Error for RenderError {}
