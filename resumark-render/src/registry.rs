//! Output registry for output discovery and selection
//!
//! This module provides a centralized registry for all available outputs.
//! Outputs can be registered and retrieved by name.

use crate::error::RenderError;
use crate::output::{Output, RenderOptions};
use std::collections::HashMap;

/// Registry of render outputs
///
/// Provides a centralized registry for all available outputs.
/// Outputs can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = OutputRegistry::new();
/// registry.register(MyOutput);
///
/// let output = registry.get("my-output")?;
/// let html = output.render("# Title", &RenderOptions::new());
/// ```
pub struct OutputRegistry {
    outputs: HashMap<String, Box<dyn Output>>,
}

impl OutputRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        OutputRegistry {
            outputs: HashMap::new(),
        }
    }

    /// Register an output
    ///
    /// If an output with the same name already exists, it will be replaced.
    pub fn register<O: Output + 'static>(&mut self, output: O) {
        self.outputs
            .insert(output.name().to_string(), Box::new(output));
    }

    /// Get an output by name
    pub fn get(&self, name: &str) -> Result<&dyn Output, RenderError> {
        self.outputs
            .get(name)
            .map(|o| o.as_ref())
            .ok_or_else(|| RenderError::OutputNotFound(name.to_string()))
    }

    /// Check if an output exists
    pub fn has(&self, name: &str) -> bool {
        self.outputs.contains_key(name)
    }

    /// List all available output names (sorted)
    pub fn list_outputs(&self) -> Vec<String> {
        let mut names: Vec<_> = self.outputs.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render source text using the specified output
    ///
    /// Looking up the output is the only thing that can fail; rendering
    /// itself is total.
    pub fn render(
        &self,
        source: &str,
        output: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        Ok(self.get(output)?.render(source, options))
    }

    /// Create a registry with default outputs
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in outputs
        registry.register(crate::outputs::FragmentOutput);
        registry.register(crate::outputs::DocumentOutput);

        registry
    }
}

impl Default for OutputRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
