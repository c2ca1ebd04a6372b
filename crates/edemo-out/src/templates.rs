//! Template loading for the demo result panels.
//!
//! Templates live in a YAML file: one named Handlebars template per render
//! surface state (results, error, loading). The default set ships embedded
//! in the crate; a file path can be supplied to override it.

use serde::Deserialize;
use std::collections::HashMap;

/// The embedded default template set.
pub const DEFAULT_TEMPLATES: &str = include_str!("../templates/demo-results.yaml");

/// Top-level templates file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

impl TemplatesFile {
    /// Load templates from a YAML file on disk.
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read templates file: {}", e))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse templates: {}", e))
    }

    /// An empty set; every render against it fails with unknown-template.
    pub fn empty() -> Self {
        TemplatesFile {
            version: "1.0".to_string(),
            templates: HashMap::new(),
        }
    }

    /// List available template names.
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}
