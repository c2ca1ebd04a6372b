//! Rendering layer for the demo panels.
//!
//! Converts the module's decoded result records into the HTML fragment that
//! replaces a display surface, plus the two shared fragments every demo
//! uses: the inline error convention and the loading indicator.
//!
//! # Example
//!
//! ```ignore
//! use edemo_out::{render_sha256_results, Sha256Result, Sha256Step};
//!
//! let result = Sha256Result {
//!     hash: "2cf24d...".to_string(),
//!     steps: vec![],
//! };
//! let html = render_sha256_results(&result).unwrap();
//! assert!(html.contains("SHA-256 Hash"));
//! ```

pub mod model;
pub mod renderer;
pub mod templates;

pub use model::{RsaKeyPair, RsaResult, RsaStep, Sha256Result, Sha256Step};
pub use renderer::{RenderError, TemplateRenderer};
pub use templates::{Template, TemplatesFile, DEFAULT_TEMPLATES};

use once_cell::sync::Lazy;
use serde_json::json;

/// The renderer compiled from the embedded template set.
pub fn default_renderer() -> &'static TemplateRenderer<'static> {
    static RENDERER: Lazy<TemplateRenderer<'static>> = Lazy::new(|| {
        let templates =
            TemplatesFile::from_yaml(DEFAULT_TEMPLATES).unwrap_or_else(|_| TemplatesFile::empty());
        TemplateRenderer::new(templates)
    });
    &RENDERER
}

/// Render the full RSA result panel.
pub fn render_rsa_results(result: &RsaResult) -> Result<String, RenderError> {
    let data = serde_json::to_value(result).map_err(|e| RenderError::Render(e.to_string()))?;
    default_renderer().render("rsa_results", &data)
}

/// Render the full SHA-256 result panel.
pub fn render_sha256_results(result: &Sha256Result) -> Result<String, RenderError> {
    let data = serde_json::to_value(result).map_err(|e| RenderError::Render(e.to_string()))?;
    default_renderer().render("sha256_results", &data)
}

/// The shared inline error fragment.
pub fn error_html(message: &str) -> String {
    default_renderer()
        .render("error_message", &json!({ "message": message }))
        .unwrap_or_else(|_| format!("❌ {}", message))
}

/// The loading indicator fragment.
pub fn loading_html(message: &str) -> String {
    default_renderer()
        .render("loading", &json!({ "message": message }))
        .unwrap_or_else(|_| format!("⏳ {}", message))
}
