//! Compiled Handlebars registry over a template set.

use crate::templates::TemplatesFile;
use handlebars::Handlebars;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("template render failed: {0}")]
    Render(String),
}

/// Compiled renderer over one template set.
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

impl<'a> TemplateRenderer<'a> {
    /// Compile a renderer from a templates file.
    pub fn new(templates: TemplatesFile) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);

        for (name, template) in &templates.templates {
            let _ = handlebars.register_template_string(name, &template.template);
        }

        TemplateRenderer {
            handlebars,
            templates,
        }
    }

    /// Load and compile from a file path.
    pub fn load(path: &str) -> Result<Self, String> {
        let templates = TemplatesFile::load(path)?;
        Ok(Self::new(templates))
    }

    /// Render a named template with data.
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, RenderError> {
        if !self.handlebars.has_template(template_name) {
            return Err(RenderError::UnknownTemplate(template_name.to_string()));
        }
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(e.to_string()))
    }

    /// List available template names.
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::DEFAULT_TEMPLATES;
    use serde_json::json;

    fn renderer() -> TemplateRenderer<'static> {
        TemplateRenderer::new(TemplatesFile::from_yaml(DEFAULT_TEMPLATES).unwrap())
    }

    #[test]
    fn test_render_known_template() {
        let html = renderer()
            .render("error_message", &json!({ "message": "bad prime" }))
            .unwrap();
        assert!(html.contains("error-message"));
        assert!(html.contains("bad prime"));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let err = renderer().render("no_such_panel", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(_)));
    }
}
