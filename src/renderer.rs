//! Template rendering for the built-in component templates.
//! Templates are registered once under a name and rendered with a JSON context.
use crate::error::Result;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a registered template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name the template was registered under
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment holding every registered template
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with an empty environment.
    ///
    /// Block tags swallow their own line, and a final newline is kept, so
    /// template sources can be written the way the output should look.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Creates a renderer with every `(name, source)` pair registered.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a template source does not parse
    pub fn with_templates(templates: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut renderer = Self::new();
        for &(name, source) in templates {
            renderer.env.add_template(name, source)?;
        }
        Ok(renderer)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_registered_template() {
        let renderer =
            MiniJinjaRenderer::with_templates(&[("greeting", "Hello {{ name }}!\n")]).unwrap();
        let result = renderer.render("greeting", &serde_json::json!({ "name": "test" })).unwrap();
        assert_eq!(result, "Hello test!\n");
    }

    #[test]
    fn test_render_unknown_template() {
        let renderer = MiniJinjaRenderer::new();
        assert!(renderer.render("missing", &serde_json::Value::Null).is_err());
    }
}
