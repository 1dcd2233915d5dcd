//! Expansion of rule replacements.
//! Replacements are small MiniJinja templates such as `https://{{ url }}`,
//! rendered against the answers plus the current year.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};

/// Trait for replacement rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that refuses to expand unknown answers.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template is invalid or names an
    ///   answer that is not in `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_affixes() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({"url": "acme.dev", "namespace": "Acme", "lowerCasePrefix": "acme"});

        assert_eq!(engine.render("https://{{ url }}", &context).unwrap(), "https://acme.dev");
        assert_eq!(engine.render("{{ namespace }}\\", &context).unwrap(), "Acme\\");
        assert_eq!(engine.render("${{ lowerCasePrefix }}_", &context).unwrap(), "$acme_");
    }

    #[test]
    fn test_render_unknown_answer_fails() {
        let engine = MiniJinjaRenderer::new();
        assert!(engine.render("{{ missing }}", &json!({})).is_err());
    }
}
