//! Template parsing and rendering functionality.

use minijinja::Environment;

use crate::error::Result;

mod filters;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Executes a template expression and returns whether it evaluates to true.
    ///
    /// An empty expression is vacuously true.
    fn execute_expression(&self, expr: &str, context: &serde_json::Value)
        -> Result<bool>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the standard filter set.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("camel_case", filters::to_camel_case);
        env.add_filter("kebab_case", filters::to_kebab_case);
        env.add_filter("pascal_case", filters::to_pascal_case);
        env.add_filter("snake_case", filters::to_snake_case);
        env.add_filter("screaming_snake_case", filters::to_screaming_snake_case);
        env.add_filter("regex", filters::regex_filter);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template)?;
        let tmpl = env.get_template("temp")?;
        Ok(tmpl.render(context)?)
    }

    fn execute_expression(
        &self,
        expr_str: &str,
        context: &serde_json::Value,
    ) -> Result<bool> {
        if expr_str.is_empty() {
            return Ok(true);
        }
        let expr = self.env.compile_expression(expr_str)?;
        Ok(expr.eval(context)?.is_true())
    }
}
