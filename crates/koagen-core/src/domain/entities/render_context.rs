use std::collections::HashMap;

use crate::domain::entities::options::ProjectOptions;

/// Context for template rendering.
///
/// Immutable after creation; `with_variable` returns a new instance.
///
/// ## Built-in Variables
///
/// | Variable         | Example  | Source                   |
/// |------------------|----------|--------------------------|
/// | `APP_NAME`       | "my-app" | Derived from destination |
/// | `VIEW_EXTENSION` | "jade"   | Selected view engine     |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(app_name: impl Into<String>) -> Self {
        let mut variables = HashMap::new();
        variables.insert("APP_NAME".to_string(), app_name.into());
        Self { variables }
    }

    /// Context with every built-in variable for `options`.
    pub fn for_options(options: &ProjectOptions) -> Self {
        Self::new(options.app_name())
            .with_variable("VIEW_EXTENSION", options.view_engine().extension())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViewEngine;

    #[test]
    fn standard_variables() {
        let options = ProjectOptions::builder("/tmp/shop")
            .view_engine(ViewEngine::Hogan)
            .build()
            .unwrap();
        let ctx = RenderContext::for_options(&options);

        assert_eq!(ctx.get("APP_NAME"), Some("shop"));
        assert_eq!(ctx.get("VIEW_EXTENSION"), Some("hjs"));
    }

    #[test]
    fn renders_repeated_and_unknown_placeholders() {
        let ctx = RenderContext::new("shop");
        assert_eq!(
            ctx.render("{{APP_NAME}}:server {{APP_NAME}} {{OTHER}}"),
            "shop:server shop {{OTHER}}"
        );
    }

    #[test]
    fn custom_variables() {
        let ctx = RenderContext::new("x").with_variable("PORT", "3000");
        assert_eq!(ctx.render("port={{PORT}}"), "port=3000");
    }
}
