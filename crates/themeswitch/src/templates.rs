//! Built-in HTML templates.
//!
//! Templates are compiled once into a shared environment. Names end in
//! `.html` so minijinja auto-escapes interpolated values.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::Error;

pub(crate) const SELECTOR: &str = "selector.html";
pub(crate) const PAGE: &str = "page.html";

const SELECTOR_SOURCE: &str = r#"<select name="theme">
{%- for option in options %}
  <option value="{{ option }}"{% if option == current %} selected{% endif %}>{{ option }}</option>
{%- endfor %}
</select>"#;

const PAGE_SOURCE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Theme Switcher Demo</title>
</head>
{{ body_open }}
  <header>
    <h1>Theme Switcher Demo</h1>
  </header>
  <main>
    <p>Select a theme below:</p>
    {% include "selector.html" %}
    <p>
      Current Theme: <strong>{{ current }}</strong>
    </p>
  </main>
  <footer>
    <p>© 2025 Theme Switcher App</p>
  </footer>
</body>
</html>
"#;

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(SELECTOR, SELECTOR_SOURCE)
        .expect("built-in selector template is valid");
    env.add_template(PAGE, PAGE_SOURCE)
        .expect("built-in page template is valid");
    env
});

/// Renders one of the built-in templates.
pub(crate) fn render<T: Serialize>(name: &str, data: &T) -> Result<String, Error> {
    let tmpl = ENV.get_template(name)?;
    Ok(tmpl.render(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_templates_compile() {
        assert!(ENV.get_template(SELECTOR).is_ok());
        assert!(ENV.get_template(PAGE).is_ok());
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let result = render("missing.html", &json!({}));
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render(SELECTOR, &json!({"options": ["<b>"], "current": "x"})).unwrap();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
