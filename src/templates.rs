// src/templates.rs
// DOCUMENTATION: HTML page rendering
// PURPOSE: Registry of Handlebars page templates compiled into the binary

use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::DealershipError;

static PAGES: &[(&str, &str)] = &[
    ("cars", include_str!("../templates/cars.hbs")),
    ("car_detail", include_str!("../templates/car_detail.hbs")),
    ("brands", include_str!("../templates/brands.hbs")),
    ("callback", include_str!("../templates/callback.hbs")),
    ("reviews", include_str!("../templates/reviews.hbs")),
    ("contacts", include_str!("../templates/contacts.hbs")),
    ("not_found", include_str!("../templates/not_found.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

static PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../templates/partials/header.hbs")),
    ("footer", include_str!("../templates/partials/footer.hbs")),
    ("captcha", include_str!("../templates/partials/captcha.hbs")),
];

/// Compiled once on first use; a broken template is kept as the error message
static REGISTRY: Lazy<Result<Handlebars<'static>, String>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    for (name, source) in PARTIALS {
        hb.register_partial(name, *source)
            .map_err(|e| format!("partial '{name}' is invalid: {e}"))?;
    }
    for (name, source) in PAGES {
        hb.register_template_string(name, *source)
            .map_err(|e| format!("template '{name}' is invalid: {e}"))?;
    }
    Ok(hb)
});

/// Render a page by name using Handlebars.
///
/// Usage:
///     render("cars", &json!({"title": "Cars", "cars": []}))
///
/// Values are HTML-escaped unless a template uses triple braces.
pub fn render<T: Serialize>(name: &str, ctx: &T) -> Result<String, DealershipError> {
    let hb = REGISTRY
        .as_ref()
        .map_err(|e| DealershipError::TemplateError(e.clone()))?;

    if !hb.has_template(name) {
        return Err(DealershipError::TemplateError(format!(
            "unknown template '{name}'"
        )));
    }

    hb.render(name, ctx)
        .map_err(|e| DealershipError::TemplateError(format!("rendering '{name}' failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_page_renders_with_minimal_context() {
        let ctx = json!({"title": "t", "status": 404});
        for (name, _) in PAGES {
            assert!(render(name, &ctx).is_ok(), "template {} failed", name);
        }
    }

    #[test]
    fn test_registry_compiles_every_page_once() {
        let hb = REGISTRY.as_ref().expect("templates compile");
        assert_eq!(hb.get_templates().len(), PAGES.len() + PARTIALS.len());
        for (name, _) in PAGES {
            assert!(hb.has_template(name));
        }
    }

    #[test]
    fn test_unknown_template() {
        let err = render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, DealershipError::TemplateError(_)));
    }

    #[test]
    fn test_values_are_escaped() {
        let html = render(
            "cars",
            &json!({"title": "Cars", "cars": [{"id": 1, "title": "<script>x</script>", "price": 1}]}),
        )
        .unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
