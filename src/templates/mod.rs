//! Built-in document templates using Tera template engine
//!
//! The layout, page and boundary templates are embedded in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded default templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Fragments arrive pre-rendered; templates escape explicitly
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("default/layout.html")),
            ("page.html", include_str!("default/page.html")),
            ("error.html", include_str!("default/error.html")),
            ("caught.html", include_str!("default/caught.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("default/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("default/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("default/partials/footer.html"),
            ),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    Ok(tera::Value::String(crate::helpers::strip_html(&s)))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    Ok(tera::Value::String(crate::helpers::truncate(
        &s,
        length,
        Some(&omission),
    )))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct DocumentData {
    pub lang: String,
    pub title: Option<String>,
    pub theme_color: String,
    pub meta_tags: String,
    pub global_css: String,
    pub styles: String,
    pub rehydrate_script: String,
    pub site: SiteData,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub home_url: String,
}
