//! Document shell - wraps every route with head metadata, theme styles,
//! layout chrome and the error/catch boundaries

mod boundary;

pub use boundary::{caught_message, Escalated, ACCESS_DENIED, NOT_FOUND};

use anyhow::Result;
use chrono::Datelike;
use indexmap::IndexMap;
use std::sync::Arc;
use tera::Context;

use crate::components::RenderContext;
use crate::config::Settings;
use crate::error::{CaughtResponse, RouteError};
use crate::helpers::meta_tag;
use crate::templates::{DocumentData, SiteData, TemplateRenderer};
use crate::theme::REHYDRATE_SCRIPT;

/// Head metadata computed from the site settings, in emission order.
/// Settings that are unset or empty are left out.
pub fn meta(settings: &Settings) -> IndexMap<&'static str, String> {
    let configs = &settings.configs;
    let title = Some(configs.site_title.clone()).filter(|t| !t.is_empty());
    let description = Some(configs.description.clone()).filter(|d| !d.is_empty());
    let keywords = configs.keywords_line();
    let image = configs.social_media_image.clone().filter(|i| !i.is_empty());
    let twitter = configs.twitter.clone().filter(|t| !t.is_empty());

    let entries = [
        ("charset", Some("utf-8".to_string())),
        ("description", description.clone()),
        ("title", title.clone()),
        ("keywords", keywords),
        ("twitter:image", image.clone()),
        ("twitter:title", title.clone()),
        ("twitter:description", description.clone()),
        ("twitter:creator", twitter.clone()),
        ("twitter:site", twitter),
        ("twitter:card", Some("summary_large_image".to_string())),
        ("og:type", Some("website".to_string())),
        ("og:title", title),
        ("og:description", description),
        ("og:image", image),
    ];

    entries
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
}

/// A finished response body and its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: u16,
    pub html: String,
}

/// The document/layout shell
pub struct Document {
    renderer: TemplateRenderer,
    settings: Arc<Settings>,
}

impl Document {
    pub fn new(settings: Arc<Settings>) -> Result<Self> {
        Ok(Self {
            renderer: TemplateRenderer::new()?,
            settings,
        })
    }

    /// Render loaded route data, or the matching boundary when loading failed
    pub fn respond<T, V>(&self, loaded: Result<T, RouteError>, view: V) -> Rendered
    where
        V: FnOnce(&T, &mut RenderContext<'_>) -> String,
    {
        match loaded {
            Ok(data) => match self.render_page(|cx| view(&data, cx)) {
                Ok(html) => Rendered { status: 200, html },
                Err(e) => self.error_boundary(&e.to_string()),
            },
            Err(RouteError::Caught(caught)) => self.catch_boundary(&caught),
            Err(RouteError::Uncaught(e)) => self.error_boundary(&e.to_string()),
        }
    }

    /// Render a page body inside the document
    pub fn render_page<F>(&self, view: F) -> Result<String>
    where
        F: FnOnce(&mut RenderContext<'_>) -> String,
    {
        let mut cx = RenderContext::new(&self.settings);
        let content = view(&mut cx);
        let styles = cx.rehydrate_styles();

        let mut context = self.context(None, styles)?;
        context.insert("content", &content);
        self.renderer.render("page.html", &context)
    }

    /// Boundary for caught (status-bearing) responses
    pub fn catch_boundary(&self, caught: &CaughtResponse) -> Rendered {
        let message = match caught_message(caught) {
            Ok(message) => message,
            Err(escalated) => return self.error_boundary(&escalated.to_string()),
        };

        let title = format!("{} {}", caught.status, caught.status_text);
        let rendered = self.context(Some(title), String::new()).and_then(|mut context| {
            context.insert("status", &caught.status);
            context.insert("status_text", &caught.status_text);
            context.insert("message", message);
            self.renderer.render("caught.html", &context)
        });

        match rendered {
            Ok(html) => Rendered {
                status: caught.status,
                html,
            },
            Err(e) => self.error_boundary(&e.to_string()),
        }
    }

    /// Boundary for uncaught errors
    pub fn error_boundary(&self, message: &str) -> Rendered {
        tracing::error!("{}", message);

        let rendered = self
            .context(Some("Error!".to_string()), String::new())
            .and_then(|mut context| {
                context.insert("message", message);
                self.renderer.render("error.html", &context)
            });

        match rendered {
            Ok(html) => Rendered { status: 500, html },
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                Rendered {
                    status: 500,
                    html: "<h1>There was an error</h1>".to_string(),
                }
            }
        }
    }

    fn context(&self, title: Option<String>, styles: String) -> Result<Context> {
        let settings = &*self.settings;
        let configs = &settings.configs;
        let has_title = title.is_some();

        let meta_tags = meta(settings)
            .into_iter()
            .filter_map(|(key, value)| match key {
                "charset" => None,
                // an explicit document title replaces the site title
                "title" if has_title => None,
                "title" => Some(format!(
                    "<title>{}</title>",
                    crate::helpers::html_escape(&value)
                )),
                _ => Some(meta_tag(key, &value)),
            })
            .collect::<Vec<_>>()
            .join("\n");

        let data = DocumentData {
            lang: configs.language.clone(),
            title,
            theme_color: settings.theme.palette.primary.clone(),
            meta_tags,
            global_css: settings.theme.global_css(),
            styles,
            rehydrate_script: REHYDRATE_SCRIPT.to_string(),
            site: SiteData {
                title: configs.site_title.clone(),
                description: configs.description.clone(),
                home_url: crate::helpers::url_for(configs, "/"),
            },
            year: chrono::Local::now().year(),
        };

        Ok(Context::from_serialize(data)?)
    }
}
