//! headless-blog: a server-rendered blog front-end for headless content APIs
//!
//! Route loaders fetch nodes from a GraphQL content API, presentational
//! components render them, and a Tera document shell wraps every page with
//! site metadata, theme styles and error/catch boundaries.

pub mod api;
pub mod commands;
pub mod components;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod helpers;
pub mod routes;
pub mod server;
pub mod templates;
pub mod theme;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use api::{ContentApi, FixtureContentApi, GraphQLClient};

/// The site being served
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Static asset directory
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            static_dir,
        })
    }

    /// Build the read-only settings shared by every render
    pub fn settings(&self) -> Arc<config::Settings> {
        config::Settings::new(self.config.clone())
    }

    /// The content API to read from: fixtures when given, the GraphQL endpoint otherwise
    pub fn content_api(&self, fixtures: Option<&Path>) -> Result<Arc<dyn ContentApi>> {
        match fixtures {
            Some(path) => {
                tracing::info!("Serving content from fixtures {:?}", path);
                Ok(Arc::new(FixtureContentApi::load(path)?))
            }
            None => {
                tracing::info!("Using content API at {}", self.config.api.endpoint);
                Ok(Arc::new(GraphQLClient::from_config(&self.config.api)?))
            }
        }
    }
}
