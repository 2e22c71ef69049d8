//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub site_title: String,
    pub description: String,
    pub keywords: Option<Vec<String>>,
    pub social_media_image: Option<String>,
    pub twitter: Option<String>,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Content API
    #[serde(default)]
    pub api: ApiConfig,

    // Directory
    pub static_dir: String,

    // Date / Time format
    pub date_format: String,

    // Theme tokens
    #[serde(default)]
    pub theme: ThemeConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Headless Blog".to_string(),
            description: String::new(),
            keywords: None,
            social_media_image: None,
            twitter: None,
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            api: ApiConfig::default(),

            static_dir: "static".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),

            theme: ThemeConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Keywords joined for the `keywords` meta tag
    pub fn keywords_line(&self) -> Option<String> {
        self.keywords
            .as_ref()
            .filter(|k| !k.is_empty())
            .map(|k| k.join(", "))
    }
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint
    pub endpoint: String,
    /// Bearer token sent with every request
    pub auth_token: Option<String>,
    /// Request timeout; unset leaves the HTTP client default in place
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/graphql".to_string(),
            auth_token: None,
            timeout_secs: None,
        }
    }
}

/// Theme tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub black: String,
    pub white: String,
    pub text: String,
    pub background: String,
    pub font_family: String,
    /// Base spacing unit in pixels
    pub spacing: u32,
    pub max_width: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#1976d2".to_string(),
            black: "#000".to_string(),
            white: "#fff".to_string(),
            text: "rgba(0, 0, 0, 0.87)".to_string(),
            background: "#fff".to_string(),
            font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif".to_string(),
            spacing: 8,
            max_width: "900px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site_title, "Headless Blog");
        assert_eq!(config.api.endpoint, "http://localhost:8080/graphql");
        assert_eq!(config.theme.spacing, 8);
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r##"
site_title: My Blog
description: Notes and essays
keywords: [rust, graphql]
twitter: "@me"
api:
  endpoint: https://cms.example.com/graphql
  timeout_secs: 10
theme:
  primary: "#ff5722"
"##;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site_title, "My Blog");
        assert_eq!(config.twitter.as_deref(), Some("@me"));
        assert_eq!(config.api.endpoint, "https://cms.example.com/graphql");
        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.theme.primary, "#ff5722");
        // untouched theme tokens keep their defaults
        assert_eq!(config.theme.black, "#000");
        assert_eq!(config.keywords_line().as_deref(), Some("rust, graphql"));
    }

    #[test]
    fn test_empty_keywords() {
        let mut config = SiteConfig::default();
        config.keywords = Some(Vec::new());
        assert!(config.keywords_line().is_none());
    }
}
