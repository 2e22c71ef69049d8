//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Starter configuration written by `init`
pub const DEFAULT_CONFIG: &str = r#"# Site
site_title: Headless Blog
description: ''
keywords:
social_media_image:
twitter:
language: en

# URL
url: http://localhost:4000
root: /

# Content API
api:
  endpoint: http://localhost:8080/graphql
  # auth_token:
  # timeout_secs: 30

# Directory
static_dir: static

# Date format for comments
date_format: MMMM DD, YYYY

# Theme tokens
theme:
  primary: '#1976d2'
  black: '#000'
  white: '#fff'
  text: 'rgba(0, 0, 0, 0.87)'
  background: '#fff'
  spacing: 8
  max_width: 900px
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }
    fs::write(&config_path, DEFAULT_CONFIG)?;

    tracing::debug!("Wrote {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_init_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("static").is_dir());
        let config = SiteConfig::load(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config.site_title, "Headless Blog");
        assert_eq!(config.theme.primary, "#1976d2");
        assert!(config.keywords.is_none());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
