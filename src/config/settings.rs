//! Process-wide settings handed to the document shell and the server

use std::sync::Arc;

use super::SiteConfig;
use crate::theme::Theme;

/// Read-only settings built once at startup
#[derive(Debug)]
pub struct Settings {
    pub configs: SiteConfig,
    pub theme: Theme,
}

impl Settings {
    /// Build the shared settings from a loaded configuration
    pub fn new(configs: SiteConfig) -> Arc<Self> {
        let theme = Theme::from_config(&configs.theme);
        Arc::new(Self { configs, theme })
    }
}

impl Default for Settings {
    fn default() -> Self {
        let configs = SiteConfig::default();
        let theme = Theme::from_config(&configs.theme);
        Self { configs, theme }
    }
}
