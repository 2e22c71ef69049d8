//! Configuration module

mod settings;
mod site;

pub use settings::Settings;
pub use site::ApiConfig;
pub use site::SiteConfig;
pub use site::ThemeConfig;
