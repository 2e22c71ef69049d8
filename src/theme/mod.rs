//! Theme module - design tokens, per-render style collection and style rehydration

mod effect;
mod style;

pub use effect::OnceEffect;
pub use style::{StyleCache, Sx};

use crate::config::ThemeConfig;

/// Client script that moves server-collected style tags to the insertion
/// point on first load. Guarded so a second execution does nothing.
pub const REHYDRATE_SCRIPT: &str = r#"<script>
(function() {
    if (window.__hbStylesRehydrated) return;
    window.__hbStylesRehydrated = true;
    var point = document.querySelector('meta[name="style-insertion-point"]');
    if (!point) return;
    var tags = document.querySelectorAll('style[data-hb]');
    for (var i = 0; i < tags.length; i++) {
        document.head.insertBefore(tags[i], point);
    }
})();
</script>"#;

/// Resolved theme tokens
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: String,
    pub max_width: String,
    spacing: u32,
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub primary: String,
    pub common: CommonColors,
    pub text: String,
    pub background: String,
}

#[derive(Debug, Clone)]
pub struct CommonColors {
    pub black: String,
    pub white: String,
}

impl Theme {
    /// Build a theme from configured tokens
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            palette: Palette {
                primary: config.primary.clone(),
                common: CommonColors {
                    black: config.black.clone(),
                    white: config.white.clone(),
                },
                text: config.text.clone(),
                background: config.background.clone(),
            },
            font_family: config.font_family.clone(),
            max_width: config.max_width.clone(),
            spacing: config.spacing.max(1),
        }
    }

    /// Spacing in pixels for a number of units
    pub fn spacing(&self, units: f64) -> String {
        let px = units * self.spacing as f64;
        if px.fract() == 0.0 {
            format!("{}px", px as i64)
        } else {
            format!("{}px", px)
        }
    }

    /// Global stylesheet applied to every page
    pub fn global_css(&self) -> String {
        format!(
            "*,*::before,*::after{{box-sizing:border-box}}\
             body{{margin:0;font-family:{font};color:{text};background:{bg};line-height:1.5}}\
             a{{color:{primary}}}\
             .hb-header{{padding:{pad} {gap};border-bottom:1px solid rgba(0,0,0,0.12)}}\
             .hb-header a{{color:{black};text-decoration:none;font-weight:500;font-size:1.25rem}}\
             .hb-header p{{margin:0;color:rgba(0,0,0,0.6)}}\
             .hb-main{{max-width:{width};margin:0 auto;padding:{gap}}}\
             .hb-footer{{max-width:{width};margin:0 auto;padding:{gap};color:rgba(0,0,0,0.6);font-size:0.875rem}}",
            font = self.font_family,
            text = self.palette.text,
            bg = self.palette.background,
            primary = self.palette.primary,
            black = self.palette.common.black,
            width = self.max_width,
            pad = self.spacing(2.0),
            gap = self.spacing(3.0),
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing() {
        let theme = Theme::default();
        assert_eq!(theme.spacing(1.0), "8px");
        assert_eq!(theme.spacing(5.0), "40px");
        assert_eq!(theme.spacing(0.5), "4px");
    }

    #[test]
    fn test_global_css_uses_tokens() {
        let mut config = ThemeConfig::default();
        config.primary = "#ff5722".to_string();
        let theme = Theme::from_config(&config);
        let css = theme.global_css();
        assert!(css.contains("a{color:#ff5722}"));
        assert!(css.contains("max-width:900px"));
    }
}
