//! Component style collection and `sx` style overrides

use indexmap::IndexMap;

use super::Theme;
use crate::helpers::html_escape;

/// Styles registered by components during one render, keyed by class name
#[derive(Debug, Default)]
pub struct StyleCache {
    rules: IndexMap<&'static str, String>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rules for a class. The first registration wins.
    pub fn insert<F: FnOnce() -> String>(&mut self, class: &'static str, css: F) {
        self.rules.entry(class).or_insert_with(css);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.rules.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Drain the collected rules into `<style>` tags, leaving the cache empty
    pub fn flush(&mut self) -> String {
        let tags = self
            .rules
            .iter()
            .map(|(class, css)| format!(r#"<style data-hb="{}">{}</style>"#, class, css))
            .collect::<Vec<_>>()
            .join("\n");
        self.reset();
        tags
    }

    pub fn reset(&mut self) {
        self.rules.clear();
    }
}

/// Ordered style overrides passed through to a component
///
/// Keys use camelCase CSS property names. The spacing shorthands
/// (`m`, `mt`, `mb`, `ml`, `mr`, `mx`, `my` and the `p` equivalents) take
/// numeric theme spacing units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sx {
    entries: IndexMap<String, String>,
}

impl Sx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Later entries override earlier ones with the same key
    pub fn merge(mut self, other: &Sx) -> Self {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    /// Render as inline CSS declarations
    pub fn to_css(&self, theme: &Theme) -> String {
        let mut decls = Vec::new();
        for (key, value) in &self.entries {
            for property in expand_shorthand(key) {
                let value = match value.parse::<f64>() {
                    Ok(units) if is_spacing_key(key) => theme.spacing(units),
                    _ => value.clone(),
                };
                decls.push(format!("{}:{}", property, value));
            }
        }
        decls.join(";")
    }

    /// Render as a ` style="..."` attribute, or nothing when empty
    pub fn style_attr(&self, theme: &Theme) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(r#" style="{}""#, html_escape(&self.to_css(theme)))
        }
    }
}

fn is_spacing_key(key: &str) -> bool {
    matches!(
        key,
        "m" | "mt" | "mb" | "ml" | "mr" | "mx" | "my" | "p" | "pt" | "pb" | "pl" | "pr" | "px" | "py"
    )
}

fn expand_shorthand(key: &str) -> Vec<String> {
    let (base, sides): (&str, &[&str]) = match key {
        "m" => ("margin", &[""]),
        "mt" => ("margin", &["-top"]),
        "mb" => ("margin", &["-bottom"]),
        "ml" => ("margin", &["-left"]),
        "mr" => ("margin", &["-right"]),
        "mx" => ("margin", &["-left", "-right"]),
        "my" => ("margin", &["-top", "-bottom"]),
        "p" => ("padding", &[""]),
        "pt" => ("padding", &["-top"]),
        "pb" => ("padding", &["-bottom"]),
        "pl" => ("padding", &["-left"]),
        "pr" => ("padding", &["-right"]),
        "px" => ("padding", &["-left", "-right"]),
        "py" => ("padding", &["-top", "-bottom"]),
        other => return vec![kebab_case(other)],
    };
    sides.iter().map(|side| format!("{}{}", base, side)).collect()
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_cache_dedupes() {
        let mut cache = StyleCache::new();
        cache.insert("hb-chip", || ".hb-chip{a:b}".to_string());
        cache.insert("hb-chip", || ".hb-chip{c:d}".to_string());
        assert_eq!(cache.len(), 1);

        let tags = cache.flush();
        assert_eq!(tags, r#"<style data-hb="hb-chip">.hb-chip{a:b}</style>"#);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_sx_spacing_shorthand() {
        let theme = Theme::default();
        let sx = Sx::new().set("mb", "5").set("mx", "1");
        assert_eq!(
            sx.to_css(&theme),
            "margin-bottom:40px;margin-left:8px;margin-right:8px"
        );
    }

    #[test]
    fn test_sx_camel_case_and_merge() {
        let theme = Theme::default();
        let base = Sx::new().set("textDecoration", "none").set("pb", "0");
        let sx = base.merge(&Sx::new().set("borderRadius", "0"));
        assert_eq!(
            sx.to_css(&theme),
            "text-decoration:none;padding-bottom:0px;border-radius:0"
        );
        assert_eq!(Sx::new().style_attr(&theme), "");
    }
}
