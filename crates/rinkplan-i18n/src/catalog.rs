#![forbid(unsafe_code)]

//! String catalog with locale fallback and interpolation.

use std::collections::HashMap;

/// Key → template map for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    entries: HashMap<String, String>,
}

impl LocaleStrings {
    /// An empty string table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Look up a template.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Locale → [`LocaleStrings`] registry with a fallback chain.
///
/// Lookup order for locale `ll-RR`: exact locale, then its base subtag
/// `ll`, then the catalog's default locale. Missing keys resolve to
/// `None`; the caller decides the fallback text.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    locales: HashMap<String, LocaleStrings>,
    default_locale: String,
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StringCatalog {
    /// An empty catalog with `en` as the default locale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locales: HashMap::new(),
            default_locale: "en".to_string(),
        }
    }

    /// Override the default locale at the end of the fallback chain.
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Register (or replace) a locale's strings.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        self.locales.insert(locale.into(), strings);
    }

    /// The locale tried last in the fallback chain.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Look up a raw template, walking the fallback chain.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        for candidate in self.fallback_chain(locale) {
            if let Some(strings) = self.locales.get(candidate)
                && let Some(template) = strings.get(key)
            {
                return Some(template);
            }
        }
        None
    }

    /// Look up and interpolate a template.
    ///
    /// `args` maps placeholder names to replacement text. Interpolation
    /// is a single pass: replacement text containing `{tokens}` is never
    /// re-expanded, and placeholders with no matching arg stay in the
    /// output verbatim.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|template| interpolate(template, args))
    }

    /// Candidate locales in lookup order. The base subtag covers both
    /// `ll-RR` and `ll_RR` spellings.
    fn fallback_chain<'a>(&'a self, locale: &'a str) -> impl Iterator<Item = &'a str> {
        let base = locale
            .split_once(['-', '_'])
            .map(|(base, _)| base)
            .filter(|base| !base.is_empty() && *base != locale);
        [Some(locale), base, Some(self.default_locale.as_str())]
            .into_iter()
            .flatten()
    }
}

/// Single-pass `{name}` interpolation.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open..];
        match after_open.find('}') {
            Some(close) => {
                let token = &after_open[..=close];
                let name = &token[1..token.len() - 1];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(token),
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // Unterminated brace: emit the remainder literally.
                out.push_str(after_open);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        let mut en = LocaleStrings::new();
        en.insert("planner.title", "Ice Planner");
        en.insert("planner.greeting", "Go {team}!");

        let mut en_ca = LocaleStrings::new();
        en_ca.insert("planner.title", "Ice Planner, eh");

        let mut sv = LocaleStrings::new();
        sv.insert("planner.title", "Isplaneraren");

        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        catalog.add_locale("en-CA", en_ca);
        catalog.add_locale("sv", sv);
        catalog
    }

    #[test]
    fn exact_locale_wins() {
        assert_eq!(
            catalog().get("en-CA", "planner.title"),
            Some("Ice Planner, eh")
        );
    }

    #[test]
    fn region_falls_back_to_base_subtag() {
        assert_eq!(catalog().get("en-GB", "planner.title"), Some("Ice Planner"));
        assert_eq!(catalog().get("sv_SE", "planner.title"), Some("Isplaneraren"));
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        assert_eq!(catalog().get("fr", "planner.title"), Some("Ice Planner"));
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(catalog().get("en", "planner.unknown"), None);
        assert_eq!(catalog().format("en", "planner.unknown", &[]), None);
    }

    #[test]
    fn format_interpolates_args() {
        assert_eq!(
            catalog().format("en", "planner.greeting", &[("team", "Sharks")]),
            Some("Go Sharks!".to_string())
        );
    }

    #[test]
    fn missing_arg_preserves_token() {
        assert_eq!(
            catalog().format("en", "planner.greeting", &[]),
            Some("Go {team}!".to_string())
        );
    }

    #[test]
    fn interpolation_is_not_recursive() {
        assert_eq!(
            catalog().format("en", "planner.greeting", &[("team", "{team}")]),
            Some("Go {team}!".to_string())
        );
    }

    #[test]
    fn unterminated_brace_is_literal() {
        let mut en = LocaleStrings::new();
        en.insert("odd", "left {open and done");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        assert_eq!(
            catalog.format("en", "odd", &[("open", "x")]),
            Some("left {open and done".to_string())
        );
    }

    #[test]
    fn custom_default_locale() {
        let mut sv = LocaleStrings::new();
        sv.insert("planner.title", "Isplaneraren");
        let mut catalog = StringCatalog::new().with_default_locale("sv");
        catalog.add_locale("sv", sv);

        assert_eq!(catalog.get("de", "planner.title"), Some("Isplaneraren"));
    }

    #[test]
    fn locale_strings_len() {
        let mut strings = LocaleStrings::new();
        assert!(strings.is_empty());
        strings.insert("a", "1");
        strings.insert("a", "2");
        strings.insert("b", "3");
        assert_eq!(strings.len(), 2);
        assert_eq!(strings.get("a"), Some("2"));
    }
}
