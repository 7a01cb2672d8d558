//! Translation tables.

use super::language::DEFAULT_LANGUAGE;
use crate::error::Result;
use std::collections::HashMap;

/// Locale files shipped with the crate, as `(code, toml source)`.
const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.toml")),
    ("hi", include_str!("../../locales/hi.toml")),
    ("bn", include_str!("../../locales/bn.toml")),
    ("te", include_str!("../../locales/te.toml")),
    ("ta", include_str!("../../locales/ta.toml")),
];

type Table = HashMap<String, String>;

/// Per-language key/value tables with a default-language fallback.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    default_language: String,
    tables: HashMap<String, Table>,
}

impl TranslationCatalog {
    /// An empty catalog; every lookup returns the key itself.
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            tables: HashMap::new(),
        }
    }

    /// Loads the locale files embedded in the crate.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new(DEFAULT_LANGUAGE);
        for (code, source) in BUILTIN_LOCALES {
            catalog.add_toml(code, source)?;
        }
        tracing::debug!(languages = catalog.tables.len(), "loaded builtin translations");
        Ok(catalog)
    }

    /// Parses a flat `key = "value"` TOML table and merges it into `code`.
    pub fn add_toml(&mut self, code: &str, source: &str) -> Result<()> {
        let table: Table = toml::from_str(source)?;
        self.tables.entry(code.to_string()).or_default().extend(table);
        Ok(())
    }

    pub fn insert(&mut self, code: &str, key: &str, value: &str) {
        self.tables
            .entry(code.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    /// Raw lookup without fallback. Empty values count as missing.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.tables
            .get(code)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves `key` for `code`: that language, then the default language,
    /// then the key itself.
    pub fn translate(&self, code: &str, key: &str) -> String {
        self.lookup(code, key)
            .or_else(|| self.lookup(&self.default_language, key))
            .unwrap_or(key)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = TranslationCatalog::builtin().unwrap();
        assert!(catalog.has_language("en"));
        assert!(catalog.has_language("ta"));
        assert_eq!(catalog.translate("en", "selectLanguage"), "Select Language");
        assert_eq!(catalog.translate("hi", "getStarted"), "शुरू करें");
    }

    #[test]
    fn test_partial_language_falls_back_per_key() {
        let catalog = TranslationCatalog::builtin().unwrap();
        assert_eq!(catalog.translate("te", "getStarted"), "ప్రారంభించండి");
        // Telugu has no state names.
        assert_eq!(catalog.translate("te", "tamilNadu"), "Tamil Nadu");
    }

    #[test]
    fn test_unknown_language_and_key() {
        let catalog = TranslationCatalog::builtin().unwrap();
        assert_eq!(catalog.translate("xx", "selectLanguage"), "Select Language");
        assert_eq!(catalog.translate("hi", "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut catalog = TranslationCatalog::new("en");
        catalog.insert("en", "send", "Send");
        catalog.insert("mr", "send", "");
        assert_eq!(catalog.translate("mr", "send"), "Send");
    }

    #[test]
    fn test_every_builtin_key_exists_in_default_language() {
        let catalog = TranslationCatalog::builtin().unwrap();
        for (code, source) in BUILTIN_LOCALES {
            let table: Table = toml::from_str(source).unwrap();
            for key in table.keys() {
                assert!(
                    catalog.lookup(DEFAULT_LANGUAGE, key).is_some(),
                    "{code} defines '{key}' which English lacks"
                );
            }
        }
    }
}
