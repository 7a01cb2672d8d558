use super::catalog::TranslationCatalog;
use super::language::{DEFAULT_LANGUAGE, is_supported};
use crate::error::{KrishiError, Result};
use std::sync::Arc;

/// Explicit translation context handed to whatever renders text.
///
/// A provider starts without a catalog. Asking it for a [`Translator`] before
/// [`initialize`](Self::initialize) fails with
/// [`KrishiError::TranslationsNotInitialized`].
#[derive(Debug, Clone)]
pub struct TranslationProvider {
    catalog: Option<Arc<TranslationCatalog>>,
    language: String,
}

impl Default for TranslationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationProvider {
    /// An uninitialized provider on the default language.
    pub fn new() -> Self {
        Self {
            catalog: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_catalog(catalog: TranslationCatalog) -> Self {
        let mut provider = Self::new();
        provider.initialize(catalog);
        provider
    }

    /// Installs the catalog, replacing any previous one.
    pub fn initialize(&mut self, catalog: TranslationCatalog) {
        self.catalog = Some(Arc::new(catalog));
    }

    pub fn is_initialized(&self) -> bool {
        self.catalog.is_some()
    }

    /// Switches the current language.
    ///
    /// Codes outside the selector list are kept; lookups then fall back to the
    /// default language.
    pub fn set_language(&mut self, code: &str) {
        if !is_supported(code) {
            tracing::warn!(code, "unsupported language selected, falling back to defaults");
        }
        self.language = code.to_string();
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// A translator bound to the current language.
    pub fn translator(&self) -> Result<Translator> {
        let catalog = self
            .catalog
            .clone()
            .ok_or(KrishiError::TranslationsNotInitialized)?;
        Ok(Translator {
            catalog,
            language: self.language.clone(),
        })
    }

    /// Shorthand for `translator()?.t(key)`.
    pub fn t(&self, key: &str) -> Result<String> {
        Ok(self.translator()?.t(key))
    }
}

/// Resolves translation keys for one language.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<TranslationCatalog>,
    language: String,
}

impl Translator {
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Current language, then default language, then the key itself.
    pub fn t(&self, key: &str) -> String {
        self.catalog.translate(&self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> TranslationProvider {
        TranslationProvider::with_catalog(TranslationCatalog::builtin().unwrap())
    }

    #[test]
    fn test_uninitialized_provider_fails_loudly() {
        let provider = TranslationProvider::new();
        let err = provider.translator().unwrap_err();
        assert!(err.is_translations_not_initialized());
        assert!(provider.t("selectLanguage").is_err());
    }

    #[test]
    fn test_unsupported_language_uses_default_strings() {
        let mut provider = provider();
        provider.set_language("zz");

        assert_eq!(provider.language(), "zz");
        assert_eq!(provider.t("selectLanguage").unwrap(), "Select Language");
    }

    #[test]
    fn test_supported_language_without_table_uses_default_strings() {
        let mut provider = provider();
        provider.set_language("mr");
        assert_eq!(provider.t("getStarted").unwrap(), "Get Started");
    }

    #[test]
    fn test_translator_is_bound_to_language_at_creation() {
        let mut provider = provider();
        provider.set_language("bn");
        let bengali = provider.translator().unwrap();
        provider.set_language("en");

        assert_eq!(bengali.language(), "bn");
        assert_eq!(bengali.t("send"), "পাঠান");
        assert_eq!(provider.t("send").unwrap(), "Send");
    }
}
