//! Translations with a two-level fallback.
//!
//! Lookups resolve the current language first, then the default language,
//! and finally return the key itself. Nothing is global: a
//! [`TranslationProvider`] is created, initialized with a
//! [`TranslationCatalog`], and passed to whatever needs it.

mod catalog;
mod language;
mod provider;

pub use catalog::TranslationCatalog;
pub use language::{DEFAULT_LANGUAGE, Language, SUPPORTED_LANGUAGES, find_language, is_supported};
pub use provider::{TranslationProvider, Translator};
