//! Languages offered by the language selector.

/// Code of the language every lookup falls back to.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Short code (ISO 639-1 where one exists)
    pub code: &'static str,
    /// English name
    pub name: &'static str,
    /// Name in the language itself
    pub native: &'static str,
}

impl Language {
    pub const fn new(code: &'static str, name: &'static str, native: &'static str) -> Self {
        Self { code, name, native }
    }
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::new("en", "English", "English"),
    Language::new("hi", "Hindi", "हिंदी"),
    Language::new("bn", "Bengali", "বাংলা"),
    Language::new("te", "Telugu", "తెలుగు"),
    Language::new("mr", "Marathi", "मराठी"),
    Language::new("ta", "Tamil", "தமிழ்"),
    Language::new("gu", "Gujarati", "ગુજરાતી"),
    Language::new("ur", "Urdu", "اردو"),
    Language::new("kn", "Kannada", "ಕನ್ನಡ"),
    Language::new("or", "Odia", "ଓଡ଼ିଆ"),
    Language::new("pa", "Punjabi", "ਪੰਜਾਬੀ"),
    Language::new("ml", "Malayalam", "മലയാളം"),
    Language::new("as", "Assamese", "অসমীয়া"),
    Language::new("ne", "Nepali", "नेपाली"),
    Language::new("sa", "Sanskrit", "संस्कृतम्"),
];

/// Find a selectable language by code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_language(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_languages_with_unique_codes() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 15);
        let mut codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 15);
    }

    #[test]
    fn test_find_language() {
        assert_eq!(find_language("ta").unwrap().name, "Tamil");
        assert!(find_language("fr").is_none());
        assert!(is_supported(DEFAULT_LANGUAGE));
    }
}
