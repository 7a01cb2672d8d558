//! Error types for the Krishi assistant.

use thiserror::Error;

/// A shared error type for the entire Krishi workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KrishiError {
    /// Translations were looked up before a catalog was installed.
    ///
    /// This is a wiring error, not a runtime condition. Callers propagate it
    /// instead of retrying.
    #[error("Translations used before a catalog was initialized")]
    TranslationsNotInitialized,

    /// A form value that is not part of the field's closed option list
    #[error("Invalid option for {field}: '{value}'")]
    InvalidOption { field: &'static str, value: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "template", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KrishiError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidOption error
    pub fn invalid_option(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOption {
            field,
            value: value.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error comes from using translations before initialization
    pub fn is_translations_not_initialized(&self) -> bool {
        matches!(self, Self::TranslationsNotInitialized)
    }

    /// Check if this is an InvalidOption error
    pub fn is_invalid_option(&self) -> bool {
        matches!(self, Self::InvalidOption { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for KrishiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for KrishiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for KrishiError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for KrishiError {
    fn from(err: minijinja::Error) -> Self {
        Self::Serialization {
            format: "template".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, KrishiError>`.
pub type Result<T> = std::result::Result<T, KrishiError>;
