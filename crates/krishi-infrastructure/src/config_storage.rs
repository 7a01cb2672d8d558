//! TOML-backed [`ConfigRepository`].

use crate::paths::KrishiPaths;
use krishi_core::config::{AppConfig, ConfigRepository};
use krishi_core::error::{KrishiError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes `config.toml`.
///
/// A missing or empty file loads as [`AppConfig::default`]. The file is only
/// created by [`save`](ConfigRepository::save).
#[derive(Debug, Clone)]
pub struct TomlConfigRepository {
    path: PathBuf,
}

impl TomlConfigRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository for `~/.config/krishi/config.toml`.
    pub fn default_location() -> Result<Self> {
        Ok(Self::with_path(KrishiPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            KrishiError::io(format!(
                "Failed to read config file at {:?}: {}",
                self.path, e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), language = %config.language, "config loaded");
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                KrishiError::io(format!(
                    "Failed to create config directory at {:?}: {}",
                    parent, e
                ))
            })?;
        }

        let toml_string = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml_string).map_err(|e| {
            KrishiError::io(format!(
                "Failed to write config file at {:?}: {}",
                self.path, e
            ))
        })?;

        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_loads_defaults() {
        let file = NamedTempFile::new().unwrap();
        let repository = TomlConfigRepository::with_path(file.path());
        assert_eq!(repository.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_a_serialization_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "language = [").unwrap();

        let err = TomlConfigRepository::with_path(file.path()).load().unwrap_err();
        assert!(err.is_serialization());
    }
}
