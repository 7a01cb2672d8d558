//! Path management for krishi configuration and logs.
//!
//! ```text
//! ~/.config/krishi/            # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── krishi.log.YYYY-MM-DD
//! ```

use krishi_core::KrishiError;
use std::path::PathBuf;

const APP_DIR: &str = "krishi";

/// Errors that can occur during path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for KrishiError {
    fn from(err: PathError) -> Self {
        KrishiError::config(err.to_string())
    }
}

pub struct KrishiPaths;

impl KrishiPaths {
    /// Returns the krishi configuration directory (e.g. `~/.config/krishi/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
