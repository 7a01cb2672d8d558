//! Storage and process-level plumbing for the Krishi assistant.

pub mod config_storage;
pub mod logging;
pub mod paths;

pub use config_storage::TomlConfigRepository;
pub use paths::{KrishiPaths, PathError};
