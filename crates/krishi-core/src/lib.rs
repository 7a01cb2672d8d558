//! Domain layer of the Krishi farming assistant.
//!
//! - [`farm`]: the farming context captured by the form
//! - [`wizard`]: the introduction / form / conversation flow
//! - [`advisor`]: keyword-driven reply selection
//! - [`conversation`]: chat messages and history
//! - [`i18n`]: translation tables and lookup
//! - [`config`]: application settings

pub mod advisor;
pub mod config;
pub mod conversation;
pub mod error;
pub mod farm;
pub mod i18n;
pub mod quick_question;
pub mod wizard;

// Re-export common error type
pub use error::KrishiError;
