//! Conversation domain module.
//!
//! - `message`: chat message types (`MessageRole`, `ChatMessage`)
//! - `history`: the append-only `Conversation`

mod history;
mod message;

pub use history::Conversation;
pub use message::{ChatMessage, MessageRole};
