//! Conversation flow of the Krishi farming assistant.
//!
//! - [`chat_session`]: a running conversation with delayed canned replies
//! - [`assistant`]: the wizard-driven controller front-ends talk to

pub mod assistant;
pub mod chat_session;

pub use assistant::FarmAssistant;
pub use chat_session::{ChatEvent, ChatSession, ReplyTiming};
