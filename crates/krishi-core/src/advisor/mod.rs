//! Keyword-driven reply selection.
//!
//! The advisor answers chat input with canned templates. An ordered list of
//! [`TopicRule`]s maps trigger substrings to templates; the first matching rule
//! wins, so the list order is the precedence order.

mod rule;
mod selector;
mod templates;

pub use rule::{Reply, Topic, TopicRule};
pub use selector::ResponseSelector;
pub use templates::{BUILTIN_TEMPLATES, builtin_rules};
