use super::message::{ChatMessage, MessageRole};

/// Append-only, ordered message history of one conversation.
///
/// Order equals arrival order. There is no API to remove or
/// reorder messages.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn count_by_role(&self, role: MessageRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_arrival_order() {
        let mut conversation = Conversation::new();
        conversation.push(ChatMessage::user("first"));
        conversation.push(ChatMessage::assistant("second"));
        conversation.push(ChatMessage::user("third"));

        let texts: Vec<&str> = conversation.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(conversation.count_by_role(MessageRole::User), 2);
        assert_eq!(conversation.last().unwrap().text, "third");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("same");
        let b = ChatMessage::user("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let message = ChatMessage::assistant("hi");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["text"], "hi");
    }
}
