//! Chat transcript between a learner and the coach.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Default bound on a conversation's length.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Coach,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn coach(text: impl Into<String>) -> Self {
        Self::new(Sender::Coach, text)
    }
}

/// Ordered chat history holding at most `max_len` messages.
///
/// Pushing past the bound drops the oldest message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: VecDeque<ChatMessage>,
    max_len: usize,
}

impl Conversation {
    pub fn new(max_len: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_len,
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        if self.max_len == 0 {
            return;
        }
        while self.messages.len() >= self.max_len {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Messages oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.back()
    }

    /// Maximum number of messages kept.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut conversation = Conversation::default();
        conversation.push(ChatMessage::user("hello"));
        conversation.push(ChatMessage::coach("hi there"));

        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(conversation.last().unwrap().text, "hi there");
    }

    #[test]
    fn test_bound_drops_oldest() {
        let mut conversation = Conversation::new(3);
        for i in 0..5 {
            conversation.push(ChatMessage::user(format!("message {i}")));
        }
        let texts: Vec<&str> = conversation.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_zero_bound_keeps_nothing() {
        let mut conversation = Conversation::new(0);
        conversation.push(ChatMessage::user("ignored"));
        assert!(conversation.is_empty());
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(ChatMessage::user("a").id, ChatMessage::user("a").id);
    }
}
