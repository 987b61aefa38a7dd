//! Conversation session types.
//!
//! This module contains types for representing messages exchanged with the
//! generation backend, including roles and the session lifecycle.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

impl MessageRole {
    /// Lowercase role tag used when displaying transcripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single message in a conversation history.
///
/// Each message has a role (user or assistant), content, and a timestamp
/// indicating when it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ConversationMessage {
    /// Creates a message stamped with the current time.
    pub fn now(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Lifecycle of one composer session.
///
/// The protocol is strictly linear: the instruction turn must be issued
/// first, the request turn second, and the session terminates there. No
/// turn is retried, edited, or rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Session opened, nothing sent yet.
    Created,
    /// The fixed instruction turn has been issued.
    InstructionSent,
    /// The request turn has been issued; the session is complete.
    ContextSent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tags() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_message_now_stamps_timestamp() {
        let message = ConversationMessage::now(MessageRole::User, "hello");
        assert_eq!(message.content, "hello");
        assert!(!message.timestamp.is_empty());
    }
}
