//! Chat data types

use std::fmt;

/// Identifier of a chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(pub u32);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// The local user
    Me,
    /// Canned assistant output
    Ai,
    /// Anyone else, by display name
    Person(String),
}

impl Sender {
    /// Parse a sender label. "Me" and "AI" are reserved; everything else is a person.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Me" => Self::Me,
            "AI" => Self::Ai,
            other => Self::Person(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Me => "Me",
            Self::Ai => "AI",
            Self::Person(name) => name.as_str(),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the chat list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSummary {
    pub id: ChatId,
    pub name: String,
    /// Last-message preview. Not updated after creation.
    pub preview: String,
    /// Last-activity time as displayed, e.g. "09:22"
    pub last_active: String,
}

/// A message inside a chat thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub body: String,
    pub sent_at: String,
}

impl Message {
    pub fn new(sender: Sender, body: impl Into<String>, sent_at: impl Into<String>) -> Self {
        Self {
            sender,
            body: body.into(),
            sent_at: sent_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_labels_round_trip_reserved_names() {
        assert_eq!(Sender::from_label("Me"), Sender::Me);
        assert_eq!(Sender::from_label("AI"), Sender::Ai);
        assert_eq!(
            Sender::from_label("Alice"),
            Sender::Person("Alice".to_string())
        );
        assert_eq!(Sender::Ai.label(), "AI");
        assert_eq!(Sender::Person("Bob".into()).to_string(), "Bob");
    }

    #[test]
    fn test_chat_id_display() {
        assert_eq!(ChatId(4).to_string(), "4");
    }
}
