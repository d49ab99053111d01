//! Chat store: ordered summaries plus one message thread per chat.

use std::collections::HashMap;

use chrono::NaiveTime;
use thiserror::Error;

use super::model::{ChatId, ChatSummary, Message};
use super::seed;

/// Time format used for newly created chats.
const CREATED_AT_FORMAT: &str = "%H:%M";

/// Errors from store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("chat name is empty")]
    EmptyName,

    #[error("unknown chat: {0}")]
    UnknownChat(ChatId),
}

/// Owns every chat and its messages.
///
/// Every id in `chats` has an entry in `threads`, possibly empty.
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    chats: Vec<ChatSummary>,
    threads: HashMap<ChatId, Vec<Message>>,
}

impl ChatStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store as it looks on startup.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (summary, thread) in seed::initial_chats() {
            store.push(summary, thread);
        }
        store
    }

    pub fn chats(&self) -> &[ChatSummary] {
        &self.chats
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn chat(&self, id: ChatId) -> Option<&ChatSummary> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// Look up a chat, failing with [`StoreError::UnknownChat`].
    pub fn get(&self, id: ChatId) -> Result<&ChatSummary, StoreError> {
        self.chat(id).ok_or(StoreError::UnknownChat(id))
    }

    /// Raw thread lookup. `None` means no entry exists for `id`.
    pub fn thread(&self, id: ChatId) -> Option<&[Message]> {
        self.threads.get(&id).map(Vec::as_slice)
    }

    /// Messages of a chat in order. A missing thread reads as empty.
    pub fn messages(&self, id: ChatId) -> &[Message] {
        self.thread(id).unwrap_or_default()
    }

    /// Create a chat named after the trimmed `name`, stamped with `at`.
    ///
    /// Ids are assigned as `len() + 1`. That is only unique because chats
    /// are never removed.
    pub fn create_chat(&mut self, name: &str, at: NaiveTime) -> Result<ChatId, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let id = self.next_id();
        debug_assert!(self.chat(id).is_none(), "chat id {id} reused");

        self.push(
            ChatSummary {
                id,
                name: name.to_string(),
                preview: String::new(),
                last_active: at.format(CREATED_AT_FORMAT).to_string(),
            },
            Vec::new(),
        );
        tracing::info!(chat_id = %id, name, "created chat");
        Ok(id)
    }

    fn next_id(&self) -> ChatId {
        ChatId(self.chats.len() as u32 + 1)
    }

    fn push(&mut self, summary: ChatSummary, thread: Vec<Message>) {
        self.threads.insert(summary.id, thread);
        self.chats.push(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 5, 0).unwrap()
    }

    #[test]
    fn test_seeded_store_contents() {
        let store = ChatStore::seeded();
        let names: Vec<_> = store.chats().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Design Team", "Frontend Squad", "Product Managers"]);

        let design = store.messages(ChatId(1));
        assert_eq!(design.len(), 2);
        assert_eq!(design[0].sender, Sender::Person("Alice".into()));
        assert_eq!(design[1].sender, Sender::Me);
        assert_eq!(design[1].sent_at, "11:47 AM");
        assert_eq!(store.messages(ChatId(2)).len(), 1);
        assert_eq!(store.messages(ChatId(3)).len(), 1);
    }

    #[test]
    fn test_every_chat_has_a_thread() {
        let mut store = ChatStore::seeded();
        store.create_chat("Ops", noon()).unwrap();
        store.create_chat("Legal", noon()).unwrap();

        for chat in store.chats() {
            assert!(store.thread(chat.id).is_some(), "missing thread for {}", chat.id);
        }
    }

    #[test]
    fn test_create_chat_assigns_next_id() {
        let mut store = ChatStore::seeded();
        let id = store.create_chat("  Design Review ", noon()).unwrap();

        assert_eq!(id, ChatId(4));
        let chat = store.chat(id).unwrap();
        assert_eq!(chat.name, "Design Review");
        assert_eq!(chat.preview, "");
        assert_eq!(chat.last_active, "12:05");
        assert_eq!(store.thread(id), Some(&[][..]));
        assert_eq!(store.chats().last(), Some(chat));
    }

    #[test]
    fn test_create_chat_rejects_blank_names() {
        let mut store = ChatStore::seeded();
        assert_eq!(store.create_chat("", noon()), Err(StoreError::EmptyName));
        assert_eq!(store.create_chat(" \t\n ", noon()), Err(StoreError::EmptyName));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_missing_thread_reads_empty() {
        let store = ChatStore::new();
        assert!(store.is_empty());
        assert!(store.thread(ChatId(9)).is_none());
        assert!(store.messages(ChatId(9)).is_empty());
        assert_eq!(store.get(ChatId(9)), Err(StoreError::UnknownChat(ChatId(9))));
    }
}
