//! In-memory, session-lifetime logs: past image generations (newest first)
//! and the chat transcript (oldest first). Neither is persisted; both grow
//! unbounded for the life of the session, which is a known resource risk
//! left uncapped so observable behavior stays stable.

use std::collections::VecDeque;

use crate::models::{ChatMessage, GenerationResult};

/// Ordered log of completed generations, newest at the head. Entries are
/// immutable once inserted and owned exclusively by the store.
#[derive(Debug, Default)]
pub struct GenerationHistoryStore {
    entries: VecDeque<GenerationResult>,
}

impl GenerationHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1). Never reorders or dedupes existing entries.
    pub fn insert_at_head(&mut self, result: GenerationResult) {
        self.entries.push_front(result);
    }

    pub fn latest(&self) -> Option<&GenerationResult> {
        self.entries.front()
    }

    /// Read-only view, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GenerationResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Append-only chat transcript for the current session, oldest first.
#[derive(Debug, Default)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
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

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
