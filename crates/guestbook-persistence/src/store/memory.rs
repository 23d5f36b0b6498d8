//! In-memory backends, used by tests and as the bot's default session store.

use async_trait::async_trait;
use guestbook_core::GuestbookResult;
use guestbook_domain::{Message, MessageId, SessionId, SessionState};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

use crate::traits::{MessageStore, SessionStore};

/// Message log held in memory. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: Mutex<Vec<(MessageId, Message)>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn count(&self) -> GuestbookResult<u64> {
        Ok(self.messages.lock().len() as u64)
    }

    async fn find_range(&self, skip: u64, limit: u64) -> GuestbookResult<Vec<Message>> {
        let mut messages: Vec<Message> = self
            .messages
            .lock()
            .iter()
            .map(|(_, message)| message.clone())
            .collect();
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(messages
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn insert(&self, message: Message) -> GuestbookResult<MessageId> {
        let id = Uuid::new_v4();
        self.messages.lock().push((id, message));
        Ok(id)
    }
}

/// Session state held in memory, keyed by conversation.
///
/// Stands in for whatever keyed storage the chat transport provides; one
/// bot process, one map.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<SessionId, SessionState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, session: &SessionId) -> GuestbookResult<SessionState> {
        Ok(self
            .sessions
            .lock()
            .get(session)
            .cloned()
            .unwrap_or_default())
    }

    async fn put(&self, session: &SessionId, state: SessionState) -> GuestbookResult<()> {
        self.sessions.lock().insert(session.clone(), state);
        Ok(())
    }

    async fn clear(&self, session: &SessionId) -> GuestbookResult<()> {
        self.sessions.lock().remove(session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn message_store_orders_newest_first() {
        let store = MemoryMessageStore::new();
        for hour in [9, 11, 10] {
            let date = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
            store
                .insert(Message::new("Ada", format!("h{hour}"), date))
                .await
                .unwrap();
        }

        let messages = store.find_range(0, 10).await.unwrap();
        let texts: Vec<_> = messages.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, ["h11", "h10", "h9"]);
    }

    #[tokio::test]
    async fn unknown_session_reads_as_default() {
        let store = MemorySessionStore::new();
        let state = store.get(&"chat-1".to_string()).await.unwrap();
        assert_eq!(state, SessionState::default());
    }

    #[tokio::test]
    async fn put_then_get_then_clear() {
        let store = MemorySessionStore::new();
        let session = "chat-1".to_string();

        let mut state = SessionState::default();
        state.current_page = 3;
        state.pages.insert(3, "page three".to_string());
        store.put(&session, state.clone()).await.unwrap();

        assert_eq!(store.get(&session).await.unwrap(), state);

        store.clear(&session).await.unwrap();
        assert_eq!(store.get(&session).await.unwrap(), SessionState::default());
    }
}
