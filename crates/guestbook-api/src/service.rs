use std::sync::Arc;

use guestbook_core::{GuestbookResult, PageWindow};
use guestbook_domain::{Message, MessageId, MessagePage};
use guestbook_persistence::MessageStore;

/// Message listing and creation over an abstract store.
///
/// `list` is the server half of the pagination engine: count the collection,
/// compute the clamped window, fetch exactly that window.
pub struct MessageService {
    store: Arc<dyn MessageStore>,
    page_size: u64,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>, page_size: u64) -> Self {
        Self { store, page_size }
    }

    /// One page of messages, newest first, annotated with the clamped
    /// current page and the last page.
    pub async fn list(&self, page: i64) -> GuestbookResult<MessagePage> {
        let total = self.store.count().await?;
        let window = PageWindow::compute(page, total, self.page_size);
        let messages = self.store.find_range(window.skip, window.limit).await?;
        tracing::debug!(
            "Serving page {}/{} ({} of {} messages)",
            window.current_page,
            window.last_page,
            messages.len(),
            total
        );
        Ok(MessagePage {
            current_page: window.current_page,
            last_page: window.last_page,
            limit: window.limit,
            messages,
        })
    }

    /// Validate and persist a submission.
    pub async fn create(&self, message: Message) -> GuestbookResult<MessageId> {
        message.validate()?;
        let id = self.store.insert(message).await?;
        tracing::info!("Stored message {id}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use guestbook_core::GuestbookError;
    use guestbook_persistence::MemoryMessageStore;

    #[tokio::test]
    async fn empty_store_serves_canonical_first_page() {
        let service = MessageService::new(Arc::new(MemoryMessageStore::new()), 10);
        let page = service.list(1).await.unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.limit, 10);
        assert!(page.messages.is_empty());
    }

    #[tokio::test]
    async fn list_clamps_past_the_end() {
        let store = Arc::new(MemoryMessageStore::new());
        for i in 0..25u32 {
            let date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, i).unwrap();
            store
                .insert(Message::new("Ada", format!("m{i}"), date))
                .await
                .unwrap();
        }
        let service = MessageService::new(store, 10);

        let page = service.list(5).await.unwrap();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.last_page, 3);
        // the clamped window is the last ten rows
        assert_eq!(page.messages.len(), 10);
        assert_eq!(page.messages[0].message, "m9");
    }

    #[tokio::test]
    async fn create_then_list_shows_the_message_first() {
        let store = Arc::new(MemoryMessageStore::new());
        let service = MessageService::new(store, 10);

        let earlier = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        service
            .create(Message::new("Ada", "older", earlier))
            .await
            .unwrap();
        service
            .create(Message::new("Grace", "newer", later))
            .await
            .unwrap();

        let page = service.list(1).await.unwrap();
        assert_eq!(page.messages[0].message, "newer");
        assert_eq!(page.messages[1].message, "older");
    }

    #[tokio::test]
    async fn create_rejects_blank_submissions() {
        let service = MessageService::new(Arc::new(MemoryMessageStore::new()), 10);
        let result = service.create(Message::new("", "text", Utc::now())).await;
        assert!(matches!(result, Err(GuestbookError::Validation(_))));
    }
}
