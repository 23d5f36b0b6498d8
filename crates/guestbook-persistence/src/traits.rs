use async_trait::async_trait;
use guestbook_core::GuestbookResult;
use guestbook_domain::{Message, MessageId, SessionId, SessionState};

/// Abstract message storage.
/// Implementations handle different backends (file, in-memory, database).
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Total number of stored messages.
    async fn count(&self) -> GuestbookResult<u64>;

    /// A window of messages ordered by date descending.
    ///
    /// `skip` is always non-negative by the time it gets here; the page
    /// calculator owns the clamping.
    async fn find_range(&self, skip: u64, limit: u64) -> GuestbookResult<Vec<Message>>;

    /// Persist a new message, returning its storage id.
    async fn insert(&self, message: Message) -> GuestbookResult<MessageId>;
}

/// Abstract per-conversation session storage.
///
/// `get` followed by `put` is a read-modify-write cycle; two in-flight
/// events for the same session resolve as last-write-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The session's state, or the default for an unknown session.
    async fn get(&self, session: &SessionId) -> GuestbookResult<SessionState>;

    /// Replace the session's state.
    async fn put(&self, session: &SessionId, state: SessionState) -> GuestbookResult<()>;

    /// Drop the session's paging state entirely.
    async fn clear(&self, session: &SessionId) -> GuestbookResult<()>;
}
