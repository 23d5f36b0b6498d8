use guestbook_core::GuestbookResult;
use guestbook_domain::SessionId;
use guestbook_persistence::SessionStore;

/// Per-session cache of rendered pages, layered over a [`SessionStore`].
///
/// Navigating to a cached page is a real navigation: a hit advances the
/// session's `current_page` even though nothing was fetched. Cache
/// operations never fail on their own; session-store errors pass through.
pub struct PageCache<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> PageCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The page this session last looked at (1 for a fresh session).
    pub async fn current_page(&self, session: &SessionId) -> GuestbookResult<u64> {
        Ok(self.store.get(session).await?.current_page)
    }

    /// Cached rendering of `page`, advancing `current_page` on a hit.
    pub async fn get(&self, session: &SessionId, page: u64) -> GuestbookResult<Option<String>> {
        let mut state = self.store.get(session).await?;
        let Some(rendered) = state.cached_page(page).map(str::to_string) else {
            return Ok(None);
        };
        state.current_page = page;
        self.store.put(session, state).await?;
        Ok(Some(rendered))
    }

    /// Store a freshly rendered page and make it current.
    pub async fn put(
        &self,
        session: &SessionId,
        page: u64,
        rendered: String,
        last_page: u64,
    ) -> GuestbookResult<()> {
        let mut state = self.store.get(session).await?;
        state.pages.insert(page, rendered);
        state.current_page = page;
        state.last_page = Some(last_page);
        self.store.put(session, state).await
    }

    /// Drop everything cached for the session. Called after every
    /// submission so stale pages cannot survive a write.
    pub async fn invalidate(&self, session: &SessionId) -> GuestbookResult<()> {
        self.store.clear(session).await
    }
}
