use guestbook_core::{next_page, GuestbookResult, NavigationIntent};
use guestbook_domain::{Message, SessionId};
use guestbook_persistence::SessionStore;

use crate::api_client::ApiClient;
use crate::cache::PageCache;
use crate::format::format_page;

/// Client-side orchestration: navigation intent in, rendered page out.
///
/// The flow for one navigation event: read the session's current page, step
/// it by the intent, try the cache, and only on a miss cross the network.
/// Whatever page the server actually served (it clamps requests past the
/// end) is what gets cached and becomes current.
pub struct Browser<C: ApiClient, S: SessionStore> {
    api: C,
    cache: PageCache<S>,
}

impl<C: ApiClient, S: SessionStore> Browser<C, S> {
    pub fn new(api: C, sessions: S) -> Self {
        Self {
            api,
            cache: PageCache::new(sessions),
        }
    }

    /// Navigate and return the rendered page for this session.
    pub async fn browse(
        &self,
        session: &SessionId,
        intent: NavigationIntent,
    ) -> GuestbookResult<String> {
        let previous = self.cache.current_page(session).await?;
        let target = next_page(previous, intent);

        if let Some(rendered) = self.cache.get(session, target).await? {
            tracing::debug!("Session {session}: page {target} served from cache");
            return Ok(rendered);
        }

        let page = self.api.fetch_page(target).await?;
        let rendered = format_page(&page);
        self.cache
            .put(session, page.current_page, rendered.clone(), page.last_page)
            .await?;
        tracing::debug!(
            "Session {session}: fetched page {} (requested {target})",
            page.current_page
        );
        Ok(rendered)
    }

    /// Submit a message. The cache is invalidated before the create call,
    /// so even a failed submission leaves no stale pages behind.
    pub async fn submit(&self, session: &SessionId, message: Message) -> GuestbookResult<()> {
        message.validate()?;
        self.cache.invalidate(session).await?;
        self.api.create_message(message).await
    }
}
