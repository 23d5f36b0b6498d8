use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of one conversation with the bot. Chat transports hand these
/// out as opaque strings.
pub type SessionId = String;

/// Per-conversation navigation state: the page the user is looking at and
/// the rendered pages fetched so far.
///
/// A typed struct rather than the free-form key/value blob a bot framework's
/// storage would hold, so the cache keys and the page-tracking fields cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_page: u64,
    pub last_page: Option<u64>,
    /// Rendered page text keyed by page number.
    pub pages: HashMap<u64, String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: None,
            pages: HashMap::new(),
        }
    }
}

impl SessionState {
    pub fn cached_page(&self, page: u64) -> Option<&str> {
        self.pages.get(&page).map(String::as_str)
    }
}
