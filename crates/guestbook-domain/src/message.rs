use chrono::{DateTime, Utc};
use guestbook_core::{GuestbookError, GuestbookResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type MessageId = Uuid;

/// A single guestbook entry, as submitted by a user and as returned in
/// listings. The storage id never travels over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

impl Message {
    pub fn new(name: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            date,
        }
    }

    /// Reject blank submissions before they reach storage.
    pub fn validate(&self) -> GuestbookResult<()> {
        if self.name.trim().is_empty() {
            return Err(GuestbookError::Validation(
                "message author name must not be empty".to_string(),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(GuestbookError::Validation(
                "message text must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
