use async_trait::async_trait;
use chrono::{DateTime, Utc};
use guestbook_core::{GuestbookError, GuestbookResult};
use guestbook_domain::{Message, MessageId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::store::atomic_writer;
use crate::traits::MessageStore;

const FORMAT_VERSION: u32 = 1;

/// JSON file-backed message log.
///
/// The whole log is one versioned JSON envelope, rewritten atomically on
/// every insert. Fine for a guestbook-sized collection; anything bigger
/// belongs behind the same trait with a real database.
#[derive(Debug)]
pub struct JsonMessageStore {
    path: PathBuf,
    // insert is load-modify-save; serialize writers so concurrent
    // submissions do not drop entries
    write_lock: tokio::sync::Mutex<()>,
}

/// On-disk record: the wire message plus its storage id.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredMessage {
    id: MessageId,
    name: String,
    message: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    messages: Vec<StoredMessage>,
}

impl JsonMessageStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> GuestbookResult<Vec<StoredMessage>> {
        let Some(bytes) = atomic_writer::read_if_exists(&self.path).await? else {
            return Ok(Vec::new());
        };

        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| GuestbookError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(GuestbookError::Serialization(format!(
                "Unsupported store format version: {}",
                envelope.version
            )));
        }
        Ok(envelope.messages)
    }

    async fn save(&self, messages: Vec<StoredMessage>) -> GuestbookResult<()> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            messages,
        };
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| GuestbookError::Serialization(e.to_string()))?;
        atomic_writer::write_atomic(&self.path, &bytes).await?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl MessageStore for JsonMessageStore {
    async fn count(&self) -> GuestbookResult<u64> {
        Ok(self.load().await?.len() as u64)
    }

    async fn find_range(&self, skip: u64, limit: u64) -> GuestbookResult<Vec<Message>> {
        let mut messages = self.load().await?;
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(messages
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|stored| Message {
                name: stored.name,
                message: stored.message,
                date: stored.date,
            })
            .collect())
    }

    async fn insert(&self, message: Message) -> GuestbookResult<MessageId> {
        let _guard = self.write_lock.lock().await;
        let mut messages = self.load().await?;
        let id = Uuid::new_v4();
        messages.push(StoredMessage {
            id,
            name: message.name,
            message: message.message,
            date: message.date,
        });
        self.save(messages).await?;
        tracing::debug!("Inserted message {id}");
        Ok(id)
    }
}
