use serde::{Deserialize, Serialize};

use crate::message::Message;

/// One fetched page of messages, newest first, as served by the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePage {
    pub current_page: u64,
    pub last_page: u64,
    pub limit: u64,
    pub messages: Vec<Message>,
}
