use async_trait::async_trait;
use guestbook_core::{GuestbookError, GuestbookResult};
use guestbook_domain::{Message, MessagePage};

/// The guestbook API as the bot sees it. A trait so handler tests can run
/// without a server on the other end.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetch one page of messages. The server clamps out-of-range pages.
    async fn fetch_page(&self, page: u64) -> GuestbookResult<MessagePage>;

    /// Submit a new message.
    async fn create_message(&self, message: Message) -> GuestbookResult<()>;
}

/// reqwest-backed client against the HTTP API.
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn check(response: reqwest::Response) -> GuestbookResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(GuestbookError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn fetch_page(&self, page: u64) -> GuestbookResult<MessagePage> {
        let response = self
            .client
            .get(format!("{}/api/v1/messages", self.base_url))
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| GuestbookError::Connection(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| GuestbookError::Serialization(e.to_string()))
    }

    async fn create_message(&self, message: Message) -> GuestbookResult<()> {
        let response = self
            .client
            .post(format!("{}/api/v1/message", self.base_url))
            .json(&message)
            .send()
            .await
            .map_err(|e| GuestbookError::Connection(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}
