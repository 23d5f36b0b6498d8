use chrono::Utc;
use guestbook_core::NavigationIntent;
use guestbook_domain::{Message, SessionId};
use guestbook_persistence::SessionStore;

use crate::api_client::ApiClient;
use crate::browser::Browser;
use crate::keyboard::{pagination_keyboard, CallbackAction, Keyboard};

/// Inbound events as the chat transport delivers them.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The user opened the conversation.
    Start,
    /// An inline button was pressed; carries the button's callback payload.
    Callback(String),
    /// Free text: a message submission.
    Text { author: String, text: String },
}

/// What goes back to the transport: formatted text, optionally with the
/// pagination keyboard attached.
#[derive(Debug, Clone)]
pub struct BotReply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

const FAILURE_REPLY: &str = "Something went wrong, please try again later.";

/// Routes chat events to the browse/submit flows.
///
/// Every event is one independent unit of work; failures never escape to
/// the transport, they become a generic failure reply.
pub struct BotRouter<C: ApiClient, S: SessionStore> {
    browser: Browser<C, S>,
}

impl<C: ApiClient, S: SessionStore> BotRouter<C, S> {
    pub fn new(api: C, sessions: S) -> Self {
        Self {
            browser: Browser::new(api, sessions),
        }
    }

    pub async fn handle(&self, session: &SessionId, event: ChatEvent) -> BotReply {
        match event {
            ChatEvent::Start => self.browse_reply(session, NavigationIntent::Reset).await,
            ChatEvent::Callback(data) => {
                // unknown payloads fall through to reset, same as the stepper
                let intent = CallbackAction::parse(&data)
                    .map(CallbackAction::intent)
                    .unwrap_or(NavigationIntent::Reset);
                self.browse_reply(session, intent).await
            }
            ChatEvent::Text { author, text } => self.submit_reply(session, author, text).await,
        }
    }

    async fn browse_reply(&self, session: &SessionId, intent: NavigationIntent) -> BotReply {
        match self.browser.browse(session, intent).await {
            Ok(text) => BotReply {
                text,
                keyboard: Some(pagination_keyboard()),
            },
            Err(e) => {
                tracing::warn!("Session {session}: browse failed: {e}");
                BotReply {
                    text: FAILURE_REPLY.to_string(),
                    keyboard: None,
                }
            }
        }
    }

    async fn submit_reply(&self, session: &SessionId, author: String, text: String) -> BotReply {
        let message = Message::new(author, text, Utc::now());
        match self.browser.submit(session, message).await {
            Ok(()) => BotReply {
                text: "Message saved.".to_string(),
                keyboard: None,
            },
            Err(e) => {
                tracing::warn!("Session {session}: submission failed: {e}");
                BotReply {
                    text: FAILURE_REPLY.to_string(),
                    keyboard: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::MockApiClient;
    use guestbook_core::GuestbookError;
    use guestbook_domain::MessagePage;
    use guestbook_persistence::MemorySessionStore;

    fn empty_page() -> MessagePage {
        MessagePage {
            current_page: 1,
            last_page: 1,
            limit: 10,
            messages: vec![],
        }
    }

    fn session() -> SessionId {
        "chat-1".to_string()
    }

    #[tokio::test]
    async fn start_replies_with_page_and_keyboard() {
        let mut api = MockApiClient::new();
        api.expect_fetch_page()
            .withf(|&p| p == 1)
            .times(1)
            .returning(|_| Ok(empty_page()));

        let router = BotRouter::new(api, MemorySessionStore::new());
        let reply = router.handle(&session(), ChatEvent::Start).await;

        assert_eq!(reply.text, "No messages yet :(");
        assert!(reply.keyboard.is_some());
    }

    #[tokio::test]
    async fn unknown_callback_falls_through_to_reset() {
        let mut api = MockApiClient::new();
        api.expect_fetch_page()
            .withf(|&p| p == 1)
            .times(1)
            .returning(|_| Ok(empty_page()));

        let router = BotRouter::new(api, MemorySessionStore::new());
        let reply = router
            .handle(&session(), ChatEvent::Callback("bogus".to_string()))
            .await;
        assert!(reply.keyboard.is_some());
    }

    #[tokio::test]
    async fn fetch_failure_becomes_a_generic_reply() {
        let mut api = MockApiClient::new();
        api.expect_fetch_page().times(1).returning(|_| {
            Err(GuestbookError::Connection("refused".to_string()))
        });

        let router = BotRouter::new(api, MemorySessionStore::new());
        let reply = router.handle(&session(), ChatEvent::Start).await;

        assert_eq!(reply.text, FAILURE_REPLY);
        assert!(reply.keyboard.is_none());
    }

    #[tokio::test]
    async fn text_submits_a_message() {
        let mut api = MockApiClient::new();
        api.expect_create_message()
            .withf(|m| m.name == "Ada" && m.message == "hello")
            .times(1)
            .returning(|_| Ok(()));

        let router = BotRouter::new(api, MemorySessionStore::new());
        let reply = router
            .handle(
                &session(),
                ChatEvent::Text {
                    author: "Ada".to_string(),
                    text: "hello".to_string(),
                },
            )
            .await;
        assert_eq!(reply.text, "Message saved.");
    }
}
