pub mod api_client;
pub mod browser;
pub mod cache;
pub mod format;
pub mod handlers;
pub mod keyboard;

pub use api_client::{ApiClient, HttpApiClient};
pub use browser::Browser;
pub use cache::PageCache;
pub use handlers::{BotReply, BotRouter, ChatEvent};
pub use keyboard::{pagination_keyboard, CallbackAction, InlineButton, Keyboard};
