pub mod config;
pub mod error;
pub mod navigation;
pub mod pagination;
pub mod result;

pub use config::AppConfig;
pub use error::GuestbookError;
pub use navigation::{next_page, NavigationIntent};
pub use pagination::PageWindow;
pub use result::GuestbookResult;
