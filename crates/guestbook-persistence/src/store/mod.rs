pub mod atomic_writer;
pub mod json_message_store;
pub mod memory;

pub use json_message_store::JsonMessageStore;
pub use memory::{MemoryMessageStore, MemorySessionStore};
