use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuestbookError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
