use crate::error::GuestbookError;

pub type GuestbookResult<T> = Result<T, GuestbookError>;
