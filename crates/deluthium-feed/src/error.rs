//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Snapshot sink closed")]
    SinkClosed,

    #[error("Invalid poller configuration: {0}")]
    InvalidConfig(String),
}

pub type FeedResult<T> = Result<T, FeedError>;
