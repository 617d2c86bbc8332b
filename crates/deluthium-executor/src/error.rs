//! Executor error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Validation error: {0}")]
    Core(#[from] deluthium_core::CoreError),

    #[error(transparent)]
    Client(#[from] deluthium_client::ClientError),
}

pub type ExecutorResult<T> = Result<T, ExecutorError>;
