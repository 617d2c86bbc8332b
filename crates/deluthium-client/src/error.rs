//! Client error types.

use crate::codes::VenueFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network/HTTP-layer failure: connection refused, timeout, non-2xx on
    /// a critical path. Never retried here; retry policy is the caller's.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Semantic failure reported by the venue via either error-code scheme.
    #[error("Deluthium API error [{}]: {}", .0.code, .0.message)]
    Venue(VenueFailure),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the venue itself rejected the request (vs. transport).
    pub fn is_venue_error(&self) -> bool {
        matches!(self, Self::Venue(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
