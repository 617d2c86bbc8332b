//! Never-yielding streams for channels this venue cannot populate.
//!
//! Downstream consumers await the snapshot, diff, and trade streams
//! uniformly. Deluthium produces no diffs or trades, so those two channels
//! are streams that are valid to poll forever but contractually never
//! yield and never close. Modelling them as an immediate end-of-stream
//! would make consumers treat the venue as disconnected.

use futures_util::Stream;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream that suspends indefinitely: every poll returns `Pending`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingStream<T> {
    _marker: PhantomData<T>,
}

impl<T> Stream for PendingStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Pending
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// A stream that never yields an item and never terminates.
pub fn pending_stream<T>() -> PendingStream<T> {
    PendingStream {
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deluthium_core::BookMessage;
    use futures_util::StreamExt;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_pending_stream_never_yields() {
        let mut stream = pending_stream::<BookMessage>();
        // A generous (virtual) wait: the stream must still be pending, not
        // closed.
        let result =
            tokio::time::timeout(Duration::from_secs(3600), stream.next()).await;
        assert!(result.is_err(), "pending stream yielded or closed");
    }
}
