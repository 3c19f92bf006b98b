//! Shared utilities for use cases.
//!
//! Contains the cancellation race used around every remote source call.

use crate::ports::people_source::SourceError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Run a source call, abandoning it as soon as `token` is cancelled.
///
/// Cancellation wins when both are ready. Sources are expected to watch the
/// token themselves; this also covers sources that never check it.
pub(crate) async fn race_cancelled<T, F>(token: &CancellationToken, call: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(SourceError::Cancelled),
        result = call => result,
    }
}
