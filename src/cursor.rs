use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A batch-oriented cursor over server-side query results.
///
/// `advance` fetches the next batch, returning `true` while batches remain.
/// `current_batch` hands over the batch fetched by the most recent `advance`
/// and is only valid immediately after an `advance` that returned `true`;
/// implementations are free to panic or return garbage otherwise, so callers
/// must never access it out of that window.
#[async_trait]
pub trait BatchCursor {
    type Document;
    type Error;

    /// Fetch the next batch. The cancellation token is the caller's; honoring
    /// it (or ignoring it) is up to the implementation.
    async fn advance(&mut self, cancel: &CancellationToken) -> Result<bool, Self::Error>;

    /// Take the batch produced by the last successful `advance`.
    fn current_batch(&mut self) -> Vec<Self::Document>;
}

// Lets callers hand the adapter a borrow and keep ownership of the cursor,
// e.g. to close it themselves once the stream is dropped.
#[async_trait]
impl<C> BatchCursor for &mut C
where
    C: BatchCursor + Send + ?Sized,
{
    type Document = C::Document;
    type Error = C::Error;

    async fn advance(&mut self, cancel: &CancellationToken) -> Result<bool, Self::Error> {
        (**self).advance(cancel).await
    }

    fn current_batch(&mut self) -> Vec<Self::Document> {
        (**self).current_batch()
    }
}
