//! Adapts batch-oriented database cursors into pull-based document streams.
//!
//! A [`BatchCursor`] fetches one batch per advance; [`DocumentStream`]
//! flattens those batches into a lazy, forward-only sequence of documents,
//! fetching the next batch only when the current one is drained:
//!
//! ```no_run
//! # use cursor_stream::{BatchCursor, BatchCursorExt};
//! # async fn demo<C>(cursor: C) -> Result<(), C::Error>
//! # where C: BatchCursor + Send, C::Document: Send {
//! let mut docs = cursor.into_document_stream();
//! while let Some(doc) = docs.try_next().await? {
//!     // one document at a time, in batch-arrival order
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Cancellation is cooperative: a [`CancellationToken`] handed to
//! [`BatchCursorExt::into_document_stream_with_cancel`] is forwarded to
//! every advance call and observed nowhere else.

mod blocking;
mod cursor;
#[cfg(feature = "mongo")]
mod mongo;
mod stream;

pub use blocking::{BlockingBatchCursor, BlockingBatchCursorExt, DocumentIter};
pub use cursor::BatchCursor;
#[cfg(feature = "mongo")]
pub use mongo::MongoBatchCursor;
pub use stream::{BatchCursorExt, DocumentStream};

pub use tokio_util::sync::CancellationToken;
