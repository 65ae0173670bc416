use futures::stream::{self, Stream};
use tokio_util::sync::CancellationToken;

use crate::cursor::BatchCursor;

/// Pull-based stream of documents over a [`BatchCursor`].
///
/// Flattens batches in arrival order, one document per pull, fetching the
/// next batch only once the current one is drained. Single-pass: after the
/// cursor reports no more batches, or after an advance fails, every further
/// pull returns `Ok(None)` without touching the cursor again.
pub struct DocumentStream<C: BatchCursor> {
    cursor: C,
    cancel: CancellationToken,
    batch: std::vec::IntoIter<C::Document>,
    done: bool,
}

impl<C: BatchCursor> DocumentStream<C> {
    pub fn new(cursor: C, cancel: CancellationToken) -> Self {
        Self {
            cursor,
            cancel,
            batch: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Next document, or `Ok(None)` once the cursor is exhausted.
    ///
    /// Empty batches are skipped transparently: the loop keeps advancing
    /// until a batch yields a document or the cursor reports the end. An
    /// error from `advance` is returned verbatim and ends the stream;
    /// documents already yielded are unaffected.
    pub async fn try_next(&mut self) -> Result<Option<C::Document>, C::Error> {
        if self.done {
            return Ok(None);
        }
        loop {
            if let Some(doc) = self.batch.next() {
                return Ok(Some(doc));
            }
            match self.cursor.advance(&self.cancel).await {
                Ok(true) => self.batch = self.cursor.current_batch().into_iter(),
                Ok(false) => {
                    self.done = true;
                    return Ok(None);
                }
                Err(err) => {
                    self.done = true;
                    return Err(err);
                }
            }
        }
    }

    /// Give the cursor back. The adapter never closes it; that stays the
    /// caller's job.
    pub fn into_inner(self) -> C {
        self.cursor
    }

    /// Adapt into a [`futures::Stream`] of `Result<Document, Error>` for
    /// combinator-style consumption. The error, if one occurs, is the final
    /// item.
    pub fn into_stream(self) -> impl Stream<Item = Result<C::Document, C::Error>>
    where
        C: Send,
        C::Document: Send,
    {
        stream::try_unfold(self, |mut this| async move {
            Ok(this.try_next().await?.map(|doc| (doc, this)))
        })
    }
}

/// Entry point: turns any [`BatchCursor`] into a [`DocumentStream`].
pub trait BatchCursorExt: BatchCursor + Sized {
    /// Stream all documents, with no cancellation wired up.
    fn into_document_stream(self) -> DocumentStream<Self> {
        DocumentStream::new(self, CancellationToken::new())
    }

    /// Stream all documents, forwarding `cancel` to every advance call.
    /// The adapter itself never inspects the token; only the cursor's
    /// advance observes it, so cancellation mid-batch still delivers the
    /// rest of the already-fetched batch.
    fn into_document_stream_with_cancel(self, cancel: CancellationToken) -> DocumentStream<Self> {
        DocumentStream::new(self, cancel)
    }
}

impl<C: BatchCursor + Sized> BatchCursorExt for C {}
