use tokio_util::sync::CancellationToken;

/// Synchronous counterpart of [`crate::BatchCursor`], for drivers that
/// expose a blocking advance. Same contract: `current_batch` is only valid
/// immediately after an `advance` that returned `true`.
pub trait BlockingBatchCursor {
    type Document;
    type Error;

    fn advance(&mut self, cancel: &CancellationToken) -> Result<bool, Self::Error>;

    fn current_batch(&mut self) -> Vec<Self::Document>;
}

impl<C> BlockingBatchCursor for &mut C
where
    C: BlockingBatchCursor + ?Sized,
{
    type Document = C::Document;
    type Error = C::Error;

    fn advance(&mut self, cancel: &CancellationToken) -> Result<bool, Self::Error> {
        (**self).advance(cancel)
    }

    fn current_batch(&mut self) -> Vec<Self::Document> {
        (**self).current_batch()
    }
}

/// Iterator of documents over a [`BlockingBatchCursor`], with the same
/// flattening, empty-batch, and termination semantics as
/// [`crate::DocumentStream`]: batches concatenated in arrival order, a
/// failed advance yielded once as `Err`, then `None` forever without
/// touching the cursor again.
pub struct DocumentIter<C: BlockingBatchCursor> {
    cursor: C,
    cancel: CancellationToken,
    batch: std::vec::IntoIter<C::Document>,
    done: bool,
}

impl<C: BlockingBatchCursor> DocumentIter<C> {
    pub fn new(cursor: C, cancel: CancellationToken) -> Self {
        Self {
            cursor,
            cancel,
            batch: Vec::new().into_iter(),
            done: false,
        }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: BlockingBatchCursor> Iterator for DocumentIter<C> {
    type Item = Result<C::Document, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(doc) = self.batch.next() {
                return Some(Ok(doc));
            }
            match self.cursor.advance(&self.cancel) {
                Ok(true) => self.batch = self.cursor.current_batch().into_iter(),
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Entry point for the blocking variant.
pub trait BlockingBatchCursorExt: BlockingBatchCursor + Sized {
    fn into_document_iter(self) -> DocumentIter<Self> {
        DocumentIter::new(self, CancellationToken::new())
    }

    fn into_document_iter_with_cancel(self, cancel: CancellationToken) -> DocumentIter<Self> {
        DocumentIter::new(self, cancel)
    }
}

impl<C: BlockingBatchCursor + Sized> BlockingBatchCursorExt for C {}
