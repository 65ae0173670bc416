use std::io;
use std::mem;

use async_trait::async_trait;
use futures::StreamExt;
use mongodb::Cursor;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::cursor::BatchCursor;

/// Re-batches a `mongodb::Cursor` so it can drive a
/// [`DocumentStream`](crate::DocumentStream).
///
/// The driver's cursor yields one document at a time; this wrapper groups
/// them into batches of up to `batch_size` per advance. A partial batch at
/// the end of the result set is still surfaced before iteration finishes.
pub struct MongoBatchCursor<T> {
    cursor: Cursor<T>,
    batch_size: usize,
    batch: Vec<T>,
    finished: bool,
}

impl<T> MongoBatchCursor<T> {
    pub fn new(cursor: Cursor<T>, batch_size: usize) -> Self {
        Self {
            cursor,
            batch_size: batch_size.max(1),
            batch: Vec::new(),
            finished: false,
        }
    }
}

#[async_trait]
impl<T> BatchCursor for MongoBatchCursor<T>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    type Document = T;
    type Error = mongodb::error::Error;

    async fn advance(&mut self, cancel: &CancellationToken) -> Result<bool, Self::Error> {
        if self.finished {
            return Ok(false);
        }
        if cancel.is_cancelled() {
            return Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "cursor iteration cancelled",
            )
            .into());
        }

        let mut batch = Vec::with_capacity(self.batch_size);
        while batch.len() < self.batch_size {
            match self.cursor.next().await {
                Some(Ok(doc)) => batch.push(doc),
                Some(Err(err)) => return Err(err),
                None => {
                    self.finished = true;
                    break;
                }
            }
        }

        if batch.is_empty() {
            return Ok(false);
        }
        self.batch = batch;
        Ok(true)
    }

    fn current_batch(&mut self) -> Vec<T> {
        mem::take(&mut self.batch)
    }
}
