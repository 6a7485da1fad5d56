//! Submitting-thread side of the bridge
//!
//! The queue accumulates work items into the open batch and hands sealed
//! batches to the render thread. Sealing happens at frame boundaries
//! ([`CommandQueue::submit`]), eagerly on blocking enqueues, and once more
//! at close.

use std::sync::Mutex;
use std::sync::mpsc::{Sender, sync_channel};

use tracing::trace;

use crate::batch::thread::RenderContext;
use crate::error::RelayError;

/// A unit of deferred driver work.
///
/// Arguments are captured by value at enqueue time; nothing in a work item
/// may reference submitting-thread memory that could be reclaimed before
/// execution.
pub struct WorkItem {
    pub(crate) op: &'static str,
    pub(crate) blocking: bool,
    pub(crate) run: Box<dyn FnOnce(&mut RenderContext) + Send>,
}

/// An ordered run of work items sealed between two seal points.
pub struct Batch {
    pub(crate) seq: u64,
    pub(crate) items: Vec<WorkItem>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

struct QueueInner {
    items: Vec<WorkItem>,
    /// `None` once the queue is closed; the hung-up channel is what lets
    /// the render thread finish draining and exit.
    tx: Option<Sender<Batch>>,
    next_seq: u64,
}

/// The command batch queue. One per context, shared by every adapter entry
/// point on the submitting thread.
pub struct CommandQueue {
    inner: Mutex<QueueInner>,
}

impl CommandQueue {
    pub(crate) fn new(tx: Sender<Batch>) -> Self {
        Self {
            inner: Mutex::new(QueueInner {
                items: Vec::with_capacity(256),
                tx: Some(tx),
                next_seq: 0,
            }),
        }
    }

    /// Append a non-blocking work item to the open batch. Never blocks the
    /// submitting thread.
    pub fn enqueue(
        &self,
        op: &'static str,
        run: impl FnOnce(&mut RenderContext) + Send + 'static,
    ) -> Result<(), RelayError> {
        let mut inner = self.lock();
        if inner.tx.is_none() {
            return Err(RelayError::ContextLost { op });
        }
        inner.items.push(WorkItem {
            op,
            blocking: false,
            run: Box::new(run),
        });
        Ok(())
    }

    /// Append a blocking work item, seal the open batch so the render
    /// thread reaches the item without waiting for the next frame boundary,
    /// and park until its reply arrives.
    ///
    /// The reply carries whatever the item produced. An item that dies
    /// without replying (a panic on the render thread) surfaces as
    /// [`RelayError::WorkItemFailed`].
    pub fn enqueue_blocking<R, F>(&self, op: &'static str, run: F) -> Result<R, RelayError>
    where
        R: Send + 'static,
        F: FnOnce(&mut RenderContext) -> R + Send + 'static,
    {
        let (reply_tx, reply_rx) = sync_channel::<R>(1);
        {
            let mut inner = self.lock();
            if inner.tx.is_none() {
                return Err(RelayError::ContextLost { op });
            }
            inner.items.push(WorkItem {
                op,
                blocking: true,
                run: Box::new(move |ctx| {
                    // Capacity 1 and a single send: never blocks the
                    // executor. A dropped receiver means nobody waits.
                    let _ = reply_tx.send(run(ctx));
                }),
            });
            Self::seal_locked(&mut inner);
        }
        reply_rx
            .recv()
            .map_err(|_| RelayError::WorkItemFailed { op })
    }

    /// Seal the open batch and hand it to the render thread.
    ///
    /// Items enqueued before this call land in the sealed batch; later
    /// items start the next one. An empty open batch is skipped.
    pub fn submit(&self) -> Result<(), RelayError> {
        let mut inner = self.lock();
        if inner.tx.is_none() {
            return Err(RelayError::ContextLost { op: "submit" });
        }
        Self::seal_locked(&mut inner);
        Ok(())
    }

    /// Seal any remainder and disconnect from the render thread.
    ///
    /// The render thread drains everything already in the channel, then
    /// exits on the hang-up. Later enqueues fail with
    /// [`RelayError::ContextLost`]. Idempotent.
    pub fn close(&self) {
        let mut inner = self.lock();
        Self::seal_locked(&mut inner);
        inner.tx = None;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().tx.is_none()
    }

    fn seal_locked(inner: &mut QueueInner) {
        if inner.items.is_empty() {
            return;
        }
        let Some(tx) = inner.tx.as_ref() else {
            return;
        };
        let batch = Batch {
            seq: inner.next_seq,
            items: std::mem::take(&mut inner.items),
        };
        inner.next_seq += 1;
        trace!(seq = batch.seq, items = batch.len(), "sealed batch");
        // Send can only fail after close(), which tears the receiver down
        // with the rest of the render thread.
        let _ = tx.send(batch);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, QueueInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
