//! Render thread drain loop
//!
//! The executor has no scheduling policy: it blocks on the batch channel,
//! drains whatever arrives in submission order, and exits when every queue
//! sender is gone.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread;

use glrelay_common::{NativeName, ObjectHandle};
use tracing::{debug, error, trace};

use super::handle::RenderHandle;
use super::metrics::ExecutorMetrics;
use super::queue::Batch;
use crate::driver::GlDriver;
use crate::error::RegistryError;
use crate::registry::ObjectRegistry;

/// What a work item executes against: the live driver plus the shared
/// object registry. Only the render thread ever holds one.
pub struct RenderContext {
    driver: Box<dyn GlDriver>,
    registry: Arc<ObjectRegistry>,
    default_framebuffer: NativeName,
}

impl RenderContext {
    pub fn driver(&mut self) -> &mut dyn GlDriver {
        self.driver.as_mut()
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Native name of the platform framebuffer, bound when scripts bind
    /// framebuffer handle 0.
    pub fn default_framebuffer(&self) -> NativeName {
        self.default_framebuffer
    }

    /// Resolve a handle to its driver name.
    pub fn lookup(&self, handle: ObjectHandle) -> Result<NativeName, RegistryError> {
        self.registry.lookup(handle)
    }

    /// Resolve a handle for a non-blocking item. An unknown handle is an
    /// internal-consistency fault with no return path, so it goes to the
    /// ambient diagnostic channel and the caller skips its driver call.
    pub fn resolve(&self, op: &'static str, handle: ObjectHandle) -> Option<NativeName> {
        match self.registry.lookup(handle) {
            Ok(name) => Some(name),
            Err(err) => {
                error!(op, %err, "skipping driver call");
                None
            }
        }
    }
}

/// The batch executor. Owns the driver context for the thread's lifetime.
pub(crate) struct RenderThread {
    rx: Receiver<Batch>,
    ctx: RenderContext,
    metrics: ExecutorMetrics,
}

impl RenderThread {
    /// Spawn the render thread.
    ///
    /// The thread exits once the batch channel disconnects and everything
    /// already sent has been drained, so no work item ever runs against a
    /// released driver.
    pub(crate) fn spawn(
        rx: Receiver<Batch>,
        driver: Box<dyn GlDriver>,
        registry: Arc<ObjectRegistry>,
        default_framebuffer: NativeName,
    ) -> RenderHandle {
        let join = thread::Builder::new()
            .name("gl-render".into())
            .spawn(move || {
                let mut executor = Self {
                    rx,
                    ctx: RenderContext {
                        driver,
                        registry,
                        default_framebuffer,
                    },
                    metrics: ExecutorMetrics::new(),
                };
                executor.run();
            })
            .expect("failed to spawn render thread");

        RenderHandle::new(join)
    }

    fn run(&mut self) {
        debug!("render thread started");

        while let Ok(batch) = self.rx.recv() {
            self.drain(batch);
            self.metrics.maybe_log();
        }

        debug!("render thread finished (queue disconnected)");
    }

    /// Execute every item of a batch in submission order.
    ///
    /// A failing item must not corrupt the queue or abort the rest of the
    /// batch: the panic is caught, counted, and logged. Blocking items
    /// signal their waiter from inside the item body, before the next item
    /// runs; a panicking blocking item unblocks its waiter by dropping the
    /// reply slot.
    fn drain(&mut self, batch: Batch) {
        trace!(seq = batch.seq, items = batch.len(), "draining batch");

        for item in batch.items {
            let op = item.op;
            let blocking = item.blocking;
            let ctx = &mut self.ctx;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (item.run)(ctx)));

            self.metrics.items_executed += 1;
            if blocking {
                self.metrics.blocking_items += 1;
            }
            if let Err(payload) = outcome {
                self.metrics.item_failures += 1;
                error!(op, blocking, reason = panic_message(&payload), "work item panicked");
            }
        }

        self.metrics.batches_drained += 1;
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
