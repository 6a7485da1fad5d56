//! Context aggregate
//!
//! One [`GlContext`] pairs one submitting thread with one render thread and
//! owns everything between them: the command queue, the object registry,
//! the render thread handle, and the per-context unpack options. This is a
//! fixed two-role model; no work ever executes on a third thread.

use std::sync::Arc;
use std::sync::mpsc;

use glrelay_common::NativeName;
use tracing::debug;

use crate::batch::{CommandQueue, RenderHandle, RenderThread};
use crate::driver::GlDriver;
use crate::error::RelayError;
use crate::registry::ObjectRegistry;

/// Per-context creation options.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Native name of the platform framebuffer that scripts address as
    /// framebuffer handle 0.
    pub default_framebuffer: NativeName,
}

/// Fixed surface properties reported to scripts.
///
/// Answered immediately on the submitting thread; no driver access needed.
#[derive(Debug, Clone, Copy)]
pub struct ContextAttributes {
    pub alpha: bool,
    pub depth: bool,
    pub stencil: bool,
    pub antialias: bool,
    pub premultiplied_alpha: bool,
}

/// The bridge between a scripting thread and its render thread.
///
/// Adapter entry points (the `api` modules) are methods on this type and
/// are called from the single submitting thread. Dropping the context seals
/// outstanding work, lets the render thread drain it, and joins the thread;
/// no work item ever runs against a released driver.
pub struct GlContext {
    pub(crate) queue: CommandQueue,
    pub(crate) registry: Arc<ObjectRegistry>,
    render: RenderHandle,
    pub(crate) unpack_flip_y: bool,
}

impl GlContext {
    /// Spawn the render thread for `driver` and wire up the bridge.
    pub fn new(driver: Box<dyn GlDriver>, options: ContextOptions) -> Self {
        let registry = Arc::new(ObjectRegistry::new());
        let (tx, rx) = mpsc::channel();
        let render =
            RenderThread::spawn(rx, driver, registry.clone(), options.default_framebuffer);
        debug!(
            default_framebuffer = options.default_framebuffer,
            "context created"
        );
        Self {
            queue: CommandQueue::new(tx),
            registry,
            render,
            unpack_flip_y: false,
        }
    }

    /// Seal the current batch and hand it to the render thread.
    ///
    /// Called once per rendering frame by the embedder, or whenever queued
    /// work should start executing without waiting for the frame boundary.
    pub fn submit_frame(&self) -> Result<(), RelayError> {
        self.queue.submit()
    }

    /// Stop accepting work and let the render thread drain what remains.
    ///
    /// Every adapter entry point afterwards fails with
    /// [`RelayError::ContextLost`]. Called implicitly on drop.
    pub fn shutdown(&self) {
        self.queue.close();
    }

    /// Whether the render thread is still running.
    pub fn is_alive(&self) -> bool {
        self.render.is_alive()
    }

    /// Surface properties of this context. Immediate; nothing is enqueued.
    pub fn context_attributes(&self) -> ContextAttributes {
        ContextAttributes {
            alpha: true,
            depth: true,
            stencil: false,
            antialias: false,
            premultiplied_alpha: false,
        }
    }

    /// Whether the context has been torn down. Immediate; nothing is
    /// enqueued.
    pub fn is_context_lost(&self) -> bool {
        self.queue.is_closed() || !self.is_alive()
    }

    /// The handle registry shared with the render thread.
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        // Close before the RenderHandle join runs: the hang-up is what lets
        // the render thread finish draining and exit.
        self.queue.close();
        debug!("context closed");
    }
}
