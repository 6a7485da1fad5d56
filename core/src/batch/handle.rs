//! Render thread handle
//!
//! Joins the thread on drop. The owning context closes the queue first, so
//! the render thread drains outstanding batches and exits before the join.

use std::thread::JoinHandle;

use tracing::warn;

/// Handle to the render thread's lifetime.
pub struct RenderHandle {
    join: Option<JoinHandle<()>>,
}

impl RenderHandle {
    pub(crate) fn new(join: JoinHandle<()>) -> Self {
        Self { join: Some(join) }
    }

    /// Whether the render thread is still running.
    pub fn is_alive(&self) -> bool {
        self.join.as_ref().map(|j| !j.is_finished()).unwrap_or(false)
    }
}

impl Drop for RenderHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("render thread terminated by panic");
            }
        }
    }
}
