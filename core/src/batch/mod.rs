//! Command batching and the render thread executor
//!
//! Work items accumulate into the open batch on the submitting thread.
//! Sealing hands the batch to the render thread over a channel; the render
//! thread drains batches strictly in submission order and parks on the
//! channel when idle.
//!
//! # Architecture
//!
//! ```text
//! Submitting Thread                       Render Thread
//!     │                                        │
//! [enqueue work]                               │
//! [enqueue work]                               │
//!     │                                        │
//! [seal batch]──────────(channel)──────────►[drain in order]
//!     │                                     [execute against driver]
//!     │                                        │
//! [enqueue_blocking]────(channel)──────────►[execute item]
//!     │◄────────────────(reply slot)────────[send result]
//! ```
//!
//! Blocking items carry a single-use reply slot; the item body fills it
//! before the executor moves on, so the submitter resumes as soon as its
//! own item completes rather than at the end of the batch.

mod handle;
mod metrics;
mod queue;
mod thread;

pub use handle::RenderHandle;
pub use queue::{Batch, CommandQueue, WorkItem};
pub use thread::RenderContext;

pub(crate) use thread::RenderThread;
