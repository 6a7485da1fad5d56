//! glrelay-core - Command batching and dispatch for a two-thread GL bridge
//!
//! A scripting (submitting) thread records graphics calls as work items;
//! batches hand off through a channel; a dedicated render thread executes
//! them strictly in submission order against the driver. Blocking calls
//! carry a reply slot so state queries still look synchronous to the
//! caller.
//!
//! # Architecture
//!
//! - [`GlContext`] - Aggregate pairing one submitting thread with one render thread
//! - [`CommandQueue`] - Open batch, seal points, blocking enqueue
//! - [`ObjectRegistry`] - Handle-to-driver-name arena referenced from both threads
//! - [`GlDriver`] - The consumed driver boundary, callable only on the render thread

pub mod batch;
pub mod context;
pub mod driver;
pub mod error;
pub mod registry;

mod api;

#[cfg(test)]
pub mod test_utils;

pub use batch::{CommandQueue, RenderContext, RenderHandle};
pub use context::{ContextAttributes, ContextOptions, GlContext};
pub use driver::GlDriver;
pub use error::{RegistryError, RelayError};
pub use registry::ObjectRegistry;

// Re-export the shared vocabulary so embedders can depend on one crate.
pub use glrelay_common::{GlEnum, NativeName, ObjectHandle, glenum, pixels};
