//! Error types for the bridge

use glrelay_common::{ObjectHandle, PixelDataError};
use thiserror::Error;

/// Errors surfaced to the submitting thread.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The context has been torn down; no further work is accepted.
    #[error("{op}: context lost, the render thread has shut down")]
    ContextLost { op: &'static str },

    /// Operation recognized but not supported by this bridge.
    #[error("{op}: not implemented")]
    Unimplemented { op: &'static str },

    /// Malformed arguments detected before anything was enqueued.
    #[error("{op}: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    /// Pixel layout the bridge does not understand.
    #[error("{op}: {source}")]
    PixelData {
        op: &'static str,
        source: PixelDataError,
    },

    /// A blocking work item died on the render thread without replying.
    #[error("{op}: work item failed on the render thread")]
    WorkItemFailed { op: &'static str },

    /// Internal-consistency fault from the object registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Internal-consistency faults from the handle registry.
///
/// These indicate a sequencing bug upstream (a handle dereferenced before
/// its creation executed, or after deletion), not a recoverable user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("object handle {0} is not registered")]
    UnknownHandle(ObjectHandle),

    #[error("native name {0} has no associated handle")]
    UnmappedName(u32),
}
