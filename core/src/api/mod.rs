//! Call adapter layer
//!
//! Per-entry-point methods on [`GlContext`](crate::context::GlContext),
//! grouped by GL area. Each method validates and unpacks its arguments on
//! the submitting thread and enqueues a work item capturing everything by
//! value; methods that return driver state enqueue blocking items.
//!
//! The forward-only wrappers are mechanical and are generated from the
//! declarative tables in each module by [`forward_commands!`]. Everything
//! with handle resolution, payload capture, or a reply is hand-written.

mod buffers;
mod draw;
mod framebuffers;
mod query;
mod renderbuffers;
mod shaders;
mod state;
mod textures;
mod uniforms;
mod vertex_arrays;


/// Declarative table for forward-only commands: one line per entry point
/// naming the public method, its typed arguments, and the driver call it
/// becomes on the render thread.
///
/// ```rust,ignore
/// forward_commands! {
///     line_width(width: f32) => line_width;
/// }
/// ```
macro_rules! forward_commands {
    ($( $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) => $driver_fn:ident; )*) => {
        impl $crate::context::GlContext {
            $(
                pub fn $name(&self, $($arg: $ty),*) -> Result<(), $crate::error::RelayError> {
                    self.queue.enqueue(stringify!($name), move |ctx| {
                        ctx.driver().$driver_fn($($arg),*);
                    })
                }
            )*
        }
    };
}
pub(crate) use forward_commands;

/// Operations this bridge recognizes but does not support. They fail
/// immediately with a distinct error so callers can detect the gap
/// deterministically; silently degrading to a no-op is not an option.
macro_rules! unimplemented_commands {
    ($( $name:ident; )*) => {
        impl $crate::context::GlContext {
            $(
                pub fn $name(&self) -> Result<(), $crate::error::RelayError> {
                    Err($crate::error::RelayError::Unimplemented {
                        op: stringify!($name),
                    })
                }
            )*
        }
    };
}
pub(crate) use unimplemented_commands;
