//! Context state queries and recognized-but-unsupported operations
//!
//! Queries are blocking: driver state only exists on the render thread, and
//! the caller expects the answer synchronously. Each stalls the submitting
//! thread for a full render-thread turnaround, which is why scripts are
//! told to poll `get_error` sparingly.

use glrelay_common::GlEnum;

use super::unimplemented_commands;
use crate::context::GlContext;
use crate::error::RelayError;

impl GlContext {
    /// Poll the driver's error state.
    ///
    /// The bridge never intercepts driver errors; it only guarantees that
    /// every preceding call has run in program order by the time this
    /// returns, so the polled value is the one a synchronous API would have
    /// reported.
    pub fn get_error(&self) -> Result<GlEnum, RelayError> {
        self.queue
            .enqueue_blocking("get_error", |ctx| ctx.driver().get_error())
    }

    pub fn is_enabled(&self, cap: GlEnum) -> Result<bool, RelayError> {
        self.queue
            .enqueue_blocking("is_enabled", move |ctx| ctx.driver().is_enabled(cap))
    }

    pub fn get_parameter_i32(&self, pname: GlEnum) -> Result<i32, RelayError> {
        self.queue
            .enqueue_blocking("get_parameter_i32", move |ctx| ctx.driver().get_integer(pname))
    }

    pub fn get_parameter_f32(&self, pname: GlEnum) -> Result<f32, RelayError> {
        self.queue
            .enqueue_blocking("get_parameter_f32", move |ctx| ctx.driver().get_float(pname))
    }

    pub fn get_parameter_string(&self, pname: GlEnum) -> Result<String, RelayError> {
        self.queue
            .enqueue_blocking("get_parameter_string", move |ctx| {
                ctx.driver().get_string(pname)
            })
    }
}

unimplemented_commands! {
    get_buffer_sub_data;
    get_tex_parameter;
    compressed_tex_image_2d;
    compressed_tex_sub_image_2d;
    fence_sync;
    client_wait_sync;
    get_uniform;
    get_vertex_attrib;
}
