//! Buffer object commands

use glrelay_common::{GlEnum, ObjectHandle};

use crate::context::GlContext;
use crate::error::RelayError;

impl GlContext {
    /// Allocate a buffer handle. The driver object is created when the
    /// queued work item executes; the handle is usable immediately.
    pub fn create_buffer(&self) -> Result<ObjectHandle, RelayError> {
        let handle = self.registry.allocate();
        self.queue.enqueue("create_buffer", move |ctx| {
            let name = ctx.driver().gen_buffer();
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    /// Delete a buffer. Safe to call before the creating work item has
    /// executed; FIFO order guarantees the create runs first, so the net
    /// effect is that the object never becomes usable.
    pub fn delete_buffer(&self, buffer: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_buffer", move |ctx| {
            if let Some(name) = ctx.registry().remove(buffer) {
                ctx.driver().delete_buffer(name);
            }
        })
    }

    /// Whether `buffer` names a live driver object. Deleted or never-bound
    /// handles answer `false`, mirroring the driver's own `is` semantics.
    pub fn is_buffer(&self, buffer: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_buffer", move |ctx| {
            match ctx.registry().lookup(buffer) {
                Ok(name) => ctx.driver().is_buffer(name),
                Err(_) => false,
            }
        })
    }

    pub fn bind_buffer(&self, target: GlEnum, buffer: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("bind_buffer", move |ctx| {
            let Some(name) = ctx.resolve("bind_buffer", buffer) else {
                return;
            };
            ctx.driver().bind_buffer(target, name);
        })
    }

    /// Upload buffer contents. The payload is copied into the work item;
    /// the caller's slice may be reclaimed as soon as this returns.
    pub fn buffer_data(
        &self,
        target: GlEnum,
        data: &[u8],
        usage: GlEnum,
    ) -> Result<(), RelayError> {
        let data = data.to_vec();
        self.queue.enqueue("buffer_data", move |ctx| {
            ctx.driver().buffer_data(target, data.len(), Some(&data), usage);
        })
    }

    /// Allocate `size` bytes of uninitialized buffer storage.
    pub fn buffer_data_size(
        &self,
        target: GlEnum,
        size: usize,
        usage: GlEnum,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("buffer_data_size", move |ctx| {
            ctx.driver().buffer_data(target, size, None, usage);
        })
    }

    pub fn buffer_sub_data(
        &self,
        target: GlEnum,
        offset: usize,
        data: &[u8],
    ) -> Result<(), RelayError> {
        let data = data.to_vec();
        self.queue.enqueue("buffer_sub_data", move |ctx| {
            ctx.driver().buffer_sub_data(target, offset, &data);
        })
    }

    pub fn get_buffer_parameter(
        &self,
        target: GlEnum,
        pname: GlEnum,
    ) -> Result<i32, RelayError> {
        self.queue.enqueue_blocking("get_buffer_parameter", move |ctx| {
            ctx.driver().get_buffer_parameter(target, pname)
        })
    }
}
