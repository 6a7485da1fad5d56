//! Vertex array object commands

use glrelay_common::ObjectHandle;

use crate::context::GlContext;
use crate::error::RelayError;

impl GlContext {
    pub fn create_vertex_array(&self) -> Result<ObjectHandle, RelayError> {
        let handle = self.registry.allocate();
        self.queue.enqueue("create_vertex_array", move |ctx| {
            let name = ctx.driver().gen_vertex_array();
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    pub fn delete_vertex_array(&self, vertex_array: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_vertex_array", move |ctx| {
            if let Some(name) = ctx.registry().remove(vertex_array) {
                ctx.driver().delete_vertex_array(name);
            }
        })
    }

    pub fn is_vertex_array(&self, vertex_array: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_vertex_array", move |ctx| {
            match ctx.registry().lookup(vertex_array) {
                Ok(name) => ctx.driver().is_vertex_array(name),
                Err(_) => false,
            }
        })
    }

    /// Bind a vertex array. Handle 0 restores the default vertex array.
    pub fn bind_vertex_array(&self, vertex_array: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("bind_vertex_array", move |ctx| {
            let Some(name) = ctx.resolve("bind_vertex_array", vertex_array) else {
                return;
            };
            ctx.driver().bind_vertex_array(name);
        })
    }
}
