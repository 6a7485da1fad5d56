//! Renderbuffer object commands

use glrelay_common::{GlEnum, ObjectHandle};

use crate::context::GlContext;
use crate::error::RelayError;

impl GlContext {
    pub fn create_renderbuffer(&self) -> Result<ObjectHandle, RelayError> {
        let handle = self.registry.allocate();
        self.queue.enqueue("create_renderbuffer", move |ctx| {
            let name = ctx.driver().gen_renderbuffer();
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    pub fn delete_renderbuffer(&self, renderbuffer: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_renderbuffer", move |ctx| {
            if let Some(name) = ctx.registry().remove(renderbuffer) {
                ctx.driver().delete_renderbuffer(name);
            }
        })
    }

    pub fn is_renderbuffer(&self, renderbuffer: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_renderbuffer", move |ctx| {
            match ctx.registry().lookup(renderbuffer) {
                Ok(name) => ctx.driver().is_renderbuffer(name),
                Err(_) => false,
            }
        })
    }

    pub fn bind_renderbuffer(
        &self,
        target: GlEnum,
        renderbuffer: ObjectHandle,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("bind_renderbuffer", move |ctx| {
            let Some(name) = ctx.resolve("bind_renderbuffer", renderbuffer) else {
                return;
            };
            ctx.driver().bind_renderbuffer(target, name);
        })
    }

    pub fn renderbuffer_storage(
        &self,
        target: GlEnum,
        internal_format: GlEnum,
        width: i32,
        height: i32,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("renderbuffer_storage", move |ctx| {
            ctx.driver()
                .renderbuffer_storage(target, internal_format, width, height);
        })
    }
}
