//! Framebuffer object commands

use glrelay_common::{GlEnum, ObjectHandle, pixels};

use crate::context::GlContext;
use crate::error::RelayError;

impl GlContext {
    pub fn create_framebuffer(&self) -> Result<ObjectHandle, RelayError> {
        let handle = self.registry.allocate();
        self.queue.enqueue("create_framebuffer", move |ctx| {
            let name = ctx.driver().gen_framebuffer();
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    pub fn delete_framebuffer(&self, framebuffer: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_framebuffer", move |ctx| {
            if let Some(name) = ctx.registry().remove(framebuffer) {
                ctx.driver().delete_framebuffer(name);
            }
        })
    }

    pub fn is_framebuffer(&self, framebuffer: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_framebuffer", move |ctx| {
            match ctx.registry().lookup(framebuffer) {
                Ok(name) => ctx.driver().is_framebuffer(name),
                Err(_) => false,
            }
        })
    }

    /// Bind a framebuffer. Handle 0 deliberately rebinds the platform's
    /// default framebuffer rather than an application object.
    pub fn bind_framebuffer(
        &self,
        target: GlEnum,
        framebuffer: ObjectHandle,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("bind_framebuffer", move |ctx| {
            if framebuffer.is_none() {
                let default = ctx.default_framebuffer();
                ctx.driver().bind_framebuffer(target, default);
                return;
            }
            let Some(name) = ctx.resolve("bind_framebuffer", framebuffer) else {
                return;
            };
            ctx.driver().bind_framebuffer(target, name);
        })
    }

    pub fn framebuffer_renderbuffer(
        &self,
        target: GlEnum,
        attachment: GlEnum,
        renderbuffer_target: GlEnum,
        renderbuffer: ObjectHandle,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("framebuffer_renderbuffer", move |ctx| {
            let Some(name) = ctx.resolve("framebuffer_renderbuffer", renderbuffer) else {
                return;
            };
            ctx.driver()
                .framebuffer_renderbuffer(target, attachment, renderbuffer_target, name);
        })
    }

    pub fn framebuffer_texture_2d(
        &self,
        target: GlEnum,
        attachment: GlEnum,
        texture_target: GlEnum,
        texture: ObjectHandle,
        level: i32,
    ) -> Result<(), RelayError> {
        self.queue.enqueue("framebuffer_texture_2d", move |ctx| {
            let Some(name) = ctx.resolve("framebuffer_texture_2d", texture) else {
                return;
            };
            ctx.driver()
                .framebuffer_texture_2d(target, attachment, texture_target, name, level);
        })
    }

    pub fn check_framebuffer_status(&self, target: GlEnum) -> Result<GlEnum, RelayError> {
        self.queue.enqueue_blocking("check_framebuffer_status", move |ctx| {
            ctx.driver().check_framebuffer_status(target)
        })
    }

    /// Read back a rectangle of pixels from the bound framebuffer.
    ///
    /// Blocking: the submitting thread parks until the render thread has
    /// produced the bytes. The output length is `width * height *
    /// bytes_per_pixel(component_type, format)`.
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        component_type: GlEnum,
    ) -> Result<Vec<u8>, RelayError> {
        const OP: &str = "read_pixels";

        if width < 0 || height < 0 {
            return Err(RelayError::InvalidArgument {
                op: OP,
                reason: format!("negative dimensions {width}x{height}"),
            });
        }
        let pixel_bytes = pixels::bytes_per_pixel(component_type, format)
            .map_err(|source| RelayError::PixelData { op: OP, source })?;
        let byte_len = width as usize * height as usize * pixel_bytes;

        self.queue.enqueue_blocking(OP, move |ctx| {
            let mut dest = vec![0u8; byte_len];
            ctx.driver()
                .read_pixels(x, y, width, height, format, component_type, &mut dest);
            dest
        })
    }
}
