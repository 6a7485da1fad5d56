//! Texture object commands
//!
//! Image uploads copy their payload into the work item at enqueue time and
//! honor the context's flip-Y unpack option there too, so the render thread
//! receives rows already in driver order.

use glrelay_common::{GlEnum, ObjectHandle, pixels};

use super::forward_commands;
use crate::context::GlContext;
use crate::error::RelayError;

forward_commands! {
    tex_parameter_f(target: GlEnum, pname: GlEnum, param: f32) => tex_parameter_f;
    tex_parameter_i(target: GlEnum, pname: GlEnum, param: i32) => tex_parameter_i;
    generate_mipmap(target: GlEnum) => generate_mipmap;
}

impl GlContext {
    pub fn create_texture(&self) -> Result<ObjectHandle, RelayError> {
        let handle = self.registry.allocate();
        self.queue.enqueue("create_texture", move |ctx| {
            let name = ctx.driver().gen_texture();
            ctx.registry().bind(handle, name);
        })?;
        Ok(handle)
    }

    pub fn delete_texture(&self, texture: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("delete_texture", move |ctx| {
            if let Some(name) = ctx.registry().remove(texture) {
                ctx.driver().delete_texture(name);
            }
        })
    }

    pub fn is_texture(&self, texture: ObjectHandle) -> Result<bool, RelayError> {
        self.queue.enqueue_blocking("is_texture", move |ctx| {
            match ctx.registry().lookup(texture) {
                Ok(name) => ctx.driver().is_texture(name),
                Err(_) => false,
            }
        })
    }

    pub fn bind_texture(&self, target: GlEnum, texture: ObjectHandle) -> Result<(), RelayError> {
        self.queue.enqueue("bind_texture", move |ctx| {
            let Some(name) = ctx.resolve("bind_texture", texture) else {
                return;
            };
            ctx.driver().bind_texture(target, name);
        })
    }

    /// Specify a 2D texture image.
    ///
    /// `pixels: None` allocates uninitialized texture storage. With pixel
    /// data, the byte length must match the tightly packed
    /// `width * height * bytes_per_pixel` size; the payload is copied (and
    /// row-flipped when the flip-Y unpack option is set) before this
    /// returns.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &self,
        target: GlEnum,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: GlEnum,
        component_type: GlEnum,
        pixels: Option<&[u8]>,
    ) -> Result<(), RelayError> {
        const OP: &str = "tex_image_2d";

        let Some(source) = pixels else {
            return self.queue.enqueue(OP, move |ctx| {
                ctx.driver().tex_image_2d(
                    target,
                    level,
                    internal_format,
                    width,
                    height,
                    border,
                    format,
                    component_type,
                    None,
                );
            });
        };

        let data = self.unpack_image(OP, width, height, format, component_type, source)?;
        self.queue.enqueue(OP, move |ctx| {
            ctx.driver().tex_image_2d(
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                component_type,
                Some(&data),
            );
        })
    }

    /// Replace a rectangle of an existing texture image.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &self,
        target: GlEnum,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        component_type: GlEnum,
        pixels: &[u8],
    ) -> Result<(), RelayError> {
        const OP: &str = "tex_sub_image_2d";

        let data = self.unpack_image(OP, width, height, format, component_type, pixels)?;
        self.queue.enqueue(OP, move |ctx| {
            ctx.driver().tex_sub_image_2d(
                target,
                level,
                x_offset,
                y_offset,
                width,
                height,
                format,
                component_type,
                &data,
            );
        })
    }

    /// Validate an upload against its pixel layout, copy the payload out of
    /// caller-owned memory, and apply the flip-Y unpack option.
    fn unpack_image(
        &self,
        op: &'static str,
        width: i32,
        height: i32,
        format: GlEnum,
        component_type: GlEnum,
        source: &[u8],
    ) -> Result<Vec<u8>, RelayError> {
        if width < 0 || height < 0 {
            return Err(RelayError::InvalidArgument {
                op,
                reason: format!("negative dimensions {width}x{height}"),
            });
        }
        let pixel_bytes = pixels::bytes_per_pixel(component_type, format)
            .map_err(|source| RelayError::PixelData { op, source })?;
        let expected = width as usize * height as usize * pixel_bytes;
        if source.len() != expected {
            return Err(RelayError::InvalidArgument {
                op,
                reason: format!(
                    "pixel payload is {} bytes, expected {expected} for {width}x{height}",
                    source.len()
                ),
            });
        }

        let mut data = source.to_vec();
        if self.unpack_flip_y {
            pixels::flip_vertical(&mut data, width as usize * pixel_bytes, height as usize);
        }
        Ok(data)
    }
}
