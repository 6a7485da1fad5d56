//! Viewing, clipping, and fixed-function state commands
//!
//! All forward-only: no handles, no payloads, no replies. The driver
//! validates the enum values itself; the bridge only guarantees ordering.

use glrelay_common::{GlEnum, glenum};
use tracing::warn;

use super::forward_commands;
use crate::context::GlContext;
use crate::error::RelayError;

forward_commands! {
    scissor(x: i32, y: i32, width: i32, height: i32) => scissor;
    viewport(x: i32, y: i32, width: i32, height: i32) => viewport;
    active_texture(unit: GlEnum) => active_texture;
    blend_color(red: f32, green: f32, blue: f32, alpha: f32) => blend_color;
    blend_equation(mode: GlEnum) => blend_equation;
    blend_func(sfactor: GlEnum, dfactor: GlEnum) => blend_func;
    blend_func_separate(
        src_rgb: GlEnum,
        dst_rgb: GlEnum,
        src_alpha: GlEnum,
        dst_alpha: GlEnum,
    ) => blend_func_separate;
    clear_color(red: f32, green: f32, blue: f32, alpha: f32) => clear_color;
    clear_depth(depth: f32) => clear_depth;
    clear_stencil(s: i32) => clear_stencil;
    color_mask(red: bool, green: bool, blue: bool, alpha: bool) => color_mask;
    cull_face(mode: GlEnum) => cull_face;
    depth_func(func: GlEnum) => depth_func;
    depth_mask(flag: bool) => depth_mask;
    depth_range(near: f32, far: f32) => depth_range;
    disable(cap: GlEnum) => disable;
    enable(cap: GlEnum) => enable;
    front_face(mode: GlEnum) => front_face;
    hint(target: GlEnum, mode: GlEnum) => hint;
    line_width(width: f32) => line_width;
    polygon_offset(factor: f32, units: f32) => polygon_offset;
    stencil_func(func: GlEnum, reference: i32, mask: u32) => stencil_func;
    stencil_mask(mask: u32) => stencil_mask;
    stencil_op(fail: GlEnum, zfail: GlEnum, zpass: GlEnum) => stencil_op;
}

impl GlContext {
    /// Set an unpack option.
    ///
    /// Only the flip-Y option is handled by the bridge itself: it is
    /// per-context state read at enqueue time of image uploads, never
    /// forwarded to the driver. Unsupported parameters are logged and
    /// ignored, matching the permissive behavior scripts expect.
    pub fn pixel_storei(&mut self, pname: GlEnum, param: i32) -> Result<(), RelayError> {
        match pname {
            glenum::UNPACK_FLIP_Y_WEBGL => {
                self.unpack_flip_y = param != 0;
                Ok(())
            }
            _ => {
                warn!("pixel_storei: unsupported parameter 0x{pname:04X}");
                Ok(())
            }
        }
    }
}
