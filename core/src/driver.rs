//! The consumed driver boundary
//!
//! A conventional immediate-mode GL surface: create/bind/delete/parameter/
//! upload/draw entry points operating on native object names and raw GL
//! enums. Implementations wrap a live driver context and are only ever
//! called from the render thread, which owns the context for its whole
//! lifetime. Errors are not thrown; the driver keeps its own error state,
//! polled through [`GlDriver::get_error`].
//!
//! The bridge ships no concrete driver. Embedders provide the binding to
//! their platform's GL loader; tests drive a scripted implementation.

use glrelay_common::{GlEnum, NativeName};

/// One GL driver context, owned and called exclusively by the render thread.
#[allow(clippy::too_many_arguments)]
pub trait GlDriver: Send {
    // Viewing and clipping
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    // Fixed-function state
    fn active_texture(&mut self, unit: GlEnum);
    fn blend_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32);
    fn blend_equation(&mut self, mode: GlEnum);
    fn blend_func(&mut self, sfactor: GlEnum, dfactor: GlEnum);
    fn blend_func_separate(
        &mut self,
        src_rgb: GlEnum,
        dst_rgb: GlEnum,
        src_alpha: GlEnum,
        dst_alpha: GlEnum,
    );
    fn clear_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear_depth(&mut self, depth: f32);
    fn clear_stencil(&mut self, s: i32);
    fn color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool);
    fn cull_face(&mut self, mode: GlEnum);
    fn depth_func(&mut self, func: GlEnum);
    fn depth_mask(&mut self, flag: bool);
    fn depth_range(&mut self, near: f32, far: f32);
    fn disable(&mut self, cap: GlEnum);
    fn enable(&mut self, cap: GlEnum);
    fn front_face(&mut self, mode: GlEnum);
    fn hint(&mut self, target: GlEnum, mode: GlEnum);
    fn line_width(&mut self, width: f32);
    fn polygon_offset(&mut self, factor: f32, units: f32);
    fn stencil_func(&mut self, func: GlEnum, reference: i32, mask: u32);
    fn stencil_mask(&mut self, mask: u32);
    fn stencil_op(&mut self, fail: GlEnum, zfail: GlEnum, zpass: GlEnum);

    // State queries (polled)
    fn is_enabled(&mut self, cap: GlEnum) -> bool;
    fn get_error(&mut self) -> GlEnum;
    fn get_integer(&mut self, pname: GlEnum) -> i32;
    fn get_float(&mut self, pname: GlEnum) -> f32;
    fn get_string(&mut self, pname: GlEnum) -> String;

    // Clearing and drawing
    fn clear(&mut self, mask: u32);
    fn draw_arrays(&mut self, mode: GlEnum, first: i32, count: i32);
    fn draw_elements(&mut self, mode: GlEnum, count: i32, component_type: GlEnum, offset: usize);
    fn flush(&mut self);
    fn finish(&mut self);

    // Buffer objects
    fn gen_buffer(&mut self) -> NativeName;
    fn delete_buffer(&mut self, name: NativeName);
    fn is_buffer(&mut self, name: NativeName) -> bool;
    fn bind_buffer(&mut self, target: GlEnum, name: NativeName);
    fn buffer_data(&mut self, target: GlEnum, size: usize, data: Option<&[u8]>, usage: GlEnum);
    fn buffer_sub_data(&mut self, target: GlEnum, offset: usize, data: &[u8]);
    fn get_buffer_parameter(&mut self, target: GlEnum, pname: GlEnum) -> i32;

    // Framebuffer objects
    fn gen_framebuffer(&mut self) -> NativeName;
    fn delete_framebuffer(&mut self, name: NativeName);
    fn is_framebuffer(&mut self, name: NativeName) -> bool;
    fn bind_framebuffer(&mut self, target: GlEnum, name: NativeName);
    fn framebuffer_renderbuffer(
        &mut self,
        target: GlEnum,
        attachment: GlEnum,
        renderbuffer_target: GlEnum,
        name: NativeName,
    );
    fn framebuffer_texture_2d(
        &mut self,
        target: GlEnum,
        attachment: GlEnum,
        texture_target: GlEnum,
        name: NativeName,
        level: i32,
    );
    fn check_framebuffer_status(&mut self, target: GlEnum) -> GlEnum;
    fn read_pixels(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        component_type: GlEnum,
        dest: &mut [u8],
    );

    // Renderbuffer objects
    fn gen_renderbuffer(&mut self) -> NativeName;
    fn delete_renderbuffer(&mut self, name: NativeName);
    fn is_renderbuffer(&mut self, name: NativeName) -> bool;
    fn bind_renderbuffer(&mut self, target: GlEnum, name: NativeName);
    fn renderbuffer_storage(
        &mut self,
        target: GlEnum,
        internal_format: GlEnum,
        width: i32,
        height: i32,
    );

    // Texture objects
    fn gen_texture(&mut self) -> NativeName;
    fn delete_texture(&mut self, name: NativeName);
    fn is_texture(&mut self, name: NativeName) -> bool;
    fn bind_texture(&mut self, target: GlEnum, name: NativeName);
    fn tex_parameter_f(&mut self, target: GlEnum, pname: GlEnum, param: f32);
    fn tex_parameter_i(&mut self, target: GlEnum, pname: GlEnum, param: i32);
    fn generate_mipmap(&mut self, target: GlEnum);
    fn tex_image_2d(
        &mut self,
        target: GlEnum,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: GlEnum,
        component_type: GlEnum,
        pixels: Option<&[u8]>,
    );
    fn tex_sub_image_2d(
        &mut self,
        target: GlEnum,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        component_type: GlEnum,
        pixels: &[u8],
    );

    // Shaders and programs
    fn create_program(&mut self) -> NativeName;
    fn create_shader(&mut self, shader_type: GlEnum) -> NativeName;
    fn delete_program(&mut self, name: NativeName);
    fn delete_shader(&mut self, name: NativeName);
    fn is_program(&mut self, name: NativeName) -> bool;
    fn is_shader(&mut self, name: NativeName) -> bool;
    fn attach_shader(&mut self, program: NativeName, shader: NativeName);
    fn detach_shader(&mut self, program: NativeName, shader: NativeName);
    fn shader_source(&mut self, shader: NativeName, source: &str);
    fn compile_shader(&mut self, shader: NativeName);
    fn link_program(&mut self, program: NativeName);
    fn use_program(&mut self, name: NativeName);
    fn validate_program(&mut self, name: NativeName);
    fn bind_attrib_location(&mut self, program: NativeName, index: u32, name: &str);
    fn get_shader_parameter(&mut self, shader: NativeName, pname: GlEnum) -> i32;
    fn get_program_parameter(&mut self, program: NativeName, pname: GlEnum) -> i32;
    fn get_shader_info_log(&mut self, shader: NativeName) -> String;
    fn get_program_info_log(&mut self, program: NativeName) -> String;
    fn get_attached_shaders(&mut self, program: NativeName) -> Vec<NativeName>;
    fn get_uniform_location(&mut self, program: NativeName, name: &str) -> i32;
    fn get_attrib_location(&mut self, program: NativeName, name: &str) -> i32;

    // Uniforms and vertex attributes
    fn uniform_1f(&mut self, location: i32, x: f32);
    fn uniform_2f(&mut self, location: i32, x: f32, y: f32);
    fn uniform_3f(&mut self, location: i32, x: f32, y: f32, z: f32);
    fn uniform_4f(&mut self, location: i32, x: f32, y: f32, z: f32, w: f32);
    fn uniform_1i(&mut self, location: i32, x: i32);
    fn uniform_matrix_4fv(&mut self, location: i32, transpose: bool, values: &[f32]);
    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        component_type: GlEnum,
        normalized: bool,
        stride: i32,
        offset: usize,
    );
    fn enable_vertex_attrib_array(&mut self, index: u32);
    fn disable_vertex_attrib_array(&mut self, index: u32);

    // Vertex array objects
    fn gen_vertex_array(&mut self) -> NativeName;
    fn delete_vertex_array(&mut self, name: NativeName);
    fn is_vertex_array(&mut self, name: NativeName) -> bool;
    fn bind_vertex_array(&mut self, name: NativeName);
}
