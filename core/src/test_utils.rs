//! Shared test utilities for unit tests
//!
//! [`RecordingDriver`] is the scripted stand-in for a live driver: it logs
//! every entry point it receives, in call order, and hands out predictable
//! object names starting at 100. Tests keep a clone of the log handle and
//! assert on it after the render thread has drained.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use glrelay_common::{GlEnum, NativeName, glenum};

use crate::driver::GlDriver;

/// Shared, order-preserving call log.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct RecordingDriver {
    log: CallLog,
    next_name: NativeName,
    queued_errors: VecDeque<GlEnum>,
    enabled: HashSet<GlEnum>,
    attachments: Vec<(NativeName, NativeName)>,
}

impl RecordingDriver {
    pub fn new() -> (Self, CallLog) {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                log: log.clone(),
                next_name: 100,
                queued_errors: VecDeque::new(),
                enabled: HashSet::new(),
                attachments: Vec::new(),
            },
            log,
        )
    }

    /// Queue an error code for a later `get_error` poll.
    pub fn push_error(&mut self, error: GlEnum) {
        self.queued_errors.push_back(error);
    }

    fn record(&self, entry: String) {
        self.log.lock().unwrap().push(entry);
    }

    fn fresh_name(&mut self) -> NativeName {
        let name = self.next_name;
        self.next_name += 1;
        name
    }
}

impl GlDriver for RecordingDriver {
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(format!("scissor({x}, {y}, {width}, {height})"));
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.record(format!("viewport({x}, {y}, {width}, {height})"));
    }

    fn active_texture(&mut self, unit: GlEnum) {
        self.record(format!("active_texture({unit})"));
    }

    fn blend_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(format!("blend_color({red}, {green}, {blue}, {alpha})"));
    }

    fn blend_equation(&mut self, mode: GlEnum) {
        self.record(format!("blend_equation({mode})"));
    }

    fn blend_func(&mut self, sfactor: GlEnum, dfactor: GlEnum) {
        self.record(format!("blend_func({sfactor}, {dfactor})"));
    }

    fn blend_func_separate(
        &mut self,
        src_rgb: GlEnum,
        dst_rgb: GlEnum,
        src_alpha: GlEnum,
        dst_alpha: GlEnum,
    ) {
        self.record(format!(
            "blend_func_separate({src_rgb}, {dst_rgb}, {src_alpha}, {dst_alpha})"
        ));
    }

    fn clear_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(format!("clear_color({red}, {green}, {blue}, {alpha})"));
    }

    fn clear_depth(&mut self, depth: f32) {
        self.record(format!("clear_depth({depth})"));
    }

    fn clear_stencil(&mut self, s: i32) {
        self.record(format!("clear_stencil({s})"));
    }

    fn color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.record(format!("color_mask({red}, {green}, {blue}, {alpha})"));
    }

    fn cull_face(&mut self, mode: GlEnum) {
        self.record(format!("cull_face({mode})"));
    }

    fn depth_func(&mut self, func: GlEnum) {
        self.record(format!("depth_func({func})"));
    }

    fn depth_mask(&mut self, flag: bool) {
        self.record(format!("depth_mask({flag})"));
    }

    fn depth_range(&mut self, near: f32, far: f32) {
        self.record(format!("depth_range({near}, {far})"));
    }

    fn disable(&mut self, cap: GlEnum) {
        self.enabled.remove(&cap);
        self.record(format!("disable({cap})"));
    }

    fn enable(&mut self, cap: GlEnum) {
        self.enabled.insert(cap);
        self.record(format!("enable({cap})"));
    }

    fn front_face(&mut self, mode: GlEnum) {
        self.record(format!("front_face({mode})"));
    }

    fn hint(&mut self, target: GlEnum, mode: GlEnum) {
        self.record(format!("hint({target}, {mode})"));
    }

    fn line_width(&mut self, width: f32) {
        self.record(format!("line_width({width})"));
    }

    fn polygon_offset(&mut self, factor: f32, units: f32) {
        self.record(format!("polygon_offset({factor}, {units})"));
    }

    fn stencil_func(&mut self, func: GlEnum, reference: i32, mask: u32) {
        self.record(format!("stencil_func({func}, {reference}, {mask})"));
    }

    fn stencil_mask(&mut self, mask: u32) {
        self.record(format!("stencil_mask({mask})"));
    }

    fn stencil_op(&mut self, fail: GlEnum, zfail: GlEnum, zpass: GlEnum) {
        self.record(format!("stencil_op({fail}, {zfail}, {zpass})"));
    }

    fn is_enabled(&mut self, cap: GlEnum) -> bool {
        self.record(format!("is_enabled({cap})"));
        self.enabled.contains(&cap)
    }

    fn get_error(&mut self) -> GlEnum {
        self.record("get_error()".into());
        self.queued_errors.pop_front().unwrap_or(glenum::NO_ERROR)
    }

    fn get_integer(&mut self, pname: GlEnum) -> i32 {
        self.record(format!("get_integer({pname})"));
        match pname {
            glenum::MAX_TEXTURE_SIZE => 4096,
            _ => 0,
        }
    }

    fn get_float(&mut self, pname: GlEnum) -> f32 {
        self.record(format!("get_float({pname})"));
        1.0
    }

    fn get_string(&mut self, pname: GlEnum) -> String {
        self.record(format!("get_string({pname})"));
        "RecordingDriver".into()
    }

    fn clear(&mut self, mask: u32) {
        self.record(format!("clear({mask})"));
    }

    fn draw_arrays(&mut self, mode: GlEnum, first: i32, count: i32) {
        self.record(format!("draw_arrays({mode}, {first}, {count})"));
    }

    fn draw_elements(&mut self, mode: GlEnum, count: i32, component_type: GlEnum, offset: usize) {
        self.record(format!(
            "draw_elements({mode}, {count}, {component_type}, {offset})"
        ));
    }

    fn flush(&mut self) {
        self.record("flush()".into());
    }

    fn finish(&mut self) {
        self.record("finish()".into());
    }

    fn gen_buffer(&mut self) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("gen_buffer() -> {name}"));
        name
    }

    fn delete_buffer(&mut self, name: NativeName) {
        self.record(format!("delete_buffer({name})"));
    }

    fn is_buffer(&mut self, name: NativeName) -> bool {
        self.record(format!("is_buffer({name})"));
        name != 0
    }

    fn bind_buffer(&mut self, target: GlEnum, name: NativeName) {
        self.record(format!("bind_buffer({target}, {name})"));
    }

    fn buffer_data(&mut self, target: GlEnum, size: usize, data: Option<&[u8]>, usage: GlEnum) {
        self.record(format!("buffer_data({target}, {size}, {data:?}, {usage})"));
    }

    fn buffer_sub_data(&mut self, target: GlEnum, offset: usize, data: &[u8]) {
        self.record(format!("buffer_sub_data({target}, {offset}, {data:?})"));
    }

    fn get_buffer_parameter(&mut self, target: GlEnum, pname: GlEnum) -> i32 {
        self.record(format!("get_buffer_parameter({target}, {pname})"));
        match pname {
            glenum::BUFFER_SIZE => 64,
            _ => 0,
        }
    }

    fn gen_framebuffer(&mut self) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("gen_framebuffer() -> {name}"));
        name
    }

    fn delete_framebuffer(&mut self, name: NativeName) {
        self.record(format!("delete_framebuffer({name})"));
    }

    fn is_framebuffer(&mut self, name: NativeName) -> bool {
        self.record(format!("is_framebuffer({name})"));
        name != 0
    }

    fn bind_framebuffer(&mut self, target: GlEnum, name: NativeName) {
        self.record(format!("bind_framebuffer({target}, {name})"));
    }

    fn framebuffer_renderbuffer(
        &mut self,
        target: GlEnum,
        attachment: GlEnum,
        renderbuffer_target: GlEnum,
        name: NativeName,
    ) {
        self.record(format!(
            "framebuffer_renderbuffer({target}, {attachment}, {renderbuffer_target}, {name})"
        ));
    }

    fn framebuffer_texture_2d(
        &mut self,
        target: GlEnum,
        attachment: GlEnum,
        texture_target: GlEnum,
        name: NativeName,
        level: i32,
    ) {
        self.record(format!(
            "framebuffer_texture_2d({target}, {attachment}, {texture_target}, {name}, {level})"
        ));
    }

    fn check_framebuffer_status(&mut self, target: GlEnum) -> GlEnum {
        self.record(format!("check_framebuffer_status({target})"));
        glenum::FRAMEBUFFER_COMPLETE
    }

    fn read_pixels(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GlEnum,
        component_type: GlEnum,
        dest: &mut [u8],
    ) {
        self.record(format!(
            "read_pixels({x}, {y}, {width}, {height}, {format}, {component_type}, {} bytes)",
            dest.len()
        ));
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = i as u8;
        }
    }

    fn gen_renderbuffer(&mut self) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("gen_renderbuffer() -> {name}"));
        name
    }

    fn delete_renderbuffer(&mut self, name: NativeName) {
        self.record(format!("delete_renderbuffer({name})"));
    }

    fn is_renderbuffer(&mut self, name: NativeName) -> bool {
        self.record(format!("is_renderbuffer({name})"));
        name != 0
    }

    fn bind_renderbuffer(&mut self, target: GlEnum, name: NativeName) {
        self.record(format!("bind_renderbuffer({target}, {name})"));
    }

    fn renderbuffer_storage(
        &mut self,
        target: GlEnum,
        internal_format: GlEnum,
        width: i32,
        height: i32,
    ) {
        self.record(format!(
            "renderbuffer_storage({target}, {internal_format}, {width}, {height})"
        ));
    }

    fn gen_texture(&mut self) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("gen_texture() -> {name}"));
        name
    }

    fn delete_texture(&mut self, name: NativeName) {
        self.record(format!("delete_texture({name})"));
    }

    fn is_texture(&mut self, name: NativeName) -> bool {
        self.record(format!("is_texture({name})"));
        name != 0
    }

    fn bind_texture(&mut self, target: GlEnum, name: NativeName) {
        self.record(format!("bind_texture({target}, {name})"));
    }

    fn tex_parameter_f(&mut self, target: GlEnum, pname: GlEnum, param: f32) {
        self.record(format!("tex_parameter_f({target}, {pname}, {param})"));
    }

    fn tex_parameter_i(&mut self, target: GlEnum, pname: GlEnum, param: i32) {
        self.record(format!("tex_parameter_i({target}, {pname}, {param})"));
    }

    fn generate_mipmap(&mut self, target: GlEnum) {
        self.record(format!("generate_mipmap({target})"));
    }

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
    ) {
        self.record(format!(
            "tex_image_2d({target}, {level}, {internal_format}, {width}x{height}, {border}, \
             {format}, {component_type}, {pixels:?})"
        ));
    }

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
    ) {
        self.record(format!(
            "tex_sub_image_2d({target}, {level}, {x_offset}, {y_offset}, {width}x{height}, \
             {format}, {component_type}, {pixels:?})"
        ));
    }

    fn create_program(&mut self) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("create_program() -> {name}"));
        name
    }

    fn create_shader(&mut self, shader_type: GlEnum) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("create_shader({shader_type}) -> {name}"));
        name
    }

    fn delete_program(&mut self, name: NativeName) {
        self.record(format!("delete_program({name})"));
    }

    fn delete_shader(&mut self, name: NativeName) {
        self.record(format!("delete_shader({name})"));
    }

    fn is_program(&mut self, name: NativeName) -> bool {
        self.record(format!("is_program({name})"));
        name != 0
    }

    fn is_shader(&mut self, name: NativeName) -> bool {
        self.record(format!("is_shader({name})"));
        name != 0
    }

    fn attach_shader(&mut self, program: NativeName, shader: NativeName) {
        self.attachments.push((program, shader));
        self.record(format!("attach_shader({program}, {shader})"));
    }

    fn detach_shader(&mut self, program: NativeName, shader: NativeName) {
        self.attachments
            .retain(|&(p, s)| p != program || s != shader);
        self.record(format!("detach_shader({program}, {shader})"));
    }

    fn shader_source(&mut self, shader: NativeName, source: &str) {
        self.record(format!("shader_source({shader}, {} bytes)", source.len()));
    }

    fn compile_shader(&mut self, shader: NativeName) {
        self.record(format!("compile_shader({shader})"));
    }

    fn link_program(&mut self, program: NativeName) {
        self.record(format!("link_program({program})"));
    }

    fn use_program(&mut self, name: NativeName) {
        self.record(format!("use_program({name})"));
    }

    fn validate_program(&mut self, name: NativeName) {
        self.record(format!("validate_program({name})"));
    }

    fn bind_attrib_location(&mut self, program: NativeName, index: u32, name: &str) {
        self.record(format!("bind_attrib_location({program}, {index}, {name})"));
    }

    fn get_shader_parameter(&mut self, shader: NativeName, pname: GlEnum) -> i32 {
        self.record(format!("get_shader_parameter({shader}, {pname})"));
        1
    }

    fn get_program_parameter(&mut self, program: NativeName, pname: GlEnum) -> i32 {
        self.record(format!("get_program_parameter({program}, {pname})"));
        match pname {
            glenum::ATTACHED_SHADERS => self
                .attachments
                .iter()
                .filter(|&&(p, _)| p == program)
                .count() as i32,
            _ => 1,
        }
    }

    fn get_shader_info_log(&mut self, shader: NativeName) -> String {
        self.record(format!("get_shader_info_log({shader})"));
        "ok".into()
    }

    fn get_program_info_log(&mut self, program: NativeName) -> String {
        self.record(format!("get_program_info_log({program})"));
        "ok".into()
    }

    fn get_attached_shaders(&mut self, program: NativeName) -> Vec<NativeName> {
        self.record(format!("get_attached_shaders({program})"));
        self.attachments
            .iter()
            .filter(|&&(p, _)| p == program)
            .map(|&(_, s)| s)
            .collect()
    }

    fn get_uniform_location(&mut self, program: NativeName, name: &str) -> i32 {
        self.record(format!("get_uniform_location({program}, {name})"));
        7
    }

    fn get_attrib_location(&mut self, program: NativeName, name: &str) -> i32 {
        self.record(format!("get_attrib_location({program}, {name})"));
        3
    }

    fn uniform_1f(&mut self, location: i32, x: f32) {
        self.record(format!("uniform_1f({location}, {x})"));
    }

    fn uniform_2f(&mut self, location: i32, x: f32, y: f32) {
        self.record(format!("uniform_2f({location}, {x}, {y})"));
    }

    fn uniform_3f(&mut self, location: i32, x: f32, y: f32, z: f32) {
        self.record(format!("uniform_3f({location}, {x}, {y}, {z})"));
    }

    fn uniform_4f(&mut self, location: i32, x: f32, y: f32, z: f32, w: f32) {
        self.record(format!("uniform_4f({location}, {x}, {y}, {z}, {w})"));
    }

    fn uniform_1i(&mut self, location: i32, x: i32) {
        self.record(format!("uniform_1i({location}, {x})"));
    }

    fn uniform_matrix_4fv(&mut self, location: i32, transpose: bool, values: &[f32]) {
        self.record(format!(
            "uniform_matrix_4fv({location}, {transpose}, {} floats)",
            values.len()
        ));
    }

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        component_type: GlEnum,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        self.record(format!(
            "vertex_attrib_pointer({index}, {size}, {component_type}, {normalized}, {stride}, {offset})"
        ));
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.record(format!("enable_vertex_attrib_array({index})"));
    }

    fn disable_vertex_attrib_array(&mut self, index: u32) {
        self.record(format!("disable_vertex_attrib_array({index})"));
    }

    fn gen_vertex_array(&mut self) -> NativeName {
        let name = self.fresh_name();
        self.record(format!("gen_vertex_array() -> {name}"));
        name
    }

    fn delete_vertex_array(&mut self, name: NativeName) {
        self.record(format!("delete_vertex_array({name})"));
    }

    fn is_vertex_array(&mut self, name: NativeName) -> bool {
        self.record(format!("is_vertex_array({name})"));
        name != 0
    }

    fn bind_vertex_array(&mut self, name: NativeName) {
        self.record(format!("bind_vertex_array({name})"));
    }
}
