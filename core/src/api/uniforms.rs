//! Uniform and vertex attribute commands
//!
//! Uniform locations are plain driver integers (from
//! `get_uniform_location`), not registry handles, so most of these forward
//! directly.

use glrelay_common::GlEnum;

use super::forward_commands;
use crate::context::GlContext;
use crate::error::RelayError;

forward_commands! {
    uniform_1f(location: i32, x: f32) => uniform_1f;
    uniform_2f(location: i32, x: f32, y: f32) => uniform_2f;
    uniform_3f(location: i32, x: f32, y: f32, z: f32) => uniform_3f;
    uniform_4f(location: i32, x: f32, y: f32, z: f32, w: f32) => uniform_4f;
    uniform_1i(location: i32, x: i32) => uniform_1i;
    enable_vertex_attrib_array(index: u32) => enable_vertex_attrib_array;
    disable_vertex_attrib_array(index: u32) => disable_vertex_attrib_array;
    vertex_attrib_pointer(
        index: u32,
        size: i32,
        component_type: GlEnum,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) => vertex_attrib_pointer;
}

impl GlContext {
    /// Upload one or more column-major 4x4 matrices.
    pub fn uniform_matrix_4fv(
        &self,
        location: i32,
        transpose: bool,
        values: &[f32],
    ) -> Result<(), RelayError> {
        const OP: &str = "uniform_matrix_4fv";

        if values.is_empty() || values.len() % 16 != 0 {
            return Err(RelayError::InvalidArgument {
                op: OP,
                reason: format!("expected a multiple of 16 floats, got {}", values.len()),
            });
        }
        let values = values.to_vec();
        self.queue.enqueue(OP, move |ctx| {
            ctx.driver().uniform_matrix_4fv(location, transpose, &values);
        })
    }
}
