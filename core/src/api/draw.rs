//! Clearing and drawing commands
//!
//! Draw calls source their data from bound buffer objects, so they carry
//! only value arguments and forward directly.

use glrelay_common::GlEnum;

use super::forward_commands;

forward_commands! {
    clear(mask: u32) => clear;
    draw_arrays(mode: GlEnum, first: i32, count: i32) => draw_arrays;
    draw_elements(mode: GlEnum, count: i32, component_type: GlEnum, offset: usize) => draw_elements;
    flush() => flush;
    finish() => finish;
}
