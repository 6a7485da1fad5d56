//! Raw GL constants used across the bridge boundary
//!
//! The bridge passes GL enums through untouched: the adapter layer receives
//! them from the binding layer in driver-ready form and the driver consumes
//! them as-is. Only the constants the bridge itself inspects (pixel layout,
//! shader types, the unpack options) need names here; the rest are listed
//! for the convenience of binding layers and tests.

/// A raw GL enumerant.
pub type GlEnum = u32;

// Error codes (polled via get_error)
pub const NO_ERROR: GlEnum = 0;
pub const INVALID_ENUM: GlEnum = 0x0500;
pub const INVALID_VALUE: GlEnum = 0x0501;
pub const INVALID_OPERATION: GlEnum = 0x0502;
pub const OUT_OF_MEMORY: GlEnum = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: GlEnum = 0x0506;

// Capabilities
pub const CULL_FACE: GlEnum = 0x0B44;
pub const DEPTH_TEST: GlEnum = 0x0B71;
pub const STENCIL_TEST: GlEnum = 0x0B90;
pub const SCISSOR_TEST: GlEnum = 0x0C11;
pub const BLEND: GlEnum = 0x0BE2;

// Buffer targets and usage
pub const ARRAY_BUFFER: GlEnum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GlEnum = 0x8893;
pub const STREAM_DRAW: GlEnum = 0x88E0;
pub const STATIC_DRAW: GlEnum = 0x88E4;
pub const DYNAMIC_DRAW: GlEnum = 0x88E8;
pub const BUFFER_SIZE: GlEnum = 0x8764;
pub const BUFFER_USAGE: GlEnum = 0x8765;

// Framebuffers and renderbuffers
pub const FRAMEBUFFER: GlEnum = 0x8D40;
pub const RENDERBUFFER: GlEnum = 0x8D41;
pub const COLOR_ATTACHMENT0: GlEnum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GlEnum = 0x8D00;
pub const STENCIL_ATTACHMENT: GlEnum = 0x8D20;
pub const FRAMEBUFFER_COMPLETE: GlEnum = 0x8CD5;
pub const DEPTH_COMPONENT16: GlEnum = 0x81A5;

// Texture targets and parameters
pub const TEXTURE_2D: GlEnum = 0x0DE1;
pub const TEXTURE_CUBE_MAP: GlEnum = 0x8513;
pub const TEXTURE0: GlEnum = 0x84C0;
pub const TEXTURE_MAG_FILTER: GlEnum = 0x2800;
pub const TEXTURE_MIN_FILTER: GlEnum = 0x2801;
pub const TEXTURE_WRAP_S: GlEnum = 0x2802;
pub const TEXTURE_WRAP_T: GlEnum = 0x2803;
pub const NEAREST: GlEnum = 0x2600;
pub const LINEAR: GlEnum = 0x2601;
pub const CLAMP_TO_EDGE: GlEnum = 0x812F;

// Pixel formats
pub const DEPTH_COMPONENT: GlEnum = 0x1902;
pub const RED: GlEnum = 0x1903;
pub const ALPHA: GlEnum = 0x1906;
pub const RGB: GlEnum = 0x1907;
pub const RGBA: GlEnum = 0x1908;
pub const LUMINANCE: GlEnum = 0x1909;
pub const LUMINANCE_ALPHA: GlEnum = 0x190A;
pub const RG: GlEnum = 0x8227;
pub const RG_INTEGER: GlEnum = 0x8228;
pub const DEPTH_STENCIL: GlEnum = 0x84F9;
pub const RED_INTEGER: GlEnum = 0x8D94;
pub const RGB_INTEGER: GlEnum = 0x8D98;
pub const RGBA_INTEGER: GlEnum = 0x8D99;

// Pixel component types
pub const BYTE: GlEnum = 0x1400;
pub const UNSIGNED_BYTE: GlEnum = 0x1401;
pub const SHORT: GlEnum = 0x1402;
pub const UNSIGNED_SHORT: GlEnum = 0x1403;
pub const INT: GlEnum = 0x1404;
pub const UNSIGNED_INT: GlEnum = 0x1405;
pub const FLOAT: GlEnum = 0x1406;
pub const HALF_FLOAT: GlEnum = 0x140B;
pub const UNSIGNED_SHORT_4_4_4_4: GlEnum = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: GlEnum = 0x8034;
pub const UNSIGNED_SHORT_5_6_5: GlEnum = 0x8363;
pub const UNSIGNED_INT_24_8: GlEnum = 0x84FA;

// Shaders and programs
pub const FRAGMENT_SHADER: GlEnum = 0x8B30;
pub const VERTEX_SHADER: GlEnum = 0x8B31;
pub const SHADER_TYPE: GlEnum = 0x8B4F;
pub const DELETE_STATUS: GlEnum = 0x8B80;
pub const COMPILE_STATUS: GlEnum = 0x8B81;
pub const LINK_STATUS: GlEnum = 0x8B82;
pub const VALIDATE_STATUS: GlEnum = 0x8B83;
pub const INFO_LOG_LENGTH: GlEnum = 0x8B84;
pub const ATTACHED_SHADERS: GlEnum = 0x8B85;

// Draw primitives
pub const POINTS: GlEnum = 0x0000;
pub const LINES: GlEnum = 0x0001;
pub const TRIANGLES: GlEnum = 0x0004;
pub const TRIANGLE_STRIP: GlEnum = 0x0005;
pub const TRIANGLE_FAN: GlEnum = 0x0006;

// Pixel store parameters
pub const UNPACK_ALIGNMENT: GlEnum = 0x0CF5;
pub const PACK_ALIGNMENT: GlEnum = 0x0D05;

// WebGL-only pixel store parameters: handled by the bridge itself, never
// forwarded to the driver.
pub const UNPACK_FLIP_Y_WEBGL: GlEnum = 0x9240;
pub const UNPACK_PREMULTIPLY_ALPHA_WEBGL: GlEnum = 0x9241;
pub const UNPACK_COLORSPACE_CONVERSION_WEBGL: GlEnum = 0x9243;

// Queryable state
pub const MAX_TEXTURE_SIZE: GlEnum = 0x0D33;
pub const VENDOR: GlEnum = 0x1F00;
pub const RENDERER: GlEnum = 0x1F01;
pub const VERSION: GlEnum = 0x1F02;
