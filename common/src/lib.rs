//! Shared types and utilities for the glrelay GL command bridge
//!
//! This crate provides the vocabulary shared between:
//! - `glrelay-core` (the command batching/dispatch engine)
//! - binding layers that marshal scripting values into bridge calls
//!
//! # Modules
//!
//! - [`glenum`] - Raw GL constants used across the bridge boundary
//! - [`handle`] - Caller-visible object handles
//! - [`pixels`] - Pixel layout accounting and row flipping

pub mod glenum;
pub mod handle;
pub mod pixels;

pub use glenum::GlEnum;
pub use handle::{NativeName, ObjectHandle};
pub use pixels::{ComponentType, PixelDataError, PixelFormat, bytes_per_pixel, flip_vertical};
