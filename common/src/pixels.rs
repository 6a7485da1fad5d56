//! Pixel layout accounting and row flipping
//!
//! Image uploads and readbacks need to know how many bytes one pixel
//! occupies for a given (component type, format) pair, and uploads honoring
//! the flip-Y unpack option need an in-place vertical flip. Both helpers are
//! pure and shared with binding layers that size their own staging buffers.

use thiserror::Error;

use crate::glenum::{self, GlEnum};

/// Error raised for pixel layouts the bridge does not understand.
///
/// These are programming errors at the adapter boundary, surfaced
/// synchronously before anything is enqueued. There is deliberately no
/// fallback size: an unknown pair must fail, not default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelDataError {
    #[error("unrecognized pixel component type 0x{0:04X}")]
    UnknownComponentType(u32),
    #[error("unrecognized pixel format 0x{0:04X}")]
    UnknownFormat(u32),
    #[error("component type 0x{component_type:04X} cannot be paired with format 0x{format:04X}")]
    IncompatiblePair { component_type: u32, format: u32 },
}

/// Per-component storage type of a pixel transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Float,
    HalfFloat,
    /// Packed 16-bit pixel, RGB only.
    UnsignedShort565,
    /// Packed 16-bit pixel, RGBA only.
    UnsignedShort4444,
    /// Packed 16-bit pixel, RGBA only.
    UnsignedShort5551,
    /// Packed 32-bit depth/stencil pixel.
    UnsignedInt248,
}

impl ComponentType {
    pub fn from_raw(raw: GlEnum) -> Option<Self> {
        match raw {
            glenum::BYTE => Some(Self::Byte),
            glenum::UNSIGNED_BYTE => Some(Self::UnsignedByte),
            glenum::SHORT => Some(Self::Short),
            glenum::UNSIGNED_SHORT => Some(Self::UnsignedShort),
            glenum::INT => Some(Self::Int),
            glenum::UNSIGNED_INT => Some(Self::UnsignedInt),
            glenum::FLOAT => Some(Self::Float),
            glenum::HALF_FLOAT => Some(Self::HalfFloat),
            glenum::UNSIGNED_SHORT_5_6_5 => Some(Self::UnsignedShort565),
            glenum::UNSIGNED_SHORT_4_4_4_4 => Some(Self::UnsignedShort4444),
            glenum::UNSIGNED_SHORT_5_5_5_1 => Some(Self::UnsignedShort5551),
            glenum::UNSIGNED_INT_24_8 => Some(Self::UnsignedInt248),
            _ => None,
        }
    }

    /// Whole-pixel byte size for packed types, `None` for per-component types.
    fn packed_pixel_bytes(self) -> Option<usize> {
        match self {
            Self::UnsignedShort565 | Self::UnsignedShort4444 | Self::UnsignedShort5551 => Some(2),
            Self::UnsignedInt248 => Some(4),
            _ => None,
        }
    }
}

/// Channel layout of a pixel transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Alpha,
    Luminance,
    LuminanceAlpha,
    Red,
    RedInteger,
    Rg,
    RgInteger,
    Rgb,
    RgbInteger,
    Rgba,
    RgbaInteger,
    DepthComponent,
    DepthStencil,
}

impl PixelFormat {
    pub fn from_raw(raw: GlEnum) -> Option<Self> {
        match raw {
            glenum::ALPHA => Some(Self::Alpha),
            glenum::LUMINANCE => Some(Self::Luminance),
            glenum::LUMINANCE_ALPHA => Some(Self::LuminanceAlpha),
            glenum::RED => Some(Self::Red),
            glenum::RED_INTEGER => Some(Self::RedInteger),
            glenum::RG => Some(Self::Rg),
            glenum::RG_INTEGER => Some(Self::RgInteger),
            glenum::RGB => Some(Self::Rgb),
            glenum::RGB_INTEGER => Some(Self::RgbInteger),
            glenum::RGBA => Some(Self::Rgba),
            glenum::RGBA_INTEGER => Some(Self::RgbaInteger),
            glenum::DEPTH_COMPONENT => Some(Self::DepthComponent),
            glenum::DEPTH_STENCIL => Some(Self::DepthStencil),
            _ => None,
        }
    }

    fn channels(self) -> usize {
        match self {
            Self::Alpha | Self::Luminance | Self::Red | Self::RedInteger | Self::DepthComponent => {
                1
            }
            Self::LuminanceAlpha | Self::Rg | Self::RgInteger => 2,
            Self::Rgb | Self::RgbInteger => 3,
            Self::Rgba | Self::RgbaInteger => 4,
            // Only reachable through a packed component type; sized there.
            Self::DepthStencil => 2,
        }
    }
}

/// Number of bytes one pixel occupies for a (component type, format) pair.
///
/// Per-component types contribute component width x channel count; packed
/// types are whole-pixel sizes and only legal with their matching format.
pub fn bytes_per_pixel(component_type: GlEnum, format: GlEnum) -> Result<usize, PixelDataError> {
    let ty = ComponentType::from_raw(component_type)
        .ok_or(PixelDataError::UnknownComponentType(component_type))?;
    let fmt = PixelFormat::from_raw(format).ok_or(PixelDataError::UnknownFormat(format))?;

    if let Some(pixel_bytes) = ty.packed_pixel_bytes() {
        let legal = matches!(
            (ty, fmt),
            (ComponentType::UnsignedShort565, PixelFormat::Rgb)
                | (ComponentType::UnsignedShort4444, PixelFormat::Rgba)
                | (ComponentType::UnsignedShort5551, PixelFormat::Rgba)
                | (ComponentType::UnsignedInt248, PixelFormat::DepthStencil)
        );
        if !legal {
            return Err(PixelDataError::IncompatiblePair { component_type, format });
        }
        return Ok(pixel_bytes);
    }

    // Combined depth/stencil has no per-component layout.
    if fmt == PixelFormat::DepthStencil {
        return Err(PixelDataError::IncompatiblePair { component_type, format });
    }

    let component_bytes = match ty {
        ComponentType::Byte | ComponentType::UnsignedByte => 1,
        ComponentType::Short | ComponentType::UnsignedShort | ComponentType::HalfFloat => 2,
        ComponentType::Int | ComponentType::UnsignedInt | ComponentType::Float => 4,
        // Packed types returned above.
        ComponentType::UnsignedShort565
        | ComponentType::UnsignedShort4444
        | ComponentType::UnsignedShort5551
        | ComponentType::UnsignedInt248 => unreachable!(),
    };

    Ok(component_bytes * fmt.channels())
}

/// Reverse the row order of a tightly packed pixel buffer in place.
///
/// Only the first `row_bytes * rows` bytes are touched. Zero or one rows is
/// a no-op; applying the flip twice restores the original buffer.
pub fn flip_vertical(pixels: &mut [u8], row_bytes: usize, rows: usize) {
    if row_bytes == 0 || rows < 2 {
        return;
    }
    debug_assert!(pixels.len() >= row_bytes * rows);

    let mut top = 0;
    let mut bottom = rows - 1;
    while top < bottom {
        let (head, tail) = pixels.split_at_mut(bottom * row_bytes);
        head[top * row_bytes..(top + 1) * row_bytes].swap_with_slice(&mut tail[..row_bytes]);
        top += 1;
        bottom -= 1;
    }
}
