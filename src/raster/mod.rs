// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier image decoding and encoding.
//!
//! Any format the enabled `image` codecs can read (PNG, BMP) is accepted as
//! input and flattened to RGBA8. Output is always PNG: the hidden bits live
//! in the channel LSBs, so the output format must be lossless.

pub mod error;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

pub use error::{RasterError, Result};

use crate::stego::pixels::PixelBuffer;

/// Maximum pixel dimension (width or height) accepted for a carrier.
pub const MAX_DIMENSION: u32 = 8192;

/// Maximum total pixel count (width × height) accepted for a carrier.
pub const MAX_PIXELS: u32 = 16_000_000;

/// A decoded carrier image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: PixelBuffer,
}

/// Validate carrier dimensions.
///
/// # Errors
/// - [`RasterError::EmptyImage`] if either dimension is 0.
/// - [`RasterError::TooLarge`] if either dimension exceeds 8192px or the
///   total exceeds 16M pixels.
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RasterError::EmptyImage);
    }
    if width > MAX_DIMENSION
        || height > MAX_DIMENSION
        || width.checked_mul(height).map_or(true, |p| p > MAX_PIXELS)
    {
        return Err(RasterError::TooLarge { width, height });
    }
    Ok(())
}

/// Decode image file bytes into an RGBA8 raster.
pub fn decode_raster(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes)?;
    validate_dimensions(img.width(), img.height())?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let raw = rgba.into_raw();
    let pixel_count = raw.len() / 4;
    let pixels = PixelBuffer::from_rgba(raw).map_err(|_| RasterError::DimensionMismatch {
        width,
        height,
        pixels: pixel_count,
    })?;
    tracing::debug!(width, height, "decoded carrier");

    Ok(Raster { width, height, pixels })
}

/// Encode a raster as PNG bytes.
pub fn encode_raster(raster: &Raster) -> Result<Vec<u8>> {
    let mismatch = || RasterError::DimensionMismatch {
        width: raster.width,
        height: raster.height,
        pixels: raster.pixels.pixel_count(),
    };
    let expected = (raster.width as usize).checked_mul(raster.height as usize);
    if expected != Some(raster.pixels.pixel_count()) {
        return Err(mismatch());
    }

    let img = RgbaImage::from_raw(raster.width, raster.height, raster.pixels.as_rgba().to_vec())
        .ok_or_else(mismatch)?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
