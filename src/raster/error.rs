// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for carrier image decoding and encoding.

use std::fmt;

/// Errors that can occur while reading or writing a carrier image.
#[derive(Debug)]
pub enum RasterError {
    /// The `image` crate could not decode or encode the data.
    Image(image::ImageError),
    /// The image has zero width or height.
    EmptyImage,
    /// The image exceeds the maximum dimension or pixel count.
    TooLarge { width: u32, height: u32 },
    /// The pixel buffer does not hold exactly `width * height` pixels.
    DimensionMismatch { width: u32, height: u32, pixels: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "image codec error: {e}"),
            Self::EmptyImage => write!(f, "image has no pixels"),
            Self::TooLarge { width, height } => {
                write!(f, "image too large: {width}x{height} (max 8192px / 16MP)")
            }
            Self::DimensionMismatch { width, height, pixels } => {
                write!(f, "{pixels} pixels do not fill a {width}x{height} image")
            }
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

pub type Result<T> = std::result::Result<T, RasterError>;
