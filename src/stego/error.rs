// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from raster decoding through
//! frame extraction and payload interpretation.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier image could not be decoded or re-encoded.
    #[cfg(feature = "raster")]
    InvalidRaster(crate::raster::RasterError),
    /// A raw RGBA buffer whose length is not a multiple of 4.
    InvalidPixelBuffer,
    /// The carrier has fewer pixels than the frame needs. Nothing was written.
    CarrierTooSmall {
        /// Pixels required to hold the whole frame.
        needed: usize,
        /// Pixels the carrier actually has.
        available: usize,
    },
    /// The first 12 pixels do not carry the `DOGE` magic marker.
    NotAProtocolCarrier,
    /// The pixel buffer ran out in the middle of a frame.
    TruncatedCarrier,
    /// A payload length outside `1..=2000`.
    InvalidLength(usize),
    /// The payload bytes are neither a witness address nor valid Base58Check.
    PayloadDecodeFailure,
    /// The secret handed to the encoder is not a recognised address or key.
    InvalidSecret,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "raster")]
            Self::InvalidRaster(e) => write!(f, "invalid carrier image: {e}"),
            Self::InvalidPixelBuffer => write!(f, "pixel buffer length is not a multiple of 4"),
            Self::CarrierTooSmall { needed, available } => {
                write!(f, "carrier too small: need {needed} pixels, have {available}")
            }
            Self::NotAProtocolCarrier => write!(f, "image does not contain a hidden frame"),
            Self::TruncatedCarrier => write!(f, "carrier ended in the middle of the frame"),
            Self::InvalidLength(len) => write!(f, "invalid payload length: {len} (expected 1-2000)"),
            Self::PayloadDecodeFailure => write!(f, "payload is not a valid address or key"),
            Self::InvalidSecret => write!(f, "input is not a recognised address or private key"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "raster")]
            Self::InvalidRaster(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "raster")]
impl From<crate::raster::RasterError> for StegoError {
    fn from(e: crate::raster::RasterError) -> Self {
        Self::InvalidRaster(e)
    }
}
