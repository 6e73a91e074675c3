// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Encode/decode pipelines.
//!
//! Encode:
//! 1. Convert the secret to payload bytes (Base58Check or witness text)
//! 2. Build a modern frame around them
//! 3. Check the carrier has enough pixels, before touching it
//! 4. Write the frame into the R/G/B LSBs, 3 bits per pixel
//!
//! Decode runs the same steps backwards: magic check, layout resolution,
//! payload read, payload interpretation. Decoding only borrows the pixels,
//! so decoding the same carrier twice gives the same answer.

use crate::stego::capacity;
use crate::stego::error::StegoError;
use crate::stego::frame::{self, ParsedFrame, PayloadKind};
use crate::stego::payload::{self, DecodedSecret};
use crate::stego::pixels::{self, PixelBuffer};

/// Write a modern frame carrying `payload` into `pixels`.
///
/// Returns the number of pixels written.
///
/// # Errors
/// - [`StegoError::InvalidLength`] if the payload is empty or over 2000 bytes.
/// - [`StegoError::CarrierTooSmall`] if the frame does not fit. `pixels` is
///   left untouched.
pub fn embed_frame(pixels: &mut PixelBuffer, kind: PayloadKind, payload: &[u8]) -> Result<usize, StegoError> {
    let frame_bytes = frame::build_frame(kind, payload)?;
    capacity::check_capacity(pixels.pixel_count(), payload.len())?;

    let written = pixels::encode_lsb(pixels, &frame_bytes)?;
    tracing::debug!(?kind, payload_len = payload.len(), pixels = written, "embedded frame");
    Ok(written)
}

/// Read the frame stored in `pixels`.
///
/// # Errors
/// - [`StegoError::NotAProtocolCarrier`] if the magic is missing.
/// - [`StegoError::InvalidLength`] if a legacy length is out of range.
/// - [`StegoError::TruncatedCarrier`] if the pixels end mid-frame.
pub fn extract_frame(pixels: &PixelBuffer) -> Result<ParsedFrame, StegoError> {
    frame::parse_frame(pixels)
}

/// Hide an address or private key in `pixels`.
///
/// Returns the detected payload type.
///
/// # Errors
/// - [`StegoError::InvalidSecret`] if `secret` is not a recognised address or key.
/// - [`StegoError::CarrierTooSmall`] if the frame does not fit.
pub fn encode_secret(pixels: &mut PixelBuffer, secret: &str) -> Result<PayloadKind, StegoError> {
    let (bytes, kind) = payload::encode_payload(secret)?;
    embed_frame(pixels, kind, &bytes)?;
    Ok(kind)
}

/// Recover the address or private key hidden in `pixels`.
///
/// # Errors
/// Any [`extract_frame`] error, or [`StegoError::PayloadDecodeFailure`] if
/// the payload is not a valid address or key.
pub fn decode_secret(pixels: &PixelBuffer) -> Result<DecodedSecret, StegoError> {
    let parsed = extract_frame(pixels)?;
    payload::decode_payload(&parsed)
}

/// Hide a secret in a carrier image and return the result as PNG bytes.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of the carrier (PNG or BMP).
/// - `secret`: Address or WIF private key.
///
/// # Errors
/// - [`StegoError::InvalidRaster`] if the carrier cannot be decoded.
/// - [`StegoError::InvalidSecret`] if `secret` is not a recognised address or key.
/// - [`StegoError::CarrierTooSmall`] if the image has too few pixels.
#[cfg(feature = "raster")]
pub fn encode_image(image_bytes: &[u8], secret: &str) -> Result<Vec<u8>, StegoError> {
    use crate::raster;

    let mut carrier = raster::decode_raster(image_bytes)?;
    encode_secret(&mut carrier.pixels, secret)?;
    Ok(raster::encode_raster(&carrier)?)
}

/// Recover a secret from carrier image bytes.
#[cfg(feature = "raster")]
pub fn decode_image(image_bytes: &[u8]) -> Result<DecodedSecret, StegoError> {
    let carrier = crate::raster::decode_raster(image_bytes)?;
    decode_secret(&carrier.pixels)
}

/// Largest payload (in bytes) the carrier image can hold.
#[cfg(feature = "raster")]
pub fn image_capacity(image_bytes: &[u8]) -> Result<usize, StegoError> {
    let carrier = crate::raster::decode_raster(image_bytes)?;
    Ok(capacity::max_payload_len(carrier.pixels.pixel_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::frame::FrameFormat;

    #[test]
    fn embed_extract() {
        let mut px = PixelBuffer::zeroed(64);
        let written = embed_frame(&mut px, PayloadKind::PrivateKey, &[0x1A, 0x2B, 0x3C]).unwrap();
        assert_eq!(written, 27);

        let parsed = extract_frame(&px).unwrap();
        assert_eq!(parsed.format, FrameFormat::Modern);
        assert_eq!(parsed.kind, PayloadKind::PrivateKey);
        assert_eq!(parsed.payload.as_slice(), &[0x1A, 0x2B, 0x3C]);
    }

    #[test]
    fn length_checked_before_capacity() {
        let mut px = PixelBuffer::zeroed(1);
        assert!(matches!(
            embed_frame(&mut px, PayloadKind::Address, &[]),
            Err(StegoError::InvalidLength(0))
        ));
    }

    #[test]
    fn secret_roundtrip() {
        let mut px = PixelBuffer::zeroed(200);
        let kind = encode_secret(&mut px, "D5ERdEN1gsouFSs7zsq7VYJxyWP6dP28H1").unwrap();
        assert_eq!(kind, PayloadKind::Address);
        let secret = decode_secret(&px).unwrap();
        assert_eq!(secret.as_str(), "D5ERdEN1gsouFSs7zsq7VYJxyWP6dP28H1");
    }

    #[test]
    fn undecodable_payload() {
        let mut px = PixelBuffer::zeroed(64);
        embed_frame(&mut px, PayloadKind::Address, &[0xFF, 0x00, 0xFF]).unwrap();
        assert!(matches!(decode_secret(&px), Err(StegoError::PayloadDecodeFailure)));
    }
}
