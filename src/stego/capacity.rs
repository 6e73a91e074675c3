// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier capacity planning.
//!
//! Every pixel carries [`BITS_PER_PIXEL`] bits, and the encoder always
//! writes a modern frame, so a payload of `n` bytes needs
//! `ceil((7 + n) * 8 / 3)` pixels.

use crate::stego::error::StegoError;
use crate::stego::frame::{FRAME_OVERHEAD, MAX_PAYLOAD_LEN};
use crate::stego::pixels::BITS_PER_PIXEL;

/// Pixels needed to hold a modern frame with a `payload_len`-byte payload.
pub fn pixels_needed(payload_len: usize) -> usize {
    ((FRAME_OVERHEAD + payload_len) * 8).div_ceil(BITS_PER_PIXEL)
}

/// Refuse carriers that cannot hold a `payload_len`-byte payload.
///
/// # Errors
/// Returns [`StegoError::CarrierTooSmall`] with the required and available
/// pixel counts.
pub fn check_capacity(pixel_count: usize, payload_len: usize) -> Result<(), StegoError> {
    let needed = pixels_needed(payload_len);
    if pixel_count < needed {
        tracing::debug!(needed, available = pixel_count, "carrier too small");
        return Err(StegoError::CarrierTooSmall {
            needed,
            available: pixel_count,
        });
    }
    Ok(())
}

/// Largest payload (in bytes) a carrier of `pixel_count` pixels can hold.
///
/// Capped at [`MAX_PAYLOAD_LEN`]. Returns 0 if not even a 1-byte payload fits.
pub fn max_payload_len(pixel_count: usize) -> usize {
    let frame_bytes = pixel_count.saturating_mul(BITS_PER_PIXEL) / 8;
    frame_bytes
        .saturating_sub(FRAME_OVERHEAD)
        .min(MAX_PAYLOAD_LEN)
}
