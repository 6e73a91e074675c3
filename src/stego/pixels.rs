// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Pixel-channel LSB transport.
//!
//! Each pixel carries 3 bits: the low bit of R, G and B, in that order
//! (R holds the most-significant bit of the group). Alpha never carries
//! data; every pixel that receives bits has its alpha forced to 255, so
//! encoding strips transparency from the touched region.
//!
//! [`encode_lsb`] is the write path. [`PixelReader`] is the read path: a
//! forward-only cursor that lazily drains pixels into a [`BitQueue`]. It
//! cannot be rewound; to look at the same bytes twice, open a second reader
//! over the same buffer.

use crate::stego::bitqueue::BitQueue;
use crate::stego::error::StegoError;

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Data bits carried by one pixel.
pub const BITS_PER_PIXEL: usize = 3;

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;
const ALPHA: usize = 3;

/// Alpha value written to every pixel that receives data.
pub const OPAQUE: u8 = 255;

/// A flat RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes (4 bytes per pixel, row-major).
    ///
    /// # Errors
    /// Returns [`StegoError::InvalidPixelBuffer`] if `data.len()` is not a
    /// multiple of 4.
    pub fn from_rgba(data: Vec<u8>) -> Result<Self, StegoError> {
        if data.len() % CHANNELS != 0 {
            return Err(StegoError::InvalidPixelBuffer);
        }
        Ok(Self { data })
    }

    /// An all-zero (transparent black) buffer of `pixel_count` pixels.
    pub fn zeroed(pixel_count: usize) -> Self {
        Self {
            data: vec![0u8; pixel_count * CHANNELS],
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Number of data bits the buffer can carry.
    pub fn bit_capacity(&self) -> usize {
        self.pixel_count() * BITS_PER_PIXEL
    }

    /// RGBA channels of pixel `index`.
    pub fn pixel(&self, index: usize) -> Option<[u8; 4]> {
        let start = index.checked_mul(CHANNELS)?;
        let px = self.data.get(start..start + CHANNELS)?;
        Some([px[RED], px[GREEN], px[BLUE], px[ALPHA]])
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    /// The 3-bit group stored in pixel `index`, R in bit 2.
    fn lsb_group(&self, index: usize) -> Option<u32> {
        let px = self.pixel(index)?;
        Some(((px[RED] & 1) as u32) << 2 | ((px[GREEN] & 1) as u32) << 1 | (px[BLUE] & 1) as u32)
    }

    /// Store a 3-bit group into pixel `index` and force it opaque.
    fn set_lsb_group(&mut self, index: usize, group: u32) {
        let start = index * CHANNELS;
        let px = &mut self.data[start..start + CHANNELS];
        px[RED] = (px[RED] & !1) | ((group >> 2) & 1) as u8;
        px[GREEN] = (px[GREEN] & !1) | ((group >> 1) & 1) as u8;
        px[BLUE] = (px[BLUE] & !1) | (group & 1) as u8;
        px[ALPHA] = OPAQUE;
    }
}

/// Write `data` into the pixel LSBs, starting at pixel 0.
///
/// Bits are taken MSB-first, 3 per pixel. When the bit count is not a
/// multiple of 3 the last pixel's missing low-order bits are written as 0.
/// Pixels after the last one touched are left exactly as they were.
///
/// Returns the number of pixels written.
///
/// # Errors
/// Returns [`StegoError::CarrierTooSmall`] if the buffer cannot hold all of
/// `data`. The check runs before the first pixel is modified, so a failed
/// call never leaves a partial write.
pub fn encode_lsb(pixels: &mut PixelBuffer, data: &[u8]) -> Result<usize, StegoError> {
    let bits = data.len() * 8;
    let needed = bits.div_ceil(BITS_PER_PIXEL);
    if needed > pixels.pixel_count() {
        return Err(StegoError::CarrierTooSmall {
            needed,
            available: pixels.pixel_count(),
        });
    }

    let mut queue = BitQueue::with_capacity(bits);
    for &byte in data {
        queue.push_byte(byte);
    }

    let mut index = 0usize;
    while !queue.is_empty() {
        let group = match queue.pop_bits(BITS_PER_PIXEL as u8) {
            Some(group) => group,
            None => {
                // Final partial group: pad the missing low-order bits with 0.
                let remaining = queue.len() as u8;
                let head = queue.pop_bits(remaining).unwrap_or(0);
                head << (BITS_PER_PIXEL as u8 - remaining)
            }
        };
        pixels.set_lsb_group(index, group);
        index += 1;
    }

    tracing::trace!(bytes = data.len(), pixels = index, "wrote LSB data");
    Ok(index)
}

/// Forward-only LSB reader over a [`PixelBuffer`].
///
/// Holds the buffer, the index of the next unread pixel, and the bits
/// drained from pixels but not yet handed out.
pub struct PixelReader<'a> {
    pixels: &'a PixelBuffer,
    index: usize,
    queue: BitQueue,
}

impl<'a> PixelReader<'a> {
    /// Open a reader positioned at the first pixel.
    pub fn new(pixels: &'a PixelBuffer) -> Self {
        Self {
            pixels,
            index: 0,
            queue: BitQueue::with_capacity(16),
        }
    }

    /// Drain pixels until at least `count` bits are queued.
    ///
    /// Returns `false` if the buffer ran out first.
    pub fn ensure(&mut self, count: usize) -> bool {
        while self.queue.len() < count {
            let Some(group) = self.pixels.lsb_group(self.index) else {
                return false;
            };
            self.queue.push_bits(group, BITS_PER_PIXEL as u8);
            self.index += 1;
        }
        true
    }

    /// Pop the next `count` bits, or `None` if the buffer is exhausted.
    pub fn pop_bits(&mut self, count: u8) -> Option<u32> {
        if !self.ensure(count as usize) {
            return None;
        }
        self.queue.pop_bits(count)
    }

    pub fn pop_byte(&mut self) -> Option<u8> {
        self.pop_bits(8).map(|v| v as u8)
    }

    /// Read `count` whole bytes.
    ///
    /// # Errors
    /// Returns [`StegoError::TruncatedCarrier`] if the pixels run out first.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, StegoError> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.pop_byte().ok_or(StegoError::TruncatedCarrier)?);
        }
        Ok(out)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], StegoError> {
        let mut out = [0u8; N];
        for slot in out.iter_mut() {
            *slot = self.pop_byte().ok_or(StegoError::TruncatedCarrier)?;
        }
        Ok(out)
    }

    /// Advance past `count` bytes without keeping them.
    pub fn skip_bytes(&mut self, count: usize) -> Result<(), StegoError> {
        for _ in 0..count {
            self.pop_byte().ok_or(StegoError::TruncatedCarrier)?;
        }
        Ok(())
    }

    /// Number of pixels drained so far.
    pub fn pixels_consumed(&self) -> usize {
        self.index
    }
}
