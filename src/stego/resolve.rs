// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Modern/legacy frame disambiguation.
//!
//! Both layouts start with the same magic and only diverge at the fifth
//! byte. Legacy carriers were written without a version byte, so the layout
//! is inferred from the three bytes after the magic:
//!
//! - `b0` is `0x00` or `0x01` **and** `(b1 << 8) | b2` is in `1..=2000`:
//!   modern, `b0` is the type tag and `b1 b2` the length.
//! - anything else: legacy, `b0 b1` is the length and `b2` is already the
//!   first payload byte.
//!
//! A legacy frame whose length high byte is 0 or 1 and whose next two bytes
//! happen to form a small number is read as modern. Existing carriers were
//! written under this rule, so it must stay exactly as is.
//!
//! A [`PixelReader`] cannot step backwards. The three header bytes are read
//! through a second reader, and a legacy payload is read through a third
//! one positioned just after the 2-byte length, so no byte is ever reused
//! across readers.

use crate::stego::error::StegoError;
use crate::stego::frame::{
    self, FrameFormat, PayloadKind, LEGACY_FRAME_OVERHEAD, MAGIC, MAGIC_LEN, MAX_PAYLOAD_LEN,
    MIN_PAYLOAD_LEN,
};
use crate::stego::pixels::{PixelBuffer, PixelReader};

/// Bytes inspected after the magic to pick a layout.
pub const PEEK_LEN: usize = 3;

/// Layout, payload type and payload length of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub format: FrameFormat,
    pub kind: PayloadKind,
    pub length: usize,
}

/// Classify the three bytes following the magic.
///
/// For a legacy result the returned length has not been range-checked.
pub fn classify(peek: [u8; PEEK_LEN]) -> FrameHeader {
    let [b0, b1, b2] = peek;
    let modern_len = u16::from_be_bytes([b1, b2]) as usize;

    if let Some(kind) = PayloadKind::from_tag(b0) {
        if (MIN_PAYLOAD_LEN..=MAX_PAYLOAD_LEN).contains(&modern_len) {
            return FrameHeader {
                format: FrameFormat::Modern,
                kind,
                length: modern_len,
            };
        }
    }

    FrameHeader {
        format: FrameFormat::Legacy,
        kind: PayloadKind::Address,
        length: u16::from_be_bytes([b0, b1]) as usize,
    }
}

/// Check the magic and work out the frame header.
///
/// Returns the header together with a reader positioned on the first
/// payload byte.
///
/// # Errors
/// - [`StegoError::NotAProtocolCarrier`] if the first 4 bytes are not the
///   magic, or the carrier is too small to hold them.
/// - [`StegoError::TruncatedCarrier`] if the header bytes are cut off.
/// - [`StegoError::InvalidLength`] if a legacy length is outside `1..=2000`.
pub fn resolve_header(pixels: &PixelBuffer) -> Result<(FrameHeader, PixelReader<'_>), StegoError> {
    let mut magic_reader = PixelReader::new(pixels);
    let magic = magic_reader
        .read_array::<MAGIC_LEN>()
        .map_err(|_| StegoError::NotAProtocolCarrier)?;
    if magic != MAGIC {
        return Err(StegoError::NotAProtocolCarrier);
    }

    let mut peek_reader = PixelReader::new(pixels);
    peek_reader.skip_bytes(MAGIC_LEN)?;
    let peek = peek_reader.read_array::<PEEK_LEN>()?;
    let header = classify(peek);

    match header.format {
        FrameFormat::Modern => {
            tracing::debug!(kind = ?header.kind, length = header.length, "modern frame");
            Ok((header, peek_reader))
        }
        FrameFormat::Legacy => {
            tracing::debug!(length = header.length, "legacy frame");
            frame::validate_length(header.length)?;
            let mut payload_reader = PixelReader::new(pixels);
            payload_reader.skip_bytes(LEGACY_FRAME_OVERHEAD)?;
            Ok((header, payload_reader))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::pixels::encode_lsb;

    fn carrier_with(bytes: &[u8]) -> PixelBuffer {
        let mut px = PixelBuffer::zeroed(bytes.len() * 8 / 3 + 4);
        encode_lsb(&mut px, bytes).unwrap();
        px
    }

    #[test]
    fn modern_address() {
        let h = classify([0x00, 0x00, 0x22]);
        assert_eq!(h.format, FrameFormat::Modern);
        assert_eq!(h.kind, PayloadKind::Address);
        assert_eq!(h.length, 34);
    }

    #[test]
    fn modern_key_at_upper_bound() {
        let h = classify([0x01, 0x07, 0xD0]);
        assert_eq!(h.format, FrameFormat::Modern);
        assert_eq!(h.kind, PayloadKind::PrivateKey);
        assert_eq!(h.length, 2000);
    }

    #[test]
    fn length_above_bound_is_legacy() {
        // 0x07D1 = 2001
        let h = classify([0x01, 0x07, 0xD1]);
        assert_eq!(h.format, FrameFormat::Legacy);
        assert_eq!(h.length, 0x0107);
    }

    #[test]
    fn zero_modern_length_is_legacy() {
        let h = classify([0x00, 0x00, 0x00]);
        assert_eq!(h.format, FrameFormat::Legacy);
        assert_eq!(h.length, 0);
    }

    #[test]
    fn legacy_34_bytes() {
        // Legacy LEN 34 = 00 22, then a payload starting with 'D'.
        // (0x22 << 8) | 'D' = 8772 > 2000, so it cannot be modern.
        let h = classify([0x00, 0x22, b'D']);
        assert_eq!(h.format, FrameFormat::Legacy);
        assert_eq!(h.kind, PayloadKind::Address);
        assert_eq!(h.length, 34);
    }

    #[test]
    fn tag_outside_known_types_is_legacy() {
        let h = classify([0x02, 0x00, 0x10]);
        assert_eq!(h.format, FrameFormat::Legacy);
        assert_eq!(h.length, 0x0200);
    }

    #[test]
    fn ambiguous_legacy_reads_as_modern() {
        // Legacy LEN 1 (00 01) with payload byte 0x05 looks like a modern
        // address frame of length 0x0105.
        let h = classify([0x00, 0x01, 0x05]);
        assert_eq!(h.format, FrameFormat::Modern);
        assert_eq!(h.length, 261);
    }

    #[test]
    fn missing_magic() {
        let px = carrier_with(b"NOPE\x00\x00\x01x");
        assert!(matches!(resolve_header(&px), Err(StegoError::NotAProtocolCarrier)));
    }

    #[test]
    fn carrier_too_small_for_magic() {
        let px = PixelBuffer::zeroed(10);
        assert!(matches!(resolve_header(&px), Err(StegoError::NotAProtocolCarrier)));
    }

    #[test]
    fn header_cut_off() {
        // Magic only, 11 pixels of slack cannot hold 3 more bytes.
        let mut px = PixelBuffer::zeroed(14);
        encode_lsb(&mut px, &MAGIC).unwrap();
        assert!(matches!(resolve_header(&px), Err(StegoError::TruncatedCarrier)));
    }

    #[test]
    fn legacy_zero_length_rejected() {
        let px = carrier_with(&[0x44, 0x4F, 0x47, 0x45, 0x00, 0x00, 0x00]);
        assert!(matches!(resolve_header(&px), Err(StegoError::InvalidLength(0))));
    }

    #[test]
    fn legacy_oversized_length_rejected() {
        // 0x2000 = 8192
        let px = carrier_with(&[0x44, 0x4F, 0x47, 0x45, 0x20, 0x00, 0x00]);
        assert!(matches!(resolve_header(&px), Err(StegoError::InvalidLength(8192))));
    }

    #[test]
    fn reader_positions() {
        let modern = carrier_with(&[0x44, 0x4F, 0x47, 0x45, 0x01, 0x00, 0x02, 0xAB, 0xCD]);
        let (h, mut r) = resolve_header(&modern).unwrap();
        assert_eq!(h.format, FrameFormat::Modern);
        assert_eq!(r.read_bytes(2).unwrap(), [0xAB, 0xCD]);

        // Legacy LEN 8: 0x08xx is always above 2000.
        let legacy = carrier_with(&frame::build_legacy_frame(b"DOGECOIN").unwrap());
        let (h, mut r) = resolve_header(&legacy).unwrap();
        assert_eq!(h.format, FrameFormat::Legacy);
        assert_eq!(h.length, 8);
        assert_eq!(r.read_bytes(8).unwrap(), b"DOGECOIN");
    }
}
