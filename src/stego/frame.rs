// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Frame construction and parsing.
//!
//! The frame is the self-describing container written into the pixel LSBs.
//! The encoder always writes the modern layout:
//!
//! ```text
//! [4 bytes] magic "DOGE" (44 4F 47 45)
//! [1 byte ] payload type (0x00 address, 0x01 private key)
//! [2 bytes] payload length (big-endian u16, 1..=2000)
//! [N bytes] payload
//! ```
//!
//! Older carriers use the legacy layout, which has no type byte and always
//! holds an address:
//!
//! ```text
//! [4 bytes] magic "DOGE"
//! [2 bytes] payload length (big-endian u16)
//! [N bytes] payload
//! ```
//!
//! Both layouts share the magic, so the parser hands the bytes after it to
//! [`resolve`](crate::stego::resolve) to pick one.

use zeroize::Zeroizing;

use crate::stego::error::StegoError;
use crate::stego::pixels::PixelBuffer;
use crate::stego::resolve;

/// Magic marker at the start of every frame.
pub const MAGIC: [u8; 4] = *b"DOGE";

pub const MAGIC_LEN: usize = MAGIC.len();
pub const TYPE_LEN: usize = 1;
pub const LENGTH_LEN: usize = 2;

/// Header bytes in front of the payload in a modern frame: 4 + 1 + 2.
pub const FRAME_OVERHEAD: usize = MAGIC_LEN + TYPE_LEN + LENGTH_LEN;

/// Header bytes in front of the payload in a legacy frame: 4 + 2.
pub const LEGACY_FRAME_OVERHEAD: usize = MAGIC_LEN + LENGTH_LEN;

/// Smallest accepted payload length.
pub const MIN_PAYLOAD_LEN: usize = 1;

/// Largest accepted payload length, for both layouts.
pub const MAX_PAYLOAD_LEN: usize = 2000;

/// What the payload bytes encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PayloadKind {
    /// Wallet address: witness text or raw Base58Check bytes.
    Address = 0x00,
    /// Private key: raw Base58Check (WIF) bytes.
    PrivateKey = 0x01,
}

impl PayloadKind {
    /// Map a type byte to a kind. Only `0x00` and `0x01` are defined.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(Self::Address),
            0x01 => Some(Self::PrivateKey),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// Which wire layout a frame was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// `magic | length | payload`, no type byte.
    Legacy,
    /// `magic | type | length | payload`.
    Modern,
}

/// Check a payload length against `MIN_PAYLOAD_LEN..=MAX_PAYLOAD_LEN`.
pub fn validate_length(len: usize) -> Result<(), StegoError> {
    if (MIN_PAYLOAD_LEN..=MAX_PAYLOAD_LEN).contains(&len) {
        Ok(())
    } else {
        Err(StegoError::InvalidLength(len))
    }
}

/// Build a modern frame around `payload`.
///
/// # Errors
/// Returns [`StegoError::InvalidLength`] if the payload is empty or longer
/// than [`MAX_PAYLOAD_LEN`].
pub fn build_frame(kind: PayloadKind, payload: &[u8]) -> Result<Zeroizing<Vec<u8>>, StegoError> {
    validate_length(payload.len())?;

    let mut frame = Zeroizing::new(Vec::with_capacity(FRAME_OVERHEAD + payload.len()));
    frame.extend_from_slice(&MAGIC);
    frame.push(kind.tag());
    frame.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Frame bytes in the legacy layout. Only used to produce compatibility
/// carriers; the encoder never writes this layout.
pub fn build_legacy_frame(payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    validate_length(payload.len())?;

    let mut frame = Vec::with_capacity(LEGACY_FRAME_OVERHEAD + payload.len());
    frame.extend_from_slice(&MAGIC);
    frame.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Frame recovered from a carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    /// Layout the frame was read from.
    pub format: FrameFormat,
    /// Payload type. Always [`PayloadKind::Address`] for legacy frames.
    pub kind: PayloadKind,
    /// Payload bytes, wiped on drop.
    pub payload: Zeroizing<Vec<u8>>,
}

/// Read the frame stored in `pixels`.
///
/// # Errors
/// - [`StegoError::NotAProtocolCarrier`] if the magic is missing.
/// - [`StegoError::InvalidLength`] if a legacy length is out of range.
/// - [`StegoError::TruncatedCarrier`] if the pixels end before the payload does.
pub fn parse_frame(pixels: &PixelBuffer) -> Result<ParsedFrame, StegoError> {
    let (header, mut reader) = resolve::resolve_header(pixels)?;
    let payload = Zeroizing::new(reader.read_bytes(header.length)?);

    Ok(ParsedFrame {
        format: header.format,
        kind: header.kind,
        payload,
    })
}
