// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload interpretation.
//!
//! Turns the `(type, bytes)` pair carried by a frame into the printable
//! secret, and back:
//!
//! - [`PayloadKind::PrivateKey`]: raw Base58Check bytes of a WIF key.
//! - [`PayloadKind::Address`] (and every legacy frame): UTF-8 witness text
//!   if it looks like one, otherwise raw Base58Check bytes.

use zeroize::Zeroizing;

use crate::address;
use crate::stego::error::StegoError;
use crate::stego::frame::{FrameFormat, PayloadKind, ParsedFrame};

/// A secret recovered from a carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSecret {
    /// Address or private key.
    pub kind: PayloadKind,
    /// Layout of the frame the secret came from.
    pub format: FrameFormat,
    /// Printable secret, wiped on drop.
    pub text: Zeroizing<String>,
}

impl DecodedSecret {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_private_key(&self) -> bool {
        self.kind == PayloadKind::PrivateKey
    }
}

/// Convert a secret string into frame payload bytes and its type.
///
/// # Errors
/// - [`StegoError::InvalidSecret`] if the input is not a recognised
///   address or key.
/// - [`StegoError::InvalidLength`] if the encoded form is longer than a
///   frame can carry.
pub fn encode_payload(secret: &str) -> Result<(Zeroizing<Vec<u8>>, PayloadKind), StegoError> {
    let (bytes, kind) = address::address_or_key_to_bytes(secret)?;
    crate::stego::frame::validate_length(bytes.len())?;
    Ok((bytes, kind))
}

/// Interpret a parsed frame's payload.
///
/// # Errors
/// Returns [`StegoError::PayloadDecodeFailure`] if the bytes are not a valid
/// address or key for the frame's type.
pub fn decode_payload(frame: &ParsedFrame) -> Result<DecodedSecret, StegoError> {
    let text = match frame.kind {
        PayloadKind::PrivateKey => address::bytes_to_private_key(&frame.payload)?,
        PayloadKind::Address => Zeroizing::new(address::bytes_to_address(&frame.payload)?),
    };

    Ok(DecodedSecret {
        kind: frame.kind,
        format: frame.format,
        text,
    })
}
