// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Address and private-key byte codec.
//!
//! Two textual families are supported:
//!
//! - **Witness addresses** (`bc1…`, `ltc1…`, …) are stored as their UTF-8
//!   text. Only the prefix and character set are checked.
//! - **Base58Check** strings (legacy addresses such as `D…`/`1…` and WIF
//!   private keys) are stored as their raw Base58-decoded bytes, checksum
//!   included, so re-encoding the bytes with plain Base58 gives back the
//!   original string.

use zeroize::Zeroizing;

use crate::stego::error::StegoError;
use crate::stego::frame::PayloadKind;

/// Human-readable prefixes (including the `1` separator) of witness addresses.
pub const WITNESS_PREFIXES: [&str; 5] = ["bc1", "tb1", "bcrt1", "ltc1", "tltc1"];

/// Bech32 data-part alphabet.
const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Bech32 checksum length; the data part is never shorter.
const BECH32_CHECKSUM_LEN: usize = 6;

/// Longest valid bech32 string.
const BECH32_MAX_LEN: usize = 90;

/// Base58Check checksum length.
const CHECKSUM_LEN: usize = 4;

/// WIF version bytes: Bitcoin main/test, Dogecoin main/test, Litecoin main.
pub const WIF_VERSIONS: [u8; 5] = [0x80, 0xEF, 0x9E, 0xF1, 0xB0];

/// Raw WIF lengths: version + 32-byte key + checksum, optionally with the
/// 0x01 compressed-pubkey flag before the checksum.
const WIF_UNCOMPRESSED_LEN: usize = 1 + 32 + CHECKSUM_LEN;
const WIF_COMPRESSED_LEN: usize = 1 + 32 + 1 + CHECKSUM_LEN;

/// Whether `text` looks like a witness address.
///
/// Accepts all-lowercase or all-uppercase text (bech32 forbids mixed case).
pub fn is_witness_address(text: &str) -> bool {
    if text.len() > BECH32_MAX_LEN {
        return false;
    }
    let has_lower = text.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = text.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return false;
    }

    let lower = text.to_ascii_lowercase();
    WITNESS_PREFIXES.iter().any(|prefix| {
        lower.strip_prefix(prefix).is_some_and(|data| {
            data.len() >= BECH32_CHECKSUM_LEN && data.chars().all(|c| BECH32_CHARSET.contains(c))
        })
    })
}

fn is_wif(raw: &[u8]) -> bool {
    let shaped = match raw.len() {
        WIF_UNCOMPRESSED_LEN => true,
        WIF_COMPRESSED_LEN => raw[33] == 0x01,
        _ => false,
    };
    shaped && WIF_VERSIONS.contains(&raw[0])
}

/// Convert an address or private key to the bytes stored in a frame.
///
/// # Errors
/// Returns [`StegoError::InvalidSecret`] if `input` is neither a witness
/// address nor a Base58Check string with a valid checksum.
pub fn address_or_key_to_bytes(input: &str) -> Result<(Zeroizing<Vec<u8>>, PayloadKind), StegoError> {
    let text = input.trim();

    if is_witness_address(text) {
        return Ok((Zeroizing::new(text.as_bytes().to_vec()), PayloadKind::Address));
    }

    let raw = Zeroizing::new(bs58::decode(text).into_vec().map_err(|_| StegoError::InvalidSecret)?);
    let _checked = Zeroizing::new(
        bs58::decode(text)
            .with_check(None)
            .into_vec()
            .map_err(|_| StegoError::InvalidSecret)?,
    );

    let kind = if is_wif(&raw) {
        PayloadKind::PrivateKey
    } else {
        PayloadKind::Address
    };
    Ok((raw, kind))
}

/// Base58-encode `bytes` and verify the trailing checksum.
fn base58_check_text(bytes: &[u8]) -> Result<Zeroizing<String>, StegoError> {
    if bytes.len() <= CHECKSUM_LEN {
        return Err(StegoError::PayloadDecodeFailure);
    }
    let text = Zeroizing::new(bs58::encode(bytes).into_string());
    let _checked = Zeroizing::new(
        bs58::decode(text.as_str())
            .with_check(None)
            .into_vec()
            .map_err(|_| StegoError::PayloadDecodeFailure)?,
    );
    Ok(text)
}

/// Turn stored address bytes back into the address text.
///
/// Witness text is accepted as-is; anything else is treated as raw
/// Base58Check bytes.
///
/// # Errors
/// Returns [`StegoError::PayloadDecodeFailure`] if neither reading works.
pub fn bytes_to_address(bytes: &[u8]) -> Result<String, StegoError> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        if is_witness_address(text) {
            return Ok(text.to_owned());
        }
    }
    base58_check_text(bytes).map(|text| text.as_str().to_owned())
}

/// Turn stored private-key bytes back into the WIF text.
///
/// # Errors
/// Returns [`StegoError::PayloadDecodeFailure`] if the bytes do not carry a
/// valid Base58Check checksum.
pub fn bytes_to_private_key(bytes: &[u8]) -> Result<Zeroizing<String>, StegoError> {
    base58_check_text(bytes)
}
