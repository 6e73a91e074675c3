// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Decoding carriers written in the legacy (untyped) frame layout.

use dogestash_core::stego::frame::build_legacy_frame;
use dogestash_core::stego::resolve::classify;
use dogestash_core::{
    address_or_key_to_bytes, decode_secret, encode_lsb, extract_frame, FrameFormat, PayloadKind,
    PixelBuffer, StegoError,
};

fn legacy_carrier(payload: &[u8]) -> PixelBuffer {
    let frame = build_legacy_frame(payload).unwrap();
    let mut carrier = PixelBuffer::zeroed(frame.len() * 8 / 3 + 10);
    encode_lsb(&mut carrier, &frame).unwrap();
    carrier
}

#[test]
fn legacy_witness_address() {
    // Witness text, 42 bytes → LEN 00 2A; 0x2A62 ('b') is far above 2000.
    let address = "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4";
    let carrier = legacy_carrier(address.as_bytes());

    let parsed = extract_frame(&carrier).unwrap();
    assert_eq!(parsed.format, FrameFormat::Legacy);
    assert_eq!(parsed.kind, PayloadKind::Address);
    assert_eq!(parsed.payload.as_slice(), address.as_bytes());

    let secret = decode_secret(&carrier).unwrap();
    assert_eq!(secret.as_str(), address);
    assert_eq!(secret.format, FrameFormat::Legacy);
}

#[test]
fn legacy_len_34_raw_bytes() {
    // LEN = 34 → 00 22. Peeked bytes are 00 22 p0, and 0x22xx > 2000.
    let payload: Vec<u8> = (0..34u8).map(|b| b.wrapping_mul(7).wrapping_add(0x41)).collect();
    let carrier = legacy_carrier(&payload);

    let parsed = extract_frame(&carrier).unwrap();
    assert_eq!(parsed.format, FrameFormat::Legacy);
    assert_eq!(parsed.payload.as_slice(), payload.as_slice());
}

#[test]
fn legacy_base58_address() {
    // 25-byte Base58Check address → LEN 00 19; first raw byte 0x1E (Dogecoin P2PKH).
    // 0x191E = 6430 > 2000 → legacy.
    let (bytes, _) = address_or_key_to_bytes("D5ERdEN1gsouFSs7zsq7VYJxyWP6dP28H1").unwrap();
    let carrier = legacy_carrier(&bytes);

    let secret = decode_secret(&carrier).unwrap();
    assert_eq!(secret.format, FrameFormat::Legacy);
    assert_eq!(secret.kind, PayloadKind::Address);
    assert_eq!(secret.as_str(), "D5ERdEN1gsouFSs7zsq7VYJxyWP6dP28H1");
}

#[test]
fn legacy_long_payload() {
    // LEN 1500 = 05 DC; 0x05 is not a type tag → legacy.
    let payload = vec![0x5Au8; 1500];
    let carrier = legacy_carrier(&payload);

    let parsed = extract_frame(&carrier).unwrap();
    assert_eq!(parsed.format, FrameFormat::Legacy);
    assert_eq!(parsed.payload.len(), 1500);
}

#[test]
fn legacy_high_byte_one() {
    // LEN 300 = 01 2C; 0x2C00 | p0 > 2000 → still legacy despite b0 == 0x01.
    let payload = vec![0x00u8; 300];
    let carrier = legacy_carrier(&payload);

    let parsed = extract_frame(&carrier).unwrap();
    assert_eq!(parsed.format, FrameFormat::Legacy);
    assert_eq!(parsed.payload.len(), 300);
}

#[test]
fn ambiguous_legacy_frame_reads_as_modern() {
    // LEN 3 = 00 03 with first payload byte 0x10: 0x0310 = 784 is a plausible
    // modern length, so the frame is classified modern.
    let header = classify([0x00, 0x03, 0x10]);
    assert_eq!(header.format, FrameFormat::Modern);
    assert_eq!(header.length, 784);

    // The carrier has far fewer than 784 payload bytes behind the header.
    let carrier = legacy_carrier(&[0x10, 0x20, 0x30]);
    assert!(matches!(extract_frame(&carrier), Err(StegoError::TruncatedCarrier)));
}

#[test]
fn legacy_garbage_payload_fails_interpretation() {
    let carrier = legacy_carrier(&[0xC0; 40]);
    assert!(matches!(decode_secret(&carrier), Err(StegoError::PayloadDecodeFailure)));
}
