// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # dogestash-core
//!
//! Hides a cryptocurrency address or private key in the least-significant
//! bits of an image's R, G and B channels, and recovers it later without any
//! side information.
//!
//! The embedded frame is self-describing:
//!
//! ```text
//! "DOGE" | type (1) | length (2, BE) | payload
//! ```
//!
//! Carriers written by older releases lack the type byte; the decoder tells
//! the two layouts apart from the header bytes alone.
//!
//! This is not encryption. Anyone running an LSB detector on the image can
//! find and read the payload, and any lossy re-encode or resize destroys it.
//!
//! The `raster` feature (on by default) adds PNG/BMP file handling via the
//! `image` crate. Output is always PNG.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dogestash_core::{encode_image, decode_image};
//!
//! let cover_png = std::fs::read("cover.png").unwrap();
//! let stego = encode_image(&cover_png, "D5ERdEN1gsouFSs7zsq7VYJxyWP6dP28H1").unwrap();
//! let secret = decode_image(&stego).unwrap();
//! assert_eq!(secret.as_str(), "D5ERdEN1gsouFSs7zsq7VYJxyWP6dP28H1");
//! ```

pub mod address;
#[cfg(feature = "raster")]
pub mod raster;
pub mod stego;

pub use address::{address_or_key_to_bytes, bytes_to_address, bytes_to_private_key};
pub use stego::bitqueue::BitQueue;
pub use stego::capacity::{check_capacity, max_payload_len, pixels_needed};
pub use stego::frame::{FrameFormat, ParsedFrame, PayloadKind, MAGIC, MAX_PAYLOAD_LEN};
pub use stego::payload::DecodedSecret;
pub use stego::pixels::{encode_lsb, PixelBuffer, PixelReader};
pub use stego::{decode_secret, embed_frame, encode_secret, extract_frame, StegoError};
#[cfg(feature = "raster")]
pub use stego::{decode_image, encode_image, image_capacity};
#[cfg(feature = "raster")]
pub use raster::{Raster, RasterError};
