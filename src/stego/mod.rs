// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! LSB framing protocol.
//!
//! Layers, bottom-up:
//!
//! - [`bitqueue`]: MSB-first FIFO of bits.
//! - [`pixels`]: 3 bits per pixel in the R/G/B low bits, plus the
//!   forward-only [`PixelReader`](pixels::PixelReader).
//! - [`frame`]: `DOGE | type | length | payload` frame layout.
//! - [`resolve`]: tells modern frames from legacy (untyped) ones.
//! - [`capacity`]: pixel budget checks before anything is written.
//! - [`payload`]: payload bytes to printable address/key and back.
//!
//! The public entry points live in the pipeline and are re-exported here.

pub mod error;
pub mod bitqueue;
pub mod pixels;
pub mod frame;
pub mod resolve;
pub mod capacity;
pub mod payload;
mod pipeline;

pub use error::StegoError;

pub use pipeline::{decode_secret, embed_frame, encode_secret, extract_frame};
#[cfg(feature = "raster")]
pub use pipeline::{decode_image, encode_image, image_capacity};
