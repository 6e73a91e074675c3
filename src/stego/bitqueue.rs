// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! FIFO bit queue used by both the pixel writer and the pixel reader.
//!
//! Bits are pushed and popped MSB-first, so a byte pushed with
//! [`BitQueue::push_byte`] comes back out unchanged from
//! [`BitQueue::pop_byte`], and a 3-bit pixel group pushed with
//! [`BitQueue::push_bits`] keeps its R, G, B order.

use std::collections::VecDeque;

/// Widest value accepted by [`BitQueue::push_bits`] / [`BitQueue::pop_bits`].
pub const MAX_BITS: u8 = 32;

/// A strict FIFO of single bits.
///
/// Each element holds one bit (0 or 1). Pushes append at the back, pops
/// remove from the front; the order is never rearranged.
#[derive(Debug, Default, Clone)]
pub struct BitQueue {
    bits: VecDeque<u8>,
}

impl BitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: VecDeque::with_capacity(bits),
        }
    }

    /// Append the 8 bits of `byte`, most-significant first.
    pub fn push_byte(&mut self, byte: u8) {
        self.push_bits(byte as u32, 8);
    }

    /// Append the low `count` bits of `value`, most-significant first.
    pub fn push_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= MAX_BITS);
        for i in (0..count).rev() {
            self.bits.push_back(((value >> i) & 1) as u8);
        }
    }

    /// Remove the next `count` bits and return them right-aligned.
    ///
    /// The first bit popped becomes the most-significant bit of the result.
    /// Returns `None` without consuming anything if fewer than `count` bits
    /// are queued.
    pub fn pop_bits(&mut self, count: u8) -> Option<u32> {
        debug_assert!(count <= MAX_BITS);
        if self.bits.len() < count as usize {
            return None;
        }
        let mut value = 0u32;
        for bit in self.bits.drain(..count as usize) {
            value = (value << 1) | bit as u32;
        }
        Some(value)
    }

    /// Remove the next 8 bits as a byte.
    pub fn pop_byte(&mut self) -> Option<u8> {
        self.pop_bits(8).map(|v| v as u8)
    }

    /// Number of bits currently queued.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}
