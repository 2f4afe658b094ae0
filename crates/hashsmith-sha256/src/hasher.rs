// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256

use crate::compress::compress_block;
use crate::consts::{BLOCK_LEN, H0};
use crate::digest::Digest;
use crate::error::Sha256Error;
use crate::pad::{bit_len, pad_tail};

/// Streaming SHA-256 state.
///
/// Feeding a message through any sequence of [`update`](Self::update) calls
/// yields the same digest as [`sha256`](crate::sha256) over the whole
/// message. Callers hashing large inputs can feed block-sized chunks and
/// yield between calls.
#[derive(Debug, Clone)]
pub struct Sha256 {
    // Hash state H(i)
    state: [u32; 8],

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Create new SHA-256 state initialized with H(0)
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Starts from an arbitrary byte count, for exercising the length limit.
    #[cfg(test)]
    pub(crate) fn with_total_len(total_len: u64) -> Self {
        Self {
            total_len,
            ..Self::new()
        }
    }

    /// Number of message bytes absorbed so far
    pub fn len(&self) -> u64 {
        self.total_len
    }

    /// Whether no message bytes have been absorbed yet
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Update state with data
    ///
    /// # Errors
    ///
    /// Returns [`Sha256Error::InputTooLarge`] if the total message would no
    /// longer fit the 64-bit length field. The state is left untouched.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha256Error> {
        let total_len = self
            .total_len
            .checked_add(data.len() as u64)
            .ok_or(Sha256Error::InputTooLarge)?;
        bit_len(total_len)?;
        self.total_len = total_len;

        let mut data = data;

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < BLOCK_LEN {
                return Ok(());
            }

            compress_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        // Process full blocks
        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for chunk in &mut blocks {
            self.buffer.copy_from_slice(chunk);
            compress_block(&mut self.state, &self.buffer);
        }

        // Buffer remaining
        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffer_len = remainder.len();

        Ok(())
    }

    /// Pads the buffered tail, compresses the final block(s) and outputs H(N)
    pub fn finalize(mut self) -> Digest {
        // total_len was bounded in update()
        let bits = self.total_len * 8;

        let mut tail = [0u8; 2 * BLOCK_LEN];
        let tail_len = pad_tail(&self.buffer[..self.buffer_len], bits, &mut tail);

        for chunk in tail[..tail_len].chunks_exact(BLOCK_LEN) {
            self.buffer.copy_from_slice(chunk);
            compress_block(&mut self.state, &self.buffer);
        }

        Digest::from_state(&self.state)
    }

    /// Reset to H(0) for reuse
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
