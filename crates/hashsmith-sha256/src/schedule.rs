// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};
use crate::word::{small_sigma0, small_sigma1};

/// Message schedule W[0..63] of one block per FIPS 180-4 Section 6.2.2 step 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule([u32; SCHEDULE_LEN]);

impl MessageSchedule {
    /// Expands a 64-byte block into 64 words.
    pub fn from_block(block: &[u8; BLOCK_LEN]) -> Self {
        let mut w = [0u32; SCHEDULE_LEN];

        // W[0..15] from block (big-endian)
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in 16..SCHEDULE_LEN {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        Self(w)
    }

    /// Schedule words in round order
    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.0
    }
}
