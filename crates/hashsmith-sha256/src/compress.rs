// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::{BLOCK_LEN, K256};
use crate::schedule::MessageSchedule;
use crate::word::{big_sigma0, big_sigma1, ch, maj};

/// SHA-256 compression function (single block)
///
/// Updates hash state `h` with a single 512-bit message block per
/// FIPS 180-4 Section 6.2.2. Blocks must be fed in message order: each call
/// consumes the state left by the previous one.
///
/// # Arguments
/// * `h` - Hash state (8 × u32, input/output)
/// * `block` - Message block (64 bytes)
pub fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let schedule = MessageSchedule::from_block(block);

    // Working variables a..h seeded from H(i-1)
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh] = *h;

    for (k, w) in K256.iter().zip(schedule.words()) {
        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = hh
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*w);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // H(i) = H(i-1) + working variables
    for (word, register) in h.iter_mut().zip([a, b, c, d, e, f, g, hh]) {
        *word = word.wrapping_add(register);
    }
}
