// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.1

use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::Sha256Error;

/// Bit length of a message of `byte_len` bytes, as stored in the length field.
#[inline]
pub(crate) fn bit_len(byte_len: u64) -> Result<u64, Sha256Error> {
    byte_len.checked_mul(8).ok_or(Sha256Error::InputTooLarge)
}

/// Writes the final padded block(s) for a trailing partial block.
///
/// `rest` holds the bytes after the last full block (`rest.len() < BLOCK_LEN`).
/// Returns the number of bytes written to `out`: one block, or two when the
/// `0x80` marker and the length field do not fit after `rest`.
pub(crate) fn pad_tail(rest: &[u8], bit_len: u64, out: &mut [u8; 2 * BLOCK_LEN]) -> usize {
    debug_assert!(rest.len() < BLOCK_LEN);

    out.fill(0);
    out[..rest.len()].copy_from_slice(rest);
    out[rest.len()] = 0x80;

    let tail_len = if rest.len() + 1 + LENGTH_FIELD_LEN > BLOCK_LEN {
        2 * BLOCK_LEN
    } else {
        BLOCK_LEN
    };

    out[tail_len - LENGTH_FIELD_LEN..tail_len].copy_from_slice(&bit_len.to_be_bytes());

    tail_len
}

/// Pads a complete message to a multiple of 512 bits.
///
/// Layout: message, `0x80`, zero bytes until the length is 56 mod 64, then
/// the original bit length as a 64-bit big-endian integer. A 55-byte tail
/// gets no zero bytes at all.
///
/// # Errors
///
/// Returns [`Sha256Error::InputTooLarge`] if the bit length does not fit in
/// 64 bits.
pub fn pad_message(message: &[u8]) -> Result<Vec<u8>, Sha256Error> {
    let bits = bit_len(message.len() as u64)?;

    let full_len = message.len() - message.len() % BLOCK_LEN;
    let (full, rest) = message.split_at(full_len);

    let mut tail = [0u8; 2 * BLOCK_LEN];
    let tail_len = pad_tail(rest, bits, &mut tail);

    let mut padded = Vec::with_capacity(full_len + tail_len);
    padded.extend_from_slice(full);
    padded.extend_from_slice(&tail[..tail_len]);

    Ok(padded)
}
