// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hashsmith_vectors::vector;

use crate::compress::compress_block;
use crate::consts::{BLOCK_LEN, H0};
use crate::digest::Digest;
use crate::pad::pad_message;

fn padded_blocks(message: &[u8]) -> Vec<[u8; BLOCK_LEN]> {
    pad_message(message)
        .expect("Failed to pad_message(..)")
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            block
        })
        .collect()
}

fn expected_words(name: &str) -> [u32; 8] {
    Digest::from(vector(name).digest()).to_words()
}

#[test]
fn test_compress_single_block_abc() {
    let blocks = padded_blocks(b"abc");
    assert_eq!(blocks.len(), 1);

    let mut h = H0;
    compress_block(&mut h, &blocks[0]);

    // H(1) per NIST example
    assert_eq!(
        h,
        [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    );
    assert_eq!(h, expected_words("abc"));
}

#[test]
fn test_compress_chains_two_blocks() {
    let message = vector("fips-two-block-56").message.bytes();
    let blocks = padded_blocks(&message);
    assert_eq!(blocks.len(), 2);

    let mut h = H0;
    compress_block(&mut h, &blocks[0]);
    let intermediate = h;
    compress_block(&mut h, &blocks[1]);

    // H(1) per NIST two-block example
    assert_eq!(
        intermediate,
        [
            0x85e655d6, 0x417a1795, 0x3363376a, 0x624cde5c, 0x76e09589, 0xcac5f811, 0xcc4b32c1,
            0xf20e533a,
        ]
    );
    assert_eq!(h, expected_words("fips-two-block-56"));
}

#[test]
fn test_compress_block_order_matters() {
    let message = vector("fips-two-block-112").message.bytes();
    let blocks = padded_blocks(&message);

    let mut in_order = H0;
    compress_block(&mut in_order, &blocks[0]);
    compress_block(&mut in_order, &blocks[1]);

    let mut swapped = H0;
    compress_block(&mut swapped, &blocks[1]);
    compress_block(&mut swapped, &blocks[0]);

    assert_eq!(in_order, expected_words("fips-two-block-112"));
    assert_ne!(in_order, swapped);
}

#[test]
fn test_compress_depends_on_incoming_state() {
    let blocks = padded_blocks(b"abc");

    let mut from_h0 = H0;
    compress_block(&mut from_h0, &blocks[0]);

    let mut from_zero = [0u32; 8];
    compress_block(&mut from_zero, &blocks[0]);

    assert_ne!(from_h0, from_zero);
}
