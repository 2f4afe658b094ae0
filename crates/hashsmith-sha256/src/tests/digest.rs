// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::H0;
use crate::digest::Digest;

#[test]
fn test_from_state_writes_words_big_endian_in_order() {
    let digest = Digest::from_state(&[
        0x0011_2233,
        0x4455_6677,
        0x8899_aabb,
        0xccdd_eeff,
        0x0102_0304,
        0x0506_0708,
        0x090a_0b0c,
        0x0d0e_0f10,
    ]);

    assert_eq!(
        digest.as_bytes(),
        &[
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
            0x0d, 0x0e, 0x0f, 0x10,
        ]
    );
}

#[test]
fn test_to_words_inverts_from_state() {
    let digest = Digest::from_state(&H0);
    assert_eq!(digest.to_words(), H0);
}

#[test]
fn test_display_is_lowercase_hex() {
    let digest = Digest::from_state(&H0);
    let rendered = digest.to_string();

    assert_eq!(
        rendered,
        "6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19"
    );
    assert_eq!(format!("{digest:x}"), rendered);
}

#[test]
fn test_display_keeps_leading_zero_nibbles() {
    let digest = Digest::from([0x0f; 32]);
    assert_eq!(digest.to_string(), "0f".repeat(32));
}

#[test]
fn test_debug_wraps_hex() {
    let digest = Digest::from([0xab; 32]);
    assert_eq!(format!("{digest:?}"), format!("Digest({})", "ab".repeat(32)));
}

#[test]
fn test_byte_accessors_agree() {
    let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
    let digest = Digest::from(bytes);

    assert_eq!(digest.as_bytes(), &bytes);
    assert_eq!(digest.as_ref(), &bytes[..]);
    assert_eq!(digest.into_bytes(), bytes);
}
