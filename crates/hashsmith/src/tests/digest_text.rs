// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hashsmith_vectors::{run_text_vectors, vector};

use crate::error::HashsmithError;
use crate::format::OutputFormat;
use crate::{digest_text, digest_text_with_tag, digest_utf16};

#[test]
fn test_digest_text_abc_hex() {
    // Scenario: ASCII bytes 0x61 0x62 0x63, hex output
    assert_eq!(
        digest_text("abc", OutputFormat::Hex).expect("Failed to digest_text(..)"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_digest_text_empty_hex() {
    assert_eq!(
        digest_text("", OutputFormat::Hex).expect("Failed to digest_text(..)"),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_digest_text_hello_world_hex() {
    assert_eq!(
        digest_text("Hello, World!", OutputFormat::Hex).expect("Failed to digest_text(..)"),
        "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
    );
}

#[test]
fn test_digest_text_matches_hex_vectors() {
    run_text_vectors(
        |text| digest_text(text, OutputFormat::Hex).expect("Failed to digest_text(..)"),
        |v| v.hex,
    );
}

#[test]
fn test_digest_text_matches_base64_vectors() {
    run_text_vectors(
        |text| digest_text(text, OutputFormat::Base64).expect("Failed to digest_text(..)"),
        |v| v.base64,
    );
}

#[test]
fn test_digest_text_with_tag_selects_format() {
    let v = vector("preset-text");
    let text = v.message.text();

    assert_eq!(
        digest_text_with_tag(&text, "hex").expect("Failed to digest_text_with_tag(..)"),
        v.hex
    );
    assert_eq!(
        digest_text_with_tag(&text, "base64").expect("Failed to digest_text_with_tag(..)"),
        v.base64
    );
}

#[test]
fn test_digest_text_with_unknown_tag_is_invalid_argument() {
    assert_eq!(
        digest_text_with_tag("abc", "sha1"),
        Err(HashsmithError::InvalidArgument {
            format: "sha1".to_owned()
        })
    );
}

#[test]
fn test_digest_utf16_matches_digest_text() {
    for name in ["astral-emoji", "latin-1-accents", "preset-url", "empty"] {
        let text = vector(name).message.text();
        let units: Vec<u16> = text.encode_utf16().collect();

        for format in OutputFormat::ALL {
            assert_eq!(
                digest_utf16(&units, format).expect("Failed to digest_utf16(..)"),
                digest_text(&text, format).expect("Failed to digest_text(..)"),
                "vector {name}, format {format}"
            );
        }
    }
}

#[test]
fn test_digest_utf16_rejects_unpaired_surrogate() {
    assert_eq!(
        digest_utf16(&[0xDE00], OutputFormat::Hex),
        Err(HashsmithError::MalformedText { index: 0 })
    );
}
