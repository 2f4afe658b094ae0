// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reference SHA-256 vectors and runners shared by the hashsmith test suites.
//!
//! Every expected value was checked against the FIPS 180-4 examples or an
//! independent SHA-256 implementation.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
//! [2] NIST SHA-256 Examples PDF
//!     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf
//! [3] RFC 6234 Section 8.5 test driver vectors
//!     https://www.rfc-editor.org/rfc/rfc6234.html

#![warn(missing_docs)]

mod vectors;

pub use vectors::VECTORS;

/// Message of a reference vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Literal UTF-8 text
    Text(&'static str),
    /// `count` repetitions of an ASCII byte
    Repeated {
        /// Repeated byte
        byte: u8,
        /// Number of repetitions
        count: usize,
    },
}

impl Message {
    /// Message bytes as hashed
    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            Message::Text(text) => text.as_bytes().to_vec(),
            Message::Repeated { byte, count } => vec![byte; count],
        }
    }

    /// Message as text. All vectors are valid UTF-8.
    pub fn text(&self) -> String {
        match *self {
            Message::Text(text) => text.to_owned(),
            Message::Repeated { byte, count } => char::from(byte).to_string().repeat(count),
        }
    }

    /// Message length in bytes
    pub fn len(&self) -> usize {
        match *self {
            Message::Text(text) => text.len(),
            Message::Repeated { count, .. } => count,
        }
    }

    /// Whether the message is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// SHA-256 reference vector
#[derive(Debug, Clone, Copy)]
pub struct DigestVector {
    /// Short description used in assertion messages
    pub name: &'static str,
    /// Hashed message
    pub message: Message,
    /// Expected digest, lowercase hex
    pub hex: &'static str,
    /// Expected digest, standard Base64 with padding
    pub base64: &'static str,
}

impl DigestVector {
    /// Expected digest bytes
    pub fn digest(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        hex::decode_to_slice(self.hex, &mut out)
            .unwrap_or_else(|e| panic!("vector {}: malformed hex: {e}", self.name));
        out
    }
}

/// Looks up a vector by name.
///
/// # Panics
///
/// Panics if no vector has that name.
pub fn vector(name: &str) -> &'static DigestVector {
    VECTORS
        .iter()
        .find(|v| v.name == name)
        .unwrap_or_else(|| panic!("no vector named {name:?}"))
}

/// Runs `digest` over every vector message and compares with the expected bytes.
pub fn run_digest_vectors<F>(mut digest: F)
where
    F: FnMut(&[u8]) -> [u8; 32],
{
    for v in VECTORS {
        let got = digest(&v.message.bytes());
        assert_eq!(
            hex::encode(got),
            v.hex,
            "digest mismatch for vector {:?} ({} bytes)",
            v.name,
            v.message.len()
        );
    }
}

/// Runs `encode` over every vector as text and compares with the expected
/// rendering chosen by `expected`.
pub fn run_text_vectors<F, E>(mut encode: F, expected: E)
where
    F: FnMut(&str) -> String,
    E: Fn(&DigestVector) -> &'static str,
{
    for v in VECTORS {
        let got = encode(&v.message.text());
        assert_eq!(
            got,
            expected(v),
            "output mismatch for vector {:?} ({} bytes)",
            v.name,
            v.message.len()
        );
    }
}
