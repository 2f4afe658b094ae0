// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::consts::HASH_LEN;

/// 32-byte SHA-256 digest.
///
/// `Display` renders lowercase hex, most significant nibble first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    /// Serializes the final hash state H(N): words 0..7, each big-endian.
    pub fn from_state(state: &[u32; 8]) -> Self {
        let mut out = [0u8; HASH_LEN];

        for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }

        Self(out)
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Consumes the digest, returning its bytes
    pub fn into_bytes(self) -> [u8; HASH_LEN] {
        self.0
    }

    /// Reads the digest back as the 8 big-endian state words it was built from
    pub fn to_words(&self) -> [u32; 8] {
        let mut words = [0u32; 8];

        for (word, bytes) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        words
    }
}

impl From<[u8; HASH_LEN]> for Digest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
