// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text to bytes

use crate::error::HashsmithError;

/// UTF-8 bytes of `text`.
///
/// `str` is UTF-8 already, so this is a view, not a copy.
#[inline]
pub fn encode_text(text: &str) -> &[u8] {
    text.as_bytes()
}

/// UTF-8 bytes of text given as UTF-16 code units.
///
/// Surrogate pairs are decoded to full code points first, so characters
/// outside the Basic Multilingual Plane encode to 4 bytes, exactly as the
/// same text given as a `str`.
///
/// # Errors
///
/// Returns [`HashsmithError::MalformedText`] with the index of the first
/// unpaired surrogate.
pub fn encode_utf16_units(units: &[u16]) -> Result<Vec<u8>, HashsmithError> {
    let mut bytes = Vec::with_capacity(units.len() * 3);
    let mut index = 0;
    let mut buf = [0u8; 4];

    for decoded in char::decode_utf16(units.iter().copied()) {
        let c = decoded.map_err(|_| HashsmithError::MalformedText { index })?;
        bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        index += c.len_utf16();
    }

    Ok(bytes)
}
