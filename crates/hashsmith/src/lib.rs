// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashsmith
//!
//! SHA-256 digests of text, rendered for display.
//!
//! The text is encoded as UTF-8, hashed with the first-principles
//! [`hashsmith_sha256`] implementation, and rendered as 64 lowercase hex
//! characters or 44 Base64 characters.
//!
//! ## Example
//!
//! ```rust
//! use hashsmith::{OutputFormat, digest_text, digest_text_with_tag};
//!
//! let hex = digest_text("abc", OutputFormat::Hex).expect("Failed to digest text");
//! assert_eq!(hex, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//!
//! let b64 = digest_text_with_tag("abc", "base64").expect("Failed to digest text");
//! assert_eq!(b64, "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
//!
//! assert!(digest_text_with_tag("abc", "md5").is_err());
//! ```
//!
//! ## Text sources
//!
//! - [`digest_text`]: Rust strings, already UTF-8.
//! - [`digest_utf16`]: UTF-16 code units from a UTF-16 host. Surrogate pairs
//!   become one 4-byte UTF-8 sequence; unpaired surrogates are rejected.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod format;
mod text;

pub use error::HashsmithError;
pub use format::OutputFormat;
pub use hashsmith_sha256::{Digest, HASH_LEN};
pub use text::{encode_text, encode_utf16_units};

use hashsmith_sha256::{BLOCK_LEN, sha256};

/// SHA-256 of `text` rendered in `format`.
///
/// # Errors
///
/// Returns [`HashsmithError::InputTooLarge`] if the text is too long for the
/// 64-bit length field.
pub fn digest_text(text: &str, format: OutputFormat) -> Result<String, HashsmithError> {
    digest_bytes(encode_text(text), format)
}

/// SHA-256 of `text` rendered in the format named by `tag` (`hex` or `base64`).
///
/// # Errors
///
/// Returns [`HashsmithError::InvalidArgument`] for any other tag; no digest
/// is computed in that case.
pub fn digest_text_with_tag(text: &str, tag: &str) -> Result<String, HashsmithError> {
    let format = tag.parse::<OutputFormat>().inspect_err(|_| {
        tracing::warn!(tag, "rejected output format");
    })?;

    digest_text(text, format)
}

/// SHA-256 of text given as UTF-16 code units, rendered in `format`.
///
/// # Errors
///
/// Returns [`HashsmithError::MalformedText`] if the units contain an
/// unpaired surrogate.
pub fn digest_utf16(units: &[u16], format: OutputFormat) -> Result<String, HashsmithError> {
    let bytes = encode_utf16_units(units)?;
    digest_bytes(&bytes, format)
}

fn digest_bytes(bytes: &[u8], format: OutputFormat) -> Result<String, HashsmithError> {
    let digest = sha256(bytes)?;

    tracing::debug!(
        input_len = bytes.len(),
        blocks = bytes.len().saturating_add(9).div_ceil(BLOCK_LEN),
        %format,
        "computed sha-256 digest"
    );

    Ok(format.encode(&digest))
}
