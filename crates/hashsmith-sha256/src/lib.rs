// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 implemented from first principles
//!
//! Implementation per FIPS 180-4 Section 6.2. No platform or third-party
//! hash primitives are used.
//!
//! The pipeline is split into its FIPS stages so each one can be tested on
//! its own:
//!
//! - [`pad_message`]: Section 5.1.1 padding
//! - [`MessageSchedule`]: Section 6.2.2 step 1
//! - [`compress_block`]: Section 6.2.2 steps 2-4
//! - [`Digest`]: big-endian serialization of H(N)
//!
//! [`sha256`] runs the whole pipeline over a complete message, and
//! [`Sha256`] offers the same computation incrementally.
//!
//! ```
//! use hashsmith_sha256::{Sha256, sha256};
//!
//! let digest = sha256(b"abc").expect("message fits the length field");
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a").expect("message fits the length field");
//! hasher.update(b"bc").expect("message fits the length field");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod error;
mod hasher;
mod pad;
mod schedule;
mod word;

pub use compress::compress_block;
pub use consts::{BLOCK_LEN, H0, HASH_LEN};
pub use digest::Digest;
pub use error::Sha256Error;
pub use hasher::Sha256;
pub use pad::pad_message;
pub use schedule::MessageSchedule;

/// SHA-256 of a complete message.
///
/// Pads the message, then compresses every 512-bit block in order starting
/// from [`H0`].
///
/// # Errors
///
/// Returns [`Sha256Error::InputTooLarge`] if the message bit length does not
/// fit the 64-bit length field.
pub fn sha256(message: &[u8]) -> Result<Digest, Sha256Error> {
    let padded = pad_message(message)?;

    let mut state = H0;
    let mut block = [0u8; BLOCK_LEN];

    for chunk in padded.chunks_exact(BLOCK_LEN) {
        block.copy_from_slice(chunk);
        compress_block(&mut state, &block);
    }

    Ok(Digest::from_state(&state))
}
