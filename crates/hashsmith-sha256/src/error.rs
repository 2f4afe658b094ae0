// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// SHA-256 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// Message bit length does not fit the 64-bit length field (2^61 bytes or more)
    #[error("message bit length does not fit the 64-bit length field")]
    InputTooLarge,
}
