// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hashsmith_sha256::Sha256Error;
use thiserror::Error;

/// Errors returned by the text digest entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashsmithError {
    /// Output format tag is neither `hex` nor `base64`
    #[error("invalid output format {format:?}, expected \"hex\" or \"base64\"")]
    InvalidArgument {
        /// Rejected tag
        format: String,
    },

    /// Text bit length does not fit the 64-bit SHA-256 length field
    #[error(transparent)]
    InputTooLarge(#[from] Sha256Error),

    /// UTF-16 input holds a surrogate without its other half
    #[error("unpaired UTF-16 surrogate at code unit {index}")]
    MalformedText {
        /// Position of the offending code unit
        index: usize,
    },
}
