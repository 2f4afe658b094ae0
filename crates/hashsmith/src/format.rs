// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use hashsmith_sha256::Digest;

use crate::error::HashsmithError;

/// How a digest is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// 64 lowercase hex characters, most significant nibble first
    #[default]
    Hex,
    /// 44 characters of standard Base64, ending in a single `=`
    Base64,
}

impl OutputFormat {
    /// Every format, in tag order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Hex, OutputFormat::Base64];

    /// Tag naming this format
    pub const fn tag(self) -> &'static str {
        match self {
            OutputFormat::Hex => "hex",
            OutputFormat::Base64 => "base64",
        }
    }

    /// Length in characters of a rendered digest
    pub const fn output_len(self) -> usize {
        match self {
            OutputFormat::Hex => 64,
            OutputFormat::Base64 => 44,
        }
    }

    /// Renders `digest` in this format
    pub fn encode(self, digest: &Digest) -> String {
        match self {
            OutputFormat::Hex => hex::encode(digest.as_bytes()),
            OutputFormat::Base64 => STANDARD.encode(digest.as_bytes()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = HashsmithError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.tag() == tag)
            .ok_or_else(|| HashsmithError::InvalidArgument {
                format: tag.to_owned(),
            })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
