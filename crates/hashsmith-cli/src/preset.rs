// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use clap::ValueEnum;

/// Built-in example texts
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// `Hello, World!`
    Text,
    /// `MySecurePassword123`
    Password,
    /// `user@example.com`
    Email,
    /// `https://www.example.com/page`
    Url,
}

impl Preset {
    /// Example text
    pub const fn text(self) -> &'static str {
        match self {
            Preset::Text => "Hello, World!",
            Preset::Password => "MySecurePassword123",
            Preset::Email => "user@example.com",
            Preset::Url => "https://www.example.com/page",
        }
    }
}
