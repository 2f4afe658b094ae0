// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashsmith CLI
//!
//! Argument parsing and dispatch for the `hashsmith` binary. Kept in a
//! library so the command can be driven with in-memory input and output.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod preset;

use std::io::{Read, Write};

use anyhow::Context;
use clap::{ArgGroup, Parser};
use hashsmith::{OutputFormat, digest_text};

pub use preset::Preset;

/// SHA-256 digest of text.
///
/// Hashes the UTF-8 bytes of the given text exactly as received (a trailing
/// newline read from stdin is part of the text) and prints the digest.
#[derive(Parser, Debug)]
#[command(name = "hashsmith", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "stdin", "example"])))]
pub struct Cli {
    /// Text to hash
    pub text: Option<String>,

    /// Read the text to hash from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Hash one of the built-in example texts
    #[arg(long, value_enum)]
    pub example: Option<Preset>,

    /// Output format: hex or base64
    #[arg(short, long, env = "HASHSMITH_FORMAT", default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,
}

/// Runs the command, reading `--stdin` input from `stdin` and writing the
/// digest line to `out`.
///
/// Blank input (empty or whitespace only) writes nothing.
pub fn run<R: Read, W: Write>(cli: &Cli, mut stdin: R, mut out: W) -> anyhow::Result<()> {
    let text = match (&cli.text, cli.example) {
        (Some(text), _) => text.clone(),
        (None, Some(preset)) => preset.text().to_owned(),
        (None, None) => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("Failed to read UTF-8 text from stdin")?;
            text
        }
    };

    if text.trim().is_empty() {
        tracing::warn!("input is blank, no digest produced");
        return Ok(());
    }

    let digest = digest_text(&text, cli.format).context("Failed to compute digest")?;
    writeln!(out, "{digest}").context("Failed to write digest")?;

    Ok(())
}
