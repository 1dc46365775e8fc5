// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types shared across the crate.
//!
//! The `Display` text of each variant is the notice shown to the user.

use thiserror::Error;

/// Reasons a bit-string cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Nothing left after stripping whitespace, or a character other than `0`/`1`.
    #[error("Invalid binary input")]
    InvalidCharacters,

    /// The stripped bit count is not a multiple of eight.
    #[error("Binary length must be a multiple of 8")]
    MisalignedLength,
}

/// Reasons text cannot be turned back into a bit-string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("character {ch:?} at position {position} does not fit in a single byte")]
    Unrepresentable { ch: char, position: usize },
}

/// Failures surfaced by a conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input was empty or whitespace only; rejected before decoding.
    #[error("Please enter binary code")]
    EmptyInput,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown target language `{0}` (expected c, cpp or cshell)")]
    UnknownLanguage(String),

    #[error("unknown output format `{0}` (expected plain, html or ansi)")]
    UnknownFormat(String),

    #[error("unsupported color depth {0} (expected 16 or 256)")]
    UnsupportedColorDepth(u16),

    #[error("unknown token class `{0}`")]
    UnknownTokenClass(String),

    #[error("unknown color `{0}`")]
    UnknownColor(String),

    #[error("expected CLASS=COLOR, got `{0}`")]
    MalformedColorOverride(String),
}
