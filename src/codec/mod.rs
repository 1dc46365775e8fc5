// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Conversion between bit-strings and text.
//!
//! A bit-string is a run of `0`/`1` characters, optionally broken up by
//! whitespace, where every eight bits (most significant first) form one
//! character code.

pub mod decode;
pub mod encode;

pub use decode::{decode, strip_whitespace};
pub use encode::encode;

/// Number of bits that make up one decoded character.
pub const BITS_PER_CHAR: usize = 8;
