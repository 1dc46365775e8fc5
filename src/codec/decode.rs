// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::codec::BITS_PER_CHAR;
use crate::error::DecodeError;

/// Removes every whitespace character from `bits`.
pub fn strip_whitespace(bits: &str) -> String {
    bits.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Decodes a bit-string into text.
///
/// Whitespace is ignored. The remaining characters must all be `0` or `1`
/// and there must be at least one full byte of them; otherwise the result is
/// [`DecodeError::InvalidCharacters`]. A bit count that is not a multiple of
/// eight yields [`DecodeError::MisalignedLength`]. The character check runs
/// first.
///
/// Each 8-bit chunk is read most significant bit first and mapped to the
/// character with that code point (`0..=255`).
pub fn decode(bits: &str) -> Result<String, DecodeError> {
    let clean = strip_whitespace(bits);

    if clean.is_empty() || !clean.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(DecodeError::InvalidCharacters);
    }
    if clean.len() % BITS_PER_CHAR != 0 {
        return Err(DecodeError::MisalignedLength);
    }

    Ok(clean
        .as_bytes()
        .chunks_exact(BITS_PER_CHAR)
        .map(|chunk| char::from(chunk.iter().fold(0u8, |acc, bit| (acc << 1) | (bit - b'0'))))
        .collect())
}
