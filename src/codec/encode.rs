// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::error::EncodeError;

/// Encodes text as a bit-string, one space-separated 8-bit group per character.
///
/// Only characters with a code point up to 255 fit in a group.
pub fn encode(text: &str) -> Result<String, EncodeError> {
    let groups = text
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch)
                .map(|byte| format!("{byte:08b}"))
                .map_err(|_| EncodeError::Unrepresentable { ch, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(groups.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello() {
        assert_eq!(encode("Hello").unwrap(), "01001000 01100101 01101100 01101100 01101111");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn test_encode_pads_to_eight_bits() {
        assert_eq!(encode("\n").unwrap(), "00001010");
        assert_eq!(encode("\u{ff}").unwrap(), "11111111");
    }

    #[test]
    fn test_encode_rejects_wide_characters() {
        assert_eq!(
            encode("ab€").unwrap_err(),
            EncodeError::Unrepresentable { ch: '€', position: 2 }
        );
    }
}
