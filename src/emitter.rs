// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Program skeletons that print a decoded payload.
//!
//! The payload is substituted into a fixed template exactly once. Nothing
//! here parses or validates the result.

use crate::codec;
use crate::error::DecodeError;
use crate::syntax::TargetLanguage;

/// Escapes `"` and newlines so the payload stays inside one string literal.
pub fn escape_payload(ascii: &str) -> String {
    ascii.replace('"', "\\\"").replace('\n', "\\n")
}

/// Wraps `ascii` in the program skeleton for `language`.
pub fn emit(ascii: &str, language: TargetLanguage) -> String {
    let payload = escape_payload(ascii);

    match language {
        TargetLanguage::C => format!(
            "#include <stdio.h>\n\
             \n\
             int main() {{\n  \
             // Binary converted to C\n  \
             printf(\"{payload}\");\n  \
             return 0;\n\
             }}"
        ),
        TargetLanguage::Cpp => format!(
            "#include <iostream>\n\
             \n\
             int main() {{\n  \
             // Binary converted to C++\n  \
             std::cout << \"{payload}\" << std::endl;\n  \
             return 0;\n\
             }}"
        ),
        TargetLanguage::CShell => format!(
            "#!/bin/csh\n\
             # Binary converted to C Shell\n\
             \n\
             echo \"{payload}\""
        ),
    }
}

/// Decodes `bits` and emits the result.
///
/// A decode failure is returned as-is; the template is never filled with it.
pub fn emit_bits(bits: &str, language: TargetLanguage) -> Result<String, DecodeError> {
    let ascii = codec::decode(bits)?;
    Ok(emit(&ascii, language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_c() {
        let source = emit("Hi", TargetLanguage::C);
        assert!(source.contains("#include <stdio.h>"));
        assert!(source.contains("printf(\"Hi\");"));
        assert_eq!(
            source,
            "#include <stdio.h>\n\nint main() {\n  // Binary converted to C\n  \
             printf(\"Hi\");\n  return 0;\n}"
        );
    }

    #[test]
    fn test_emit_cpp() {
        let source = emit("Hi", TargetLanguage::Cpp);
        assert!(source.contains("#include <iostream>"));
        assert!(source.contains("std::cout << \"Hi\" << std::endl;"));
        assert!(source.starts_with("#include <iostream>\n\nint main() {\n"));
        assert!(source.contains("  // Binary converted to C++\n"));
        assert!(source.ends_with("  return 0;\n}"));
    }

    #[test]
    fn test_emit_cshell_escapes_quotes() {
        let source = emit("He said \"hi\"", TargetLanguage::CShell);
        assert_eq!(
            source,
            "#!/bin/csh\n# Binary converted to C Shell\n\necho \"He said \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_emit_escapes_newlines() {
        for language in TargetLanguage::ALL {
            let source = emit("a\nb", language);
            assert!(source.contains("a\\nb"));
            assert_eq!(source.lines().count(), emit("ab", language).lines().count());
        }
        assert_eq!(emit("a\nb", TargetLanguage::C).lines().count(), 7);
    }

    #[test]
    fn test_escape_payload() {
        assert_eq!(escape_payload("plain"), "plain");
        assert_eq!(escape_payload("\"\n\""), "\\\"\\n\\\"");
    }

    #[test]
    fn test_emit_bits() {
        let source = emit_bits("01001000 01101001", TargetLanguage::C).unwrap();
        assert!(source.contains("printf(\"Hi\");"));
    }

    #[test]
    fn test_emit_bits_short_circuits_on_decode_failure() {
        for language in TargetLanguage::ALL {
            assert_eq!(emit_bits("0100100", language), Err(DecodeError::MisalignedLength));
            assert_eq!(emit_bits("0102", language), Err(DecodeError::InvalidCharacters));
        }
    }
}
