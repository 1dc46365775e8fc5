// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Target languages and their highlighting rule tables.
//!
//! Each target language owns a frozen set of compiled patterns (comments,
//! keywords, type names). The tables are built lazily on first use and never
//! mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;

/// Languages a decoded payload can be emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetLanguage {
    /// A C program printing the payload with `printf`
    #[default]
    C,
    /// A C++ program writing the payload to `std::cout`
    Cpp,
    /// A C shell script echoing the payload
    CShell,
}

impl TargetLanguage {
    /// All target languages, in selector order.
    pub const ALL: [TargetLanguage; 3] =
        [TargetLanguage::C, TargetLanguage::Cpp, TargetLanguage::CShell];

    /// Returns the display name of the language.
    pub fn display_name(self) -> &'static str {
        match self {
            TargetLanguage::C => "C",
            TargetLanguage::Cpp => "C++",
            TargetLanguage::CShell => "C Shell",
        }
    }

    /// Returns the short identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            TargetLanguage::C => "c",
            TargetLanguage::Cpp => "cpp",
            TargetLanguage::CShell => "cshell",
        }
    }

    /// Resolves a language name leniently.
    ///
    /// Unknown names fall back to C, the same way the output view treats an
    /// unrecognised tab.
    pub fn resolve(name: &str) -> TargetLanguage {
        name.parse().unwrap_or_else(|_| {
            debug!(name, "unknown target language, falling back to C");
            TargetLanguage::C
        })
    }

    /// Returns the highlighting rules for this language.
    pub fn rules(self) -> &'static LanguageRules {
        match self {
            TargetLanguage::C => &C_RULES,
            TargetLanguage::Cpp => &CPP_RULES,
            TargetLanguage::CShell => &CSHELL_RULES,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TargetLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        NAME_MAP
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownLanguage(s.to_string()))
    }
}

/// Accepted spellings for each language, lowercased.
static NAME_MAP: Lazy<HashMap<&'static str, TargetLanguage>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert("c", TargetLanguage::C);

    map.insert("cpp", TargetLanguage::Cpp);
    map.insert("c++", TargetLanguage::Cpp);
    map.insert("cxx", TargetLanguage::Cpp);

    map.insert("cshell", TargetLanguage::CShell);
    map.insert("c shell", TargetLanguage::CShell);
    map.insert("csh", TargetLanguage::CShell);

    map
});

/// Compiled per-language patterns for the comment, keyword and type passes.
#[derive(Debug)]
pub struct LanguageRules {
    /// The language these rules apply to
    pub language: TargetLanguage,
    /// Line and block comments
    pub comments: Regex,
    /// Reserved words
    pub keywords: Regex,
    /// Recognised type names
    pub types: Regex,
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "class", "const", "continue", "default", "delete", "do",
    "double", "else", "enum", "extern", "float", "for", "friend", "goto", "if", "inline", "int",
    "long", "namespace", "new", "operator", "private", "protected", "public", "register",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "template", "this",
    "throw", "try", "typedef", "union", "unsigned", "using", "virtual", "void", "volatile",
    "while",
];

const CSHELL_KEYWORDS: &[&str] = &[
    "alias", "break", "breaksw", "case", "cd", "continue", "default", "echo", "else", "end",
    "endif", "endsw", "eval", "exec", "exit", "foreach", "goto", "if", "logout", "nice", "nohup",
    "onintr", "repeat", "set", "setenv", "shift", "source", "switch", "then", "umask", "unalias",
    "unset", "unsetenv", "wait", "while",
];

const C_TYPES: &[&str] = &["bool", "FILE", "size_t", "time_t"];

const CPP_TYPES: &[&str] = &[
    "bool", "string", "vector", "map", "set", "list", "queue", "stack", "FILE", "size_t", "time_t",
];

const CSHELL_TYPES: &[&str] = &["string"];

const C_FAMILY_COMMENTS: &str = r"(?m)//.*$|/\*[\s\S]*?\*/";
const SHELL_COMMENTS: &str = r"(?m)#.*$";

/// Builds a `\b(a|b|c)\b` alternation from a word list.
fn word_pattern(words: &[&str]) -> Regex {
    let alternation = words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"\b({alternation})\b")).expect("word list compiles to a valid regex")
}

fn build_rules(
    language: TargetLanguage,
    comments: &str,
    keywords: &[&str],
    types: &[&str],
) -> LanguageRules {
    LanguageRules {
        language,
        comments: Regex::new(comments).expect("comment pattern is a valid regex"),
        keywords: word_pattern(keywords),
        types: word_pattern(types),
    }
}

static C_RULES: Lazy<LanguageRules> =
    Lazy::new(|| build_rules(TargetLanguage::C, C_FAMILY_COMMENTS, C_KEYWORDS, C_TYPES));

static CPP_RULES: Lazy<LanguageRules> =
    Lazy::new(|| build_rules(TargetLanguage::Cpp, C_FAMILY_COMMENTS, CPP_KEYWORDS, CPP_TYPES));

static CSHELL_RULES: Lazy<LanguageRules> = Lazy::new(|| {
    build_rules(TargetLanguage::CShell, SHELL_COMMENTS, CSHELL_KEYWORDS, CSHELL_TYPES)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_names() {
        assert_eq!("c".parse::<TargetLanguage>().unwrap(), TargetLanguage::C);
        assert_eq!("cpp".parse::<TargetLanguage>().unwrap(), TargetLanguage::Cpp);
        assert_eq!("C++".parse::<TargetLanguage>().unwrap(), TargetLanguage::Cpp);
        assert_eq!("cshell".parse::<TargetLanguage>().unwrap(), TargetLanguage::CShell);
        assert_eq!("C Shell".parse::<TargetLanguage>().unwrap(), TargetLanguage::CShell);
        assert_eq!(" csh ".parse::<TargetLanguage>().unwrap(), TargetLanguage::CShell);
    }

    #[test]
    fn test_unknown_language() {
        let err = "fortran".parse::<TargetLanguage>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownLanguage("fortran".to_string()));

        assert_eq!(TargetLanguage::resolve("fortran"), TargetLanguage::C);
        assert_eq!(TargetLanguage::resolve("c++"), TargetLanguage::Cpp);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TargetLanguage::C.to_string(), "C");
        assert_eq!(TargetLanguage::Cpp.to_string(), "C++");
        assert_eq!(TargetLanguage::CShell.to_string(), "C Shell");
    }

    #[test]
    fn test_id_round_trips_through_parse() {
        for language in TargetLanguage::ALL {
            assert_eq!(language.id().parse::<TargetLanguage>().unwrap(), language);
        }
    }

    #[test]
    fn test_keyword_tables_are_distinct() {
        let c = TargetLanguage::C.rules();
        let cpp = TargetLanguage::Cpp.rules();
        let csh = TargetLanguage::CShell.rules();

        for word in ["class", "template", "virtual"] {
            assert!(!c.keywords.is_match(word), "{word} is not a C keyword");
            assert!(cpp.keywords.is_match(word), "{word} is a C++ keyword");
        }
        for word in ["foreach", "endif", "setenv"] {
            assert!(csh.keywords.is_match(word));
            assert!(!c.keywords.is_match(word));
        }
        assert!(!c.keywords.is_match("integer"));
    }

    #[test]
    fn test_type_tables() {
        assert!(TargetLanguage::C.rules().types.is_match("size_t"));
        assert!(!TargetLanguage::C.rules().types.is_match("vector"));
        assert!(TargetLanguage::Cpp.rules().types.is_match("vector"));
        assert!(TargetLanguage::CShell.rules().types.is_match("string"));
        assert!(!TargetLanguage::CShell.rules().types.is_match("bool"));
    }

    #[test]
    fn test_comment_patterns() {
        let c = &TargetLanguage::C.rules().comments;
        assert_eq!(c.find("x; // note\ny").unwrap().as_str(), "// note");
        assert_eq!(c.find("a /* b\nc */ d").unwrap().as_str(), "/* b\nc */");

        let csh = &TargetLanguage::CShell.rules().comments;
        assert_eq!(csh.find("echo hi\n# done\n").unwrap().as_str(), "# done");
        assert!(csh.find("x // y").is_none());
    }

    #[test]
    fn test_rules_report_their_language() {
        for language in TargetLanguage::ALL {
            assert_eq!(language.rules().language, language);
        }
    }
}
