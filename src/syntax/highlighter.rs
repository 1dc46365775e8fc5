// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Regex-driven classification of emitted source.
//!
//! Classification runs as a fixed sequence of passes. Every pass claims byte
//! ranges of the text for one token class, and each later pass only searches
//! the gaps that no earlier pass has claimed. The order is therefore
//! significant: strings and comments are claimed first so that keywords and
//! operators inside them stay untouched.

use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::syntax::language::{LanguageRules, TargetLanguage};
use crate::syntax::render;

/// Classes a token can be highlighted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    String,
    Comment,
    Keyword,
    Type,
    Function,
    Operator,
}

impl TokenClass {
    /// Number of token classes.
    pub const COUNT: usize = 6;

    /// All classes in the order their passes run.
    pub const PASS_ORDER: [TokenClass; TokenClass::COUNT] = [
        TokenClass::String,
        TokenClass::Comment,
        TokenClass::Keyword,
        TokenClass::Type,
        TokenClass::Function,
        TokenClass::Operator,
    ];

    /// Returns the class name used in markup.
    pub fn class_name(self) -> &'static str {
        match self {
            TokenClass::String => "string",
            TokenClass::Comment => "comment",
            TokenClass::Keyword => "keyword",
            TokenClass::Type => "type",
            TokenClass::Function => "function",
            TokenClass::Operator => "operator",
        }
    }

    /// Position of this class in [`TokenClass::PASS_ORDER`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for TokenClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        TokenClass::PASS_ORDER
            .into_iter()
            .find(|class| class.class_name() == key)
            .ok_or_else(|| ConfigError::UnknownTokenClass(s.to_string()))
    }
}

/// A run of text and the class it was assigned, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    /// The text content of the token
    pub text: String,
    /// The token class, `None` for unclassified text
    pub class: Option<TokenClass>,
    /// The byte offset where this token starts
    pub start_offset: usize,
    /// The byte offset where this token ends
    pub end_offset: usize,
}

impl TokenInfo {
    /// Creates a new token info with the given parameters.
    pub fn new(
        text: String,
        class: Option<TokenClass>,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            text,
            class,
            start_offset,
            end_offset,
        }
    }

    /// Creates a token info for unclassified text.
    pub fn plain_text(text: String, start_offset: usize, end_offset: usize) -> Self {
        Self::new(text, None, start_offset, end_offset)
    }

    /// Creates a token info for classified text.
    pub fn highlighted(
        text: String,
        class: TokenClass,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self::new(text, Some(class), start_offset, end_offset)
    }

    /// Returns true if this token should be highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.class.is_some()
    }

    /// Returns the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Double-quoted literals with backslash escapes. Shared by every language.
static STRING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"\\]|\\.)*""#).expect("string pattern is a valid regex"));

/// HTML entities produced by [`escape_html`]. They stand for `&`, `<` and
/// `>` and are claimed whole so word passes cannot split them.
static ENTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(?:amp|lt|gt);").expect("entity pattern is a valid regex"));

/// An identifier directly followed by `(`; group 1 is the identifier.
static FUNCTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("function pattern is a valid regex")
});

static OPERATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+\-*/%=&|^~<>!?:;]").expect("operator pattern is a valid regex"));

/// A classified byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Claim {
    range: Range<usize>,
    class: TokenClass,
}

/// Byte ranges of `len` not covered by `claims`. `claims` must be sorted.
fn gaps(len: usize, claims: &[Claim]) -> Vec<Range<usize>> {
    let mut out = Vec::with_capacity(claims.len() + 1);
    let mut cursor = 0;
    for claim in claims {
        if claim.range.start > cursor {
            out.push(cursor..claim.range.start);
        }
        cursor = cursor.max(claim.range.end);
    }
    if cursor < len {
        out.push(cursor..len);
    }
    out
}

/// Claims every match of `pattern` (or of its capture `group`) that lies
/// entirely within an unclaimed gap.
///
/// The search inside a gap sees the text before the gap, so `\b` and `^`
/// behave as they would on the whole text, but matches never run past the
/// end of the gap.
fn claim_pass(
    text: &str,
    claims: &mut Vec<Claim>,
    pattern: &Regex,
    group: usize,
    class: TokenClass,
) {
    let mut found = Vec::new();

    for gap in gaps(text.len(), claims) {
        let haystack = &text[..gap.end];
        let mut at = gap.start;

        while at < gap.end {
            let Some(caps) = pattern.captures_at(haystack, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if let Some(target) = caps.get(group).filter(|m| !m.is_empty()) {
                found.push(Claim {
                    range: target.range(),
                    class,
                });
            }
            at = if whole.is_empty() {
                whole.end() + haystack[whole.end()..].chars().next().map_or(1, char::len_utf8)
            } else {
                whole.end()
            };
        }
    }

    claims.extend(found);
    claims.sort_by_key(|claim| claim.range.start);
}

/// Escapes `&`, `<` and `>` for embedding in markup, ampersand first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Classifies source text for one target language.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    language: TargetLanguage,
    rules: &'static LanguageRules,
}

impl SyntaxHighlighter {
    /// Creates a highlighter using the rule tables of `language`.
    pub fn new(language: TargetLanguage) -> Self {
        Self {
            language,
            rules: language.rules(),
        }
    }

    /// Returns the language this highlighter is configured for.
    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    /// Splits `text` into tokens covering it end to end.
    ///
    /// `text` is classified as given. For markup output pass it through
    /// [`escape_html`] first, which is what [`SyntaxHighlighter::highlight`]
    /// does.
    pub fn tokenize(&self, text: &str) -> Vec<TokenInfo> {
        let mut claims = Vec::new();

        claim_pass(text, &mut claims, &STRING_PATTERN, 0, TokenClass::String);
        claim_pass(text, &mut claims, &self.rules.comments, 0, TokenClass::Comment);
        claim_pass(text, &mut claims, &ENTITY_PATTERN, 0, TokenClass::Operator);
        claim_pass(text, &mut claims, &self.rules.keywords, 0, TokenClass::Keyword);
        claim_pass(text, &mut claims, &self.rules.types, 0, TokenClass::Type);
        claim_pass(text, &mut claims, &FUNCTION_PATTERN, 1, TokenClass::Function);
        claim_pass(text, &mut claims, &OPERATOR_PATTERN, 0, TokenClass::Operator);

        let mut tokens = Vec::with_capacity(claims.len() * 2 + 1);
        let mut cursor = 0;
        for Claim { range, class } in claims {
            if range.start > cursor {
                let plain = text[cursor..range.start].to_string();
                tokens.push(TokenInfo::plain_text(plain, cursor, range.start));
            }
            let claimed = text[range.clone()].to_string();
            tokens.push(TokenInfo::highlighted(claimed, class, range.start, range.end));
            cursor = range.end;
        }
        if cursor < text.len() {
            tokens.push(TokenInfo::plain_text(text[cursor..].to_string(), cursor, text.len()));
        }

        tokens
    }

    /// Produces display markup for `source`.
    ///
    /// The source is HTML-escaped, classified, wrapped in
    /// `<span class="…">` elements, and every newline becomes `<br>`.
    pub fn highlight(&self, source: &str) -> String {
        let escaped = escape_html(source);
        let tokens = self.tokenize(&escaped);
        debug!(
            language = %self.language,
            tokens = tokens.len(),
            highlighted = tokens.iter().filter(|t| t.is_highlighted()).count(),
            "highlighted source"
        );
        render::render_html(&tokens)
    }
}

/// Produces display markup for `source` using the rules of `language`.
pub fn highlight(source: &str, language: TargetLanguage) -> String {
    SyntaxHighlighter::new(language).highlight(source)
}
