// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Syntax highlighting for emitted programs.
//!
//! Highlighting is cosmetic pattern matching over the source text, one rule
//! table per target language. It does not tokenize the languages properly.

pub mod color_mapper;
pub mod highlighter;
pub mod language;
pub mod render;


pub use color_mapper::{ColorMapper, IndexedColor};
pub use highlighter::{SyntaxHighlighter, TokenClass, TokenInfo, escape_html, highlight};
pub use language::{LanguageRules, TargetLanguage};
pub use render::{LINE_BREAK, render_ansi, render_html};
