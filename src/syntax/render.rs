// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Turns classified tokens into display output.

use std::fmt::Write;

use crate::syntax::color_mapper::ColorMapper;
use crate::syntax::highlighter::TokenInfo;

/// Line break marker in markup output.
pub const LINE_BREAK: &str = "<br>";

const SGR_RESET: &str = "\x1b[0m";

/// Wraps classified tokens in `<span class="…">` and converts newlines to
/// [`LINE_BREAK`].
///
/// Token text is written verbatim, so it must already be escaped.
pub fn render_html(tokens: &[TokenInfo]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 32).sum());

    for token in tokens {
        match token.class {
            Some(class) => {
                let _ = write!(out, "<span class=\"{}\">{}</span>", class.class_name(), token.text);
            }
            None => out.push_str(&token.text),
        }
    }

    out.replace('\n', LINE_BREAK)
}

/// Renders tokens for a terminal, coloring classified tokens.
///
/// Color sequences are closed before every newline so a colored multi-line
/// comment does not bleed into the terminal's line handling.
pub fn render_ansi(tokens: &[TokenInfo], colors: &ColorMapper) -> String {
    let mut out = String::new();

    for token in tokens {
        let Some(class) = token.class else {
            out.push_str(&token.text);
            continue;
        };

        let code = colors.get_color(class).fg_code();
        for (i, line) in token.text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.is_empty() {
                let _ = write!(out, "\x1b[{code}m{line}{SGR_RESET}");
            }
        }
    }

    out
}
