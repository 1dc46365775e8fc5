// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The convert action: validate, decode, emit, highlight.
//!
//! Input is checked here before the decoder runs, so the emitter and
//! highlighter only ever see decoded payloads.

use tracing::{debug, info};

use crate::codec;
use crate::config::{OutputFormat, RenderConfig};
use crate::emitter;
use crate::error::ConvertError;
use crate::syntax::{self, SyntaxHighlighter, TargetLanguage};

/// Rejects empty input, then decodes.
fn decode_input(raw: &str) -> Result<String, ConvertError> {
    if raw.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    Ok(codec::decode(raw)?)
}

/// Checks raw input without converting it.
///
/// Empty or whitespace-only input is [`ConvertError::EmptyInput`]; anything
/// else that would not decode reports the decoder's error.
pub fn validate_input(raw: &str) -> Result<(), ConvertError> {
    decode_input(raw).map(drop)
}

/// The result of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The language the payload was emitted as
    pub language: TargetLanguage,
    /// The decoded payload
    pub decoded: String,
    /// The emitted program
    pub source: String,
    /// The emitted program as highlighted markup
    pub markup: String,
}

impl Conversion {
    /// The text to export to the clipboard: the emitted program, unhighlighted.
    pub fn clipboard_text(&self) -> &str {
        &self.source
    }

    /// The confirmation shown after a successful conversion.
    pub fn notice(&self) -> String {
        format!("Successfully converted to {}", self.language.display_name())
    }

    /// Presents the conversion according to `config`.
    pub fn render(&self, config: &RenderConfig) -> String {
        match config.format {
            OutputFormat::Plain => self.source.clone(),
            OutputFormat::Html => self.markup.clone(),
            OutputFormat::Ansi => {
                let tokens = SyntaxHighlighter::new(self.language).tokenize(&self.source);
                syntax::render_ansi(&tokens, &config.color_mapper())
            }
        }
    }
}

/// Runs the whole pipeline on raw input.
pub fn convert(raw: &str, language: TargetLanguage) -> Result<Conversion, ConvertError> {
    let decoded = decode_input(raw).inspect_err(|err| {
        debug!(%language, %err, "rejected conversion input");
    })?;
    let source = emitter::emit(&decoded, language);
    let markup = syntax::highlight(&source, language);

    info!(%language, chars = decoded.chars().count(), "converted bit-string");

    Ok(Conversion {
        language,
        decoded,
        source,
        markup,
    })
}
