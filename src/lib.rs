// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decode bit-strings and present the text as a small C, C++ or C shell
//! program, with regex-based syntax highlighting for display.
//!
//! ```
//! use binscribe::{TargetLanguage, convert};
//!
//! let conversion = convert("01001000 01101001", TargetLanguage::C).unwrap();
//! assert!(conversion.source.contains("printf(\"Hi\");"));
//! ```

pub mod codec;
pub mod config;
pub mod convert;
pub mod emitter;
pub mod error;
pub mod syntax;

pub use codec::{decode, encode};
pub use config::{OutputFormat, RenderConfig};
pub use convert::{Conversion, convert, validate_input};
pub use emitter::{emit, emit_bits};
pub use error::{ConfigError, ConvertError, DecodeError, EncodeError};
pub use syntax::{TargetLanguage, highlight};
