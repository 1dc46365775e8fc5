// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Output configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::syntax::{ColorMapper, IndexedColor, TokenClass};

/// How a conversion is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The emitted source as-is; this is also the clipboard text
    #[default]
    Plain,
    /// Highlighted markup with `<span>` classes and `<br>` line breaks
    Html,
    /// Source colored with terminal escape sequences
    Ansi,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "html" | "markup" => Ok(OutputFormat::Html),
            "ansi" | "terminal" => Ok(OutputFormat::Ansi),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Parses a `CLASS=COLOR` theme override such as `keyword=bright-red`.
pub fn parse_color_override(s: &str) -> Result<(TokenClass, IndexedColor), ConfigError> {
    let (class, color) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedColorOverride(s.to_string()))?;
    Ok((class.parse()?, color.parse()?))
}

/// Settings for presenting a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output format
    pub format: OutputFormat,
    /// Whether terminal output may use the 256-color theme
    pub use_256_colors: bool,
    /// Per-class colors replacing the theme defaults, applied in order
    pub color_overrides: Vec<(TokenClass, IndexedColor)>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            use_256_colors: true,
            color_overrides: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Creates a configuration from a format and a terminal color depth
    /// (16 or 256).
    pub fn new(format: OutputFormat, color_depth: u16) -> Result<Self, ConfigError> {
        let use_256_colors = match color_depth {
            256 => true,
            16 => false,
            other => return Err(ConfigError::UnsupportedColorDepth(other)),
        };
        Ok(Self {
            format,
            use_256_colors,
            color_overrides: Vec::new(),
        })
    }

    /// Adds theme overrides on top of the default colors.
    pub fn with_color_overrides(
        mut self,
        overrides: impl IntoIterator<Item = (TokenClass, IndexedColor)>,
    ) -> Self {
        self.color_overrides.extend(overrides);
        self
    }

    /// Returns the color theme for the configured depth with overrides applied.
    pub fn color_mapper(&self) -> ColorMapper {
        let mut mapper = ColorMapper::new(self.use_256_colors);
        for &(class, color) in &self.color_overrides {
            mapper.set_color(class, color);
        }
        mapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("ansi".parse::<OutputFormat>().unwrap(), OutputFormat::Ansi);
        assert_eq!(
            "pdf".parse::<OutputFormat>().unwrap_err(),
            ConfigError::UnknownFormat("pdf".to_string())
        );
    }

    #[test]
    fn test_format_names_round_trip() {
        for format in [OutputFormat::Plain, OutputFormat::Html, OutputFormat::Ansi] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_color_depth() {
        assert!(RenderConfig::new(OutputFormat::Ansi, 256).unwrap().use_256_colors);
        assert!(!RenderConfig::new(OutputFormat::Ansi, 16).unwrap().use_256_colors);
        assert_eq!(
            RenderConfig::new(OutputFormat::Ansi, 8),
            Err(ConfigError::UnsupportedColorDepth(8))
        );
    }

    #[test]
    fn test_parse_color_override() {
        assert_eq!(
            parse_color_override("keyword=bright-red"),
            Ok((TokenClass::Keyword, IndexedColor::BrightRed))
        );
        assert_eq!(
            parse_color_override("keyword"),
            Err(ConfigError::MalformedColorOverride("keyword".to_string()))
        );
        assert_eq!(
            parse_color_override("number=red"),
            Err(ConfigError::UnknownTokenClass("number".to_string()))
        );
        assert_eq!(
            parse_color_override("string=mauve"),
            Err(ConfigError::UnknownColor("mauve".to_string()))
        );
    }

    #[test]
    fn test_overrides_reach_the_color_mapper() {
        let config = RenderConfig::new(OutputFormat::Ansi, 16)
            .unwrap()
            .with_color_overrides([
                (TokenClass::String, IndexedColor::Red),
                (TokenClass::String, IndexedColor::BrightCyan),
            ]);
        let mapper = config.color_mapper();
        assert_eq!(mapper.get_color(TokenClass::String), IndexedColor::BrightCyan);
        assert_eq!(mapper.get_color(TokenClass::Operator), IndexedColor::Yellow);
    }

    #[test]
    fn test_color_mapper_follows_depth() {
        let config = RenderConfig::new(OutputFormat::Ansi, 16).unwrap();
        assert!(!config.color_mapper().is_256_color_mode());
        assert!(RenderConfig::default().color_mapper().is_256_color_mode());
    }
}
