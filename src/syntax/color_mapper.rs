// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Maps token classes to terminal colors.
//!
//! Used when highlighted source is printed to a terminal instead of being
//! rendered as markup. Supports a richer theme for 256-color terminals and a
//! plain one for 16-color terminals.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::syntax::highlighter::TokenClass;

/// The 16 standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl IndexedColor {
    /// Returns the SGR parameter selecting this color as foreground.
    pub fn fg_code(self) -> u8 {
        match self {
            IndexedColor::Black => 30,
            IndexedColor::Red => 31,
            IndexedColor::Green => 32,
            IndexedColor::Yellow => 33,
            IndexedColor::Blue => 34,
            IndexedColor::Magenta => 35,
            IndexedColor::Cyan => 36,
            IndexedColor::White => 37,
            IndexedColor::BrightBlack => 90,
            IndexedColor::BrightRed => 91,
            IndexedColor::BrightGreen => 92,
            IndexedColor::BrightYellow => 93,
            IndexedColor::BrightBlue => 94,
            IndexedColor::BrightMagenta => 95,
            IndexedColor::BrightCyan => 96,
            IndexedColor::BrightWhite => 97,
        }
    }
}

impl FromStr for IndexedColor {
    type Err = ConfigError;

    /// Parses kebab-case names such as `blue` or `bright-black`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.trim().to_lowercase().replace('_', "-").as_str() {
            "black" => IndexedColor::Black,
            "red" => IndexedColor::Red,
            "green" => IndexedColor::Green,
            "yellow" => IndexedColor::Yellow,
            "blue" => IndexedColor::Blue,
            "magenta" => IndexedColor::Magenta,
            "cyan" => IndexedColor::Cyan,
            "white" => IndexedColor::White,
            "bright-black" | "gray" | "grey" => IndexedColor::BrightBlack,
            "bright-red" => IndexedColor::BrightRed,
            "bright-green" => IndexedColor::BrightGreen,
            "bright-yellow" => IndexedColor::BrightYellow,
            "bright-blue" => IndexedColor::BrightBlue,
            "bright-magenta" => IndexedColor::BrightMagenta,
            "bright-cyan" => IndexedColor::BrightCyan,
            "bright-white" => IndexedColor::BrightWhite,
            _ => return Err(ConfigError::UnknownColor(s.to_string())),
        };
        Ok(color)
    }
}

/// Maps token classes to colors for syntax highlighting.
#[derive(Debug, Clone)]
pub struct ColorMapper {
    /// One slot per token class, indexed by [`TokenClass::index`]
    token_colors: [IndexedColor; TokenClass::COUNT],
    use_256_colors: bool,
}

impl Default for ColorMapper {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ColorMapper {
    /// Creates a new color mapper with the default theme.
    pub fn new(use_256_colors: bool) -> Self {
        Self {
            token_colors: Self::default_theme(use_256_colors),
            use_256_colors,
        }
    }

    fn default_theme(use_256_colors: bool) -> [IndexedColor; TokenClass::COUNT] {
        let mut theme = [IndexedColor::White; TokenClass::COUNT];
        theme[TokenClass::Keyword.index()] = IndexedColor::Blue;
        theme[TokenClass::Type.index()] = IndexedColor::Cyan;
        theme[TokenClass::String.index()] = IndexedColor::Green;
        theme[TokenClass::Comment.index()] = IndexedColor::BrightBlack;
        if use_256_colors {
            theme[TokenClass::Function.index()] = IndexedColor::BrightBlue;
            theme[TokenClass::Operator.index()] = IndexedColor::BrightMagenta;
        } else {
            theme[TokenClass::Function.index()] = IndexedColor::Blue;
            theme[TokenClass::Operator.index()] = IndexedColor::Yellow;
        }
        theme
    }

    /// Gets the color for a given token class.
    pub fn get_color(&self, class: TokenClass) -> IndexedColor {
        self.token_colors[class.index()]
    }

    /// Sets a custom color for a token class.
    pub fn set_color(&mut self, class: TokenClass, color: IndexedColor) {
        self.token_colors[class.index()] = color;
    }

    /// Returns whether 256-color mode is enabled.
    pub fn is_256_color_mode(&self) -> bool {
        self.use_256_colors
    }
}
