//! Canvas Cell
//!
//! Represents a single cell in the canvas grid: one glyph and the color it
//! is painted with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::error::Error;

/// Glyph of an untouched cell
pub const EMPTY_GLYPH: char = '.';

/// Whether `c` can stand in a cell: visible, not whitespace or a control
/// character, and exactly one terminal column wide
pub fn is_printable_glyph(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && c.width() == Some(1)
}

/// A single cell in the canvas grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character shown in this cell
    pub glyph: char,
    /// Color the glyph is painted with
    pub color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: EMPTY_GLYPH,
            color: Color::Default,
        }
    }
}

impl Cell {
    pub fn new(glyph: char, color: Color) -> Self {
        Self { glyph, color }
    }

    /// Check if this cell still holds the default glyph and color
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reset the cell to default state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The closed set of colors a cell can carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Terminal default foreground
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    const ALL: [Color; 9] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Every color, in index order
    pub fn all() -> &'static [Color] {
        &Self::ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Stable index used by the canvas file color channel (0 = default)
    pub fn index(self) -> u8 {
        match self {
            Color::Default => 0,
            Color::Black => 1,
            Color::Red => 2,
            Color::Green => 3,
            Color::Yellow => 4,
            Color::Blue => 5,
            Color::Magenta => 6,
            Color::Cyan => 7,
            Color::White => 8,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// SGR foreground parameter for this color
    pub fn ansi_fg(self) -> u8 {
        match self {
            Color::Default => 39,
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color name, ignoring case. Lowercasing goes through the full
    /// Unicode mapping so that non-ASCII input never matches by accident.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| Error::InvalidColorName(s.trim().to_string()))
    }
}
