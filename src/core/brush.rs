//! Brush state
//!
//! The glyph and color that drawing commands paint with. Kept apart from the
//! grid so the same canvas can be drawn with different brushes over time.

use serde::{Deserialize, Serialize};
use super::cell::{is_printable_glyph, Color};
use crate::error::{Error, Result};

/// Glyph a fresh session draws with
pub const DEFAULT_GLYPH: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    pub glyph: char,
    pub color: Color,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_GLYPH,
            color: Color::Default,
        }
    }
}

impl Brush {
    pub fn new(glyph: char, color: Color) -> Self {
        Self { glyph, color }
    }

    /// Parse brush input: exactly one printable character that occupies a
    /// single terminal column.
    pub fn parse_glyph(input: &str) -> Result<char> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_printable_glyph(c) => Ok(c),
            _ => Err(Error::InvalidGlyph(input.to_string())),
        }
    }

    pub fn set_glyph(&mut self, input: &str) -> Result<()> {
        self.glyph = Self::parse_glyph(input)?;
        Ok(())
    }

    pub fn set_color(&mut self, input: &str) -> Result<()> {
        self.color = input.parse()?;
        Ok(())
    }
}
