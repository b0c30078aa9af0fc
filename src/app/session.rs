//! Drawing session
//!
//! Owns the one canvas of a running program together with the brush, and
//! executes parsed commands against them. Every failure is reported back to
//! the caller and leaves the session usable.

use std::path::Path;

use tracing::debug;

use super::command::Command;
use super::config::Config;
use super::display::{self, DisplayOptions};
use crate::codec;
use crate::core::{Brush, Grid, Point};
use crate::error::Result;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user. After a drawing command this already holds
    /// the redrawn canvas when `show_after_draw` is set.
    Output(String),
    /// The user asked to leave
    Quit,
}

/// A running drawing session
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    brush: Brush,
    display: DisplayOptions,
    show_after_draw: bool,
    save_colors: bool,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(config.canvas.width, config.canvas.height)?,
            brush: config.initial_brush(),
            display: DisplayOptions {
                ansi_colors: config.display.ansi_colors,
                ruler: config.display.ruler,
            },
            show_after_draw: config.display.show_after_draw,
            save_colors: config.persistence.save_colors,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// The canvas as it is printed to the terminal
    pub fn render(&self) -> String {
        display::render_canvas(&self.grid, self.display)
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!(?command, "executing");
        let output = match command {
            Command::Draw { x, y } => {
                self.grid.set(x, y, self.brush.glyph, self.brush.color)?;
                self.after_draw(format!("Drew '{}' at position ({x}, {y})", self.brush.glyph))
            }
            Command::Line { x1, y1, x2, y2 } => {
                let drawn = self.grid.draw_line(
                    Point::new(x1, y1),
                    Point::new(x2, y2),
                    self.brush.glyph,
                    self.brush.color,
                )?;
                self.after_draw(format!(
                    "Drew line from ({x1}, {y1}) to ({x2}, {y2}), {drawn} cells"
                ))
            }
            Command::Fill { x, y } => {
                let changed = self.grid.fill(Point::new(x, y), self.brush.color)?;
                self.after_draw(format!(
                    "Filled {changed} cells with {} at ({x}, {y})",
                    self.brush.color
                ))
            }
            Command::Brush(input) => {
                self.brush.set_glyph(&input)?;
                format!("Brush changed to '{}'\n", self.brush.glyph)
            }
            Command::Color(input) => {
                self.brush.set_color(&input)?;
                format!("Color changed to {}\n", self.brush.color)
            }
            Command::Clear => {
                self.grid.reset();
                self.after_draw("Canvas cleared!".to_string())
            }
            Command::Save(path) => self.save(&path)?,
            Command::Load(path) => self.load(&path)?,
            Command::Show => self.render(),
            Command::Menu => display::menu(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    /// Parse and execute one line of input. Blank lines produce no output.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    fn after_draw(&self, message: String) -> String {
        if self.show_after_draw {
            format!("{message}\n{}", self.render())
        } else {
            format!("{message}\n")
        }
    }

    fn save(&self, path: &Path) -> Result<String> {
        codec::save_to_path(&self.grid, path, self.save_colors)?;
        Ok(format!("Saved canvas to {}\n", path.display()))
    }

    fn load(&mut self, path: &Path) -> Result<String> {
        let report = codec::load_from_path(path, &mut self.grid)?;
        let mut message = format!("Loaded canvas from {}", path.display());
        if !report.colors_restored {
            message.push_str(" (colors reset to default)");
        }
        if report.repaired_rows > 0 {
            message.push_str(&format!(", repaired {} rows", report.repaired_rows));
        }
        Ok(self.after_draw(message))
    }
}
