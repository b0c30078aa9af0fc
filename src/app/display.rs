//! Text rendering of the canvas and the command menu

use std::fmt::Write;

use crate::core::{Color, Grid};

const SGR_RESET: &str = "\x1b[0m";

/// How the canvas is drawn to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Paint glyphs with ANSI colors
    pub ansi_colors: bool,
    /// Column ruler on top, row numbers on the left
    pub ruler: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            ansi_colors: true,
            ruler: true,
        }
    }
}

/// Render the canvas as printable text, one line per row
pub fn render_canvas(grid: &Grid, options: DisplayOptions) -> String {
    let mut out = String::new();
    let gutter = grid.height().saturating_sub(1).to_string().len().max(2);

    if options.ruler {
        out.push_str(&" ".repeat(gutter + 1));
        out.extend((0..grid.width()).map(digit));
        out.push('\n');
    }

    for (index, row) in grid.render().iter().enumerate() {
        if options.ruler {
            let _ = write!(out, "{index:>gutter$} ");
        }
        // Consecutive cells of one color share a single escape sequence
        let mut current = Color::Default;
        for cell in &row.cells {
            if options.ansi_colors && cell.color != current {
                if cell.color == Color::Default {
                    out.push_str(SGR_RESET);
                } else {
                    let _ = write!(out, "\x1b[{}m", cell.color.ansi_fg());
                }
                current = cell.color;
            }
            out.push(cell.glyph);
        }
        if current != Color::Default {
            out.push_str(SGR_RESET);
        }
        out.push('\n');
    }

    out
}

fn digit(n: usize) -> char {
    char::from_digit((n % 10) as u32, 10).unwrap_or('?')
}

/// The command list
pub fn menu() -> String {
    let colors: Vec<&str> = Color::all().iter().map(|c| c.name()).collect();
    format!(
        "=== DRAWING COMMANDS ===\n\
         draw x y            - Draw at position (x, y)\n\
         line x1 y1 x2 y2    - Draw a line between two points\n\
         fill x y            - Flood fill the region at (x, y) with the brush color\n\
         brush c             - Change brush to character 'c'\n\
         color name          - Change brush color ({})\n\
         clear               - Clear the canvas\n\
         save path           - Save the canvas to a file\n\
         load path           - Load the canvas from a file\n\
         show                - Display current canvas\n\
         menu                - Show this menu\n\
         quit                - Exit program\n\
         ========================\n",
        colors.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: DisplayOptions = DisplayOptions {
        ansi_colors: false,
        ruler: false,
    };

    #[test]
    fn test_render_plain() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 0, '#', Color::Red).unwrap();
        assert_eq!(render_canvas(&grid, PLAIN), ".#.\n...\n");
    }

    #[test]
    fn test_render_ruler() {
        let grid = Grid::new(12, 2).unwrap();
        let options = DisplayOptions {
            ruler: true,
            ..PLAIN
        };
        let text = render_canvas(&grid, options);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   012345678901");
        assert_eq!(lines[1], " 0 ............");
        assert_eq!(lines[2], " 1 ............");
    }

    #[test]
    fn test_render_ruler_wide_gutter() {
        let grid = Grid::new(1, 101).unwrap();
        let text = render_canvas(&grid, DisplayOptions { ruler: true, ..PLAIN });
        assert!(text.starts_with("    0\n  0 .\n"));
        assert!(text.ends_with("100 .\n"));
    }

    #[test]
    fn test_render_ansi_colors() {
        let mut grid = Grid::new(4, 1).unwrap();
        grid.set(1, 0, 'a', Color::Red).unwrap();
        grid.set(2, 0, 'b', Color::Red).unwrap();
        let options = DisplayOptions {
            ansi_colors: true,
            ruler: false,
        };
        assert_eq!(
            render_canvas(&grid, options),
            ".\x1b[31mab\x1b[0m.\n"
        );
    }

    #[test]
    fn test_render_ansi_color_at_row_end() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(1, 0, 'z', Color::Green).unwrap();
        let options = DisplayOptions {
            ansi_colors: true,
            ruler: false,
        };
        assert_eq!(render_canvas(&grid, options), ".\x1b[32mz\x1b[0m\n");
    }

    #[test]
    fn test_menu_lists_commands() {
        let menu = menu();
        for word in ["draw", "line", "fill", "brush", "color", "clear", "save", "load", "show", "quit"] {
            assert!(menu.contains(word), "menu missing {word}");
        }
        assert!(menu.contains("magenta"));
    }
}
