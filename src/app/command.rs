//! Command parsing
//!
//! Turns one line of user input into a typed [`Command`]. Only the shape of
//! the arguments is checked here; bounds, glyph and color validity are
//! decided by the canvas core when the command runs.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// A parsed drawing command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plot the brush at a point
    Draw { x: i32, y: i32 },
    /// Draw a line between two points
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Flood fill the region at a point with the brush color
    Fill { x: i32, y: i32 },
    /// Change the brush glyph
    Brush(String),
    /// Change the brush color
    Color(String),
    /// Reset the canvas
    Clear,
    /// Save the canvas to a file
    Save(PathBuf),
    /// Load the canvas from a file
    Load(PathBuf),
    /// Print the canvas
    Show,
    /// Print the command list
    Menu,
    /// End the session
    Quit,
}

impl Command {
    /// Parse a line of input. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let name = word.to_lowercase();

        let command = match name.as_str() {
            "draw" => {
                let [x, y] = coords::<2>(&name, &args, "draw x y")?;
                Command::Draw { x, y }
            }
            "line" => {
                let [x1, y1, x2, y2] = coords::<4>(&name, &args, "line x1 y1 x2 y2")?;
                Command::Line { x1, y1, x2, y2 }
            }
            "fill" => {
                let [x, y] = coords::<2>(&name, &args, "fill x y")?;
                Command::Fill { x, y }
            }
            "brush" => Command::Brush(single(&args, "brush c")?.to_string()),
            "color" | "colour" => Command::Color(single(&args, "color name")?.to_string()),
            "save" => Command::Save(PathBuf::from(single(&args, "save path")?)),
            "load" => Command::Load(PathBuf::from(single(&args, "load path")?)),
            "clear" => no_args(Command::Clear, &args, "clear")?,
            "show" => no_args(Command::Show, &args, "show")?,
            "menu" | "help" => no_args(Command::Menu, &args, "menu")?,
            "quit" | "exit" => no_args(Command::Quit, &args, "quit")?,
            _ => {
                return Err(Error::InvalidCommand(format!(
                    "Unknown command '{word}'. Type 'menu' for help."
                )))
            }
        };
        Ok(Some(command))
    }
}

fn usage(form: &str) -> Error {
    Error::InvalidCommand(format!("Usage: {form}"))
}

fn coords<const N: usize>(name: &str, args: &[&str], form: &str) -> Result<[i32; N]> {
    if args.len() != N {
        return Err(usage(form));
    }
    let mut values = [0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg.parse().map_err(|_| {
            Error::InvalidCommand(format!("Invalid coordinate '{arg}' for {name}. Usage: {form}"))
        })?;
    }
    Ok(values)
}

fn single<'a>(args: &[&'a str], form: &str) -> Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(usage(form)),
    }
}

fn no_args(command: Command, args: &[&str], form: &str) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_parse_drawing_commands() {
        assert_eq!(parse("draw 3 4"), Command::Draw { x: 3, y: 4 });
        assert_eq!(parse("  DRAW   -1 2 "), Command::Draw { x: -1, y: 2 });
        assert_eq!(
            parse("line 0 0 3 0"),
            Command::Line { x1: 0, y1: 0, x2: 3, y2: 0 }
        );
        assert_eq!(parse("fill 1 1"), Command::Fill { x: 1, y: 1 });
    }

    #[test]
    fn test_parse_brush_and_color() {
        assert_eq!(parse("brush #"), Command::Brush("#".to_string()));
        // Validity of the glyph is decided later
        assert_eq!(parse("brush ab"), Command::Brush("ab".to_string()));
        assert_eq!(parse("Color RED"), Command::Color("RED".to_string()));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("clear"), Command::Clear);
        assert_eq!(parse("show"), Command::Show);
        assert_eq!(parse("menu"), Command::Menu);
        assert_eq!(parse("help"), Command::Menu);
        assert_eq!(parse("quit"), Command::Quit);
        assert_eq!(parse("save art.canvas"), Command::Save(PathBuf::from("art.canvas")));
        assert_eq!(parse("load /tmp/a"), Command::Load(PathBuf::from("/tmp/a")));
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            "draw 1",
            "draw 1 2 3",
            "draw x y",
            "line 0 0 3",
            "fill 1.5 2",
            "brush",
            "brush a b",
            "color",
            "save",
            "clear now",
            "paint 1 2",
        ] {
            assert!(
                matches!(Command::parse(line), Err(Error::InvalidCommand(_))),
                "accepted {line:?}"
            );
        }
    }

    #[test]
    fn test_unknown_command_message() {
        let err = Command::parse("paint").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command 'paint'. Type 'menu' for help.");
    }
}
