//! Interactive front end
//!
//! Reads commands line by line, runs them against a [`Session`] and prints
//! the results. Command errors and undecodable lines are reported and the
//! loop continues; only a failure to read input or write output ends it
//! early.

mod command;
mod config;
mod display;
mod session;

use std::io::{BufRead, Write};

pub use command::Command;
pub use config::{
    default_config_path, BrushConfig, CanvasConfig, Config, ConfigError, DisplayConfig,
    PersistenceConfig,
};
pub use display::{menu, render_canvas, DisplayOptions};
pub use session::{Outcome, Session};

use crate::error::Result;

const PROMPT: &str = "Enter command: ";

/// Run the interactive loop until `quit` or end of input
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, session: &mut Session) -> Result<()> {
    let grid = session.grid();
    writeln!(output, "=== INTERACTIVE DRAWING PROGRAM ===")?;
    writeln!(output, "Canvas size: {} x {}", grid.width(), grid.height())?;
    writeln!(output)?;
    write!(output, "{}", session.render())?;
    writeln!(output)?;
    write!(output, "{}", menu())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            tracing::debug!("end of input");
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "skipping input line");
                writeln!(output, "Error: input is not valid UTF-8")?;
                continue;
            }
        };

        match session.execute_line(line) {
            Ok(Some(Outcome::Output(text))) => write!(output, "{text}")?,
            Ok(Some(Outcome::Quit)) => {
                writeln!(output, "Thanks for drawing! Goodbye!")?;
                break;
            }
            Ok(None) => {}
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }

    output.flush()?;
    Ok(())
}
