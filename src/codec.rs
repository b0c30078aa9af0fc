//! Canvas text format
//!
//! ```text
//! CANVAS <width> <height>
//! <row 0: width glyphs>
//! ...
//! <row height-1: width glyphs>
//! ```
//!
//! Colors are not part of the base format. [`save_with_colors`] appends an
//! optional `COLORS` section of `height` lines of color index digits; readers
//! of the base format stop after the glyph rows and never see it.
//!
//! Loading never resizes: the file must declare the live grid's dimensions.
//! Rows are decoded into a staging buffer first, so a failed load leaves the
//! grid untouched.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{is_printable_glyph, Cell, Color, Grid, Row, EMPTY_GLYPH};
use crate::error::{Error, Result};

/// First token of every canvas file
pub const HEADER_TAG: &str = "CANVAS";

/// Marker line opening the optional color section
pub const COLORS_TAG: &str = "COLORS";

/// What a successful load found beyond the glyphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows whose terminator, length or glyphs were off and had to be repaired
    pub repaired_rows: usize,
    /// True if a color section was present and applied
    pub colors_restored: bool,
}

/// Write the glyphs of `grid` in the base canvas format
pub fn save<W: Write>(grid: &Grid, writer: &mut W) -> Result<()> {
    write_glyphs(grid, writer)?;
    debug!(width = grid.width(), height = grid.height(), "canvas saved");
    Ok(())
}

/// Write the base format followed by the color section
pub fn save_with_colors<W: Write>(grid: &Grid, writer: &mut W) -> Result<()> {
    write_glyphs(grid, writer)?;
    writeln!(writer, "{COLORS_TAG}")?;
    for row in grid.render() {
        let digits: String = row
            .cells
            .iter()
            .map(|cell| char::from(b'0' + cell.color.index()))
            .collect();
        writeln!(writer, "{digits}")?;
    }
    debug!(width = grid.width(), height = grid.height(), "canvas saved with colors");
    Ok(())
}

fn write_glyphs<W: Write>(grid: &Grid, writer: &mut W) -> Result<()> {
    writeln!(writer, "{HEADER_TAG} {} {}", grid.width(), grid.height())?;
    for row in grid.render() {
        writeln!(writer, "{}", row.text())?;
    }
    Ok(())
}

/// Read a canvas file into `grid`, which must already have the file's
/// dimensions. Every cell's glyph is replaced; colors come from the color
/// section if one is present and well formed, otherwise they revert to
/// [`Color::Default`].
pub fn load<R: BufRead>(mut reader: R, grid: &mut Grid) -> Result<LoadReport> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Err(Error::MalformedHeader("empty input".to_string()));
    }
    let found = parse_header(&line)?;
    let (width, height) = (grid.width(), grid.height());
    if found != (as_i64(width), as_i64(height)) {
        return Err(Error::DimensionMismatch {
            expected: (width, height),
            found,
        });
    }

    let mut report = LoadReport::default();
    let mut rows = Vec::with_capacity(height);

    for index in 0..height {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::TruncatedData {
                expected_rows: height,
                found_rows: index,
            });
        }
        let (body, terminated) = strip_terminator(&line);
        if !terminated && body.chars().count() < width {
            return Err(Error::TruncatedData {
                expected_rows: height,
                found_rows: index,
            });
        }
        let (row, repaired) = decode_row(body, terminated, width, index);
        if repaired {
            report.repaired_rows += 1;
        }
        rows.push(row);
    }

    report.colors_restored = read_colors(&mut reader, &mut rows, width)?;
    grid.replace_rows(rows);

    debug!(width, height, ?report, "canvas loaded");
    Ok(report)
}

/// Parse `CANVAS <width> <height>`. Any integer is accepted here, even a
/// negative or overflowing one, and left for the size check to reject.
fn parse_header(line: &str) -> Result<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(HEADER_TAG) => {}
        Some(other) => {
            return Err(Error::MalformedHeader(format!(
                "expected '{HEADER_TAG}', found '{other}'"
            )))
        }
        None => return Err(Error::MalformedHeader("blank header line".to_string())),
    }

    let mut dimension = |name: &str| -> Result<i64> {
        let token = tokens
            .next()
            .ok_or_else(|| Error::MalformedHeader(format!("missing {name}")))?;
        parse_integer(token)
            .ok_or_else(|| Error::MalformedHeader(format!("{name} '{token}' is not a number")))
    };
    let width = dimension("width")?;
    let height = dimension("height")?;

    if let Some(extra) = tokens.next() {
        return Err(Error::MalformedHeader(format!("unexpected '{extra}' after dimensions")));
    }
    Ok((width, height))
}

/// Parse a decimal integer, saturating at the `i64` limits
fn parse_integer(token: &str) -> Option<i64> {
    if let Ok(value) = token.parse() {
        return Some(value);
    }
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Strip a `\n` or `\r\n` terminator, reporting whether one was there
fn strip_terminator(line: &str) -> (&str, bool) {
    match line.strip_suffix('\n') {
        Some(body) => (body.strip_suffix('\r').unwrap_or(body), true),
        None => (line, false),
    }
}

/// Decode one glyph row. A missing terminator, a row of the wrong length or
/// an unprintable glyph is repaired (truncated, or the empty glyph put in
/// place) and reported.
fn decode_row(body: &str, terminated: bool, width: usize, index: usize) -> (Row, bool) {
    let mut repaired = false;

    if !terminated {
        warn!(row = index, "canvas row is missing its newline");
        repaired = true;
    }

    let mut cells: Vec<Cell> = body
        .chars()
        .take(width)
        .enumerate()
        .map(|(column, glyph)| {
            if is_printable_glyph(glyph) {
                Cell::new(glyph, Color::Default)
            } else {
                warn!(row = index, column, ?glyph, "unprintable glyph in canvas row");
                repaired = true;
                Cell::default()
            }
        })
        .collect();
    let length = body.chars().count();
    if length != width {
        warn!(row = index, length, width, "canvas row has the wrong length");
        cells.resize(width, Cell::new(EMPTY_GLYPH, Color::Default));
        repaired = true;
    }

    (Row { cells }, repaired)
}

/// Apply the optional color section. Anything after the glyph rows that is
/// not a well-formed color section is ignored.
fn read_colors<R: BufRead>(reader: &mut R, rows: &mut [Row], width: usize) -> Result<bool> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 || strip_terminator(&line).0 != COLORS_TAG {
        return Ok(false);
    }

    let mut colors = Vec::with_capacity(rows.len());
    for index in 0..rows.len() {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            warn!(row = index, "color section truncated, keeping default colors");
            return Ok(false);
        }
        let body = strip_terminator(&line).0;
        let decoded: Option<Vec<Color>> = body
            .chars()
            .map(|c| c.to_digit(10).and_then(|d| Color::from_index(d as u8)))
            .collect();
        match decoded {
            Some(row) if row.len() == width => colors.push(row),
            _ => {
                warn!(row = index, "malformed color row, keeping default colors");
                return Ok(false);
            }
        }
    }

    for (row, row_colors) in rows.iter_mut().zip(colors) {
        for (cell, color) in row.cells.iter_mut().zip(row_colors) {
            cell.color = color;
        }
    }
    Ok(true)
}

/// Save `grid` to a file, with or without the color section
pub fn save_to_path(grid: &Grid, path: impl AsRef<Path>, with_colors: bool) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    if with_colors {
        save_with_colors(grid, &mut writer)?;
    } else {
        save(grid, &mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a canvas file into `grid`
pub fn load_from_path(path: impl AsRef<Path>, grid: &mut Grid) -> Result<LoadReport> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    load(reader, grid)
}
