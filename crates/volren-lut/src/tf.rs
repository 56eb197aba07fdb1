//! Transfer-function text formats.
//!
//! Control points come either from a file or from literal arguments, both
//! with fields in the order `position r g b a`:
//!
//! ```text
//! # file form, comma separated
//! 0.25, 255, 0, 0, 0.1
//! 0.70, 0, 128, 255, 0.6
//! ```
//!
//! ```text
//! # argument form, whitespace separated
//! "0.25 255 0 0 0.1"
//! ```
//!
//! Compiled tables are written one sample per line as `r, g, b, a` with four
//! decimals.
//!
//! # Example
//!
//! ```rust,ignore
//! use volren_lut::{compile_lut, tf};
//!
//! let points = tf::read_control_points("points.txt")?;
//! let lut = compile_lut(&points, 2048)?;
//! tf::write_lut("out/lut.txt", &lut)?;
//! ```

use crate::{ControlPoint, LutError, LutResult, Sample};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const FIELDS: usize = 5;

/// Reads comma-separated control points from a file.
pub fn read_control_points<P: AsRef<Path>>(path: P) -> LutResult<Vec<ControlPoint>> {
    let file = File::open(path.as_ref())?;
    let points = parse_control_points(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), points = points.len(), "Read control points");
    Ok(points)
}

/// Parses comma-separated control points, one per line.
///
/// Blank lines are skipped. Any other line must hold exactly five numbers.
pub fn parse_control_points<R: BufRead>(reader: R) -> LutResult<Vec<ControlPoint>> {
    let mut points = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let point = parse_fields(&fields)
            .map_err(|e| LutError::ParseError(format!("line {}: {}", idx + 1, e)))?;
        points.push(point);
    }

    Ok(points)
}

/// Parses one whitespace-separated control point argument, e.g. `"0.5 255 0 0 1"`.
pub fn parse_point_arg(arg: &str) -> LutResult<ControlPoint> {
    let fields: Vec<&str> = arg.split_whitespace().collect();
    parse_fields(&fields).map_err(|e| LutError::ParseError(format!("'{}': {}", arg, e)))
}

/// Writes a compiled table, creating the parent directory if needed.
pub fn write_lut<P: AsRef<Path>>(path: P, samples: &[Sample]) -> LutResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    format_lut(&mut writer, samples)?;
    writer.flush()?;

    debug!(path = %path.display(), samples = samples.len(), "Wrote LUT");
    Ok(())
}

/// Formats a compiled table into any writer.
pub fn format_lut<W: Write>(mut writer: W, samples: &[Sample]) -> LutResult<()> {
    for s in samples {
        writeln!(writer, "{:.4}, {:.4}, {:.4}, {:.4}", s.r, s.g, s.b, s.a)?;
    }
    Ok(())
}

fn parse_fields(fields: &[&str]) -> Result<ControlPoint, String> {
    if fields.len() != FIELDS {
        return Err(format!("expected {} fields, found {}", FIELDS, fields.len()));
    }

    let mut values = [0.0_f64; FIELDS];
    for (value, field) in values.iter_mut().zip(fields) {
        let field = field.trim();
        *value = field
            .parse()
            .map_err(|_| format!("invalid number '{}'", field))?;
        if !value.is_finite() {
            return Err(format!("non-finite value '{}'", field));
        }
    }

    let [position, r, g, b, a] = values;
    Ok(ControlPoint::new(position, r, g, b, a))
}
