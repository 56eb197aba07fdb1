//! PNG strip preview of a compiled LUT.
//!
//! Each sample becomes one column; the row is repeated to give the strip
//! some height.

use crate::{LutError, LutResult, Sample};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Samples compiled for a preview strip.
pub const PREVIEW_SAMPLES: usize = 1024;

/// Rows in a preview strip.
pub const PREVIEW_ROWS: usize = 64;

/// Renders samples into row-major 8-bit RGBA, `samples.len()` wide.
pub fn render_rgba8(samples: &[Sample], rows: usize) -> Vec<u8> {
    let row: Vec<u8> = samples
        .iter()
        .flat_map(|s| s.to_array().map(to_u8))
        .collect();
    row.repeat(rows)
}

/// Writes a preview strip as an RGBA PNG.
pub fn write_png<P: AsRef<Path>>(path: P, samples: &[Sample], rows: usize) -> LutResult<()> {
    let path = path.as_ref();
    let width = u32::try_from(samples.len())
        .map_err(|_| LutError::InvalidSize(format!("{} samples is too wide", samples.len())))?;
    let height = u32::try_from(rows)
        .map_err(|_| LutError::InvalidSize(format!("{} rows is too tall", rows)))?;
    if width == 0 || height == 0 {
        return Err(LutError::InvalidSize(format!("empty preview: {}x{}", width, height)));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| LutError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&render_rgba8(samples, rows))
        .map_err(|e| LutError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| LutError::EncodeError(e.to_string()))?;

    debug!(path = %path.display(), width, height, "Wrote preview");
    Ok(())
}

/// Truncating quantization, `clamp(v * 255)`.
#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile_lut;

    #[test]
    fn strip_dimensions() {
        let lut = compile_lut(&[], 16).unwrap();
        let data = render_rgba8(&lut, 4);
        assert_eq!(data.len(), 16 * 4 * 4);
        // Rows are identical
        assert_eq!(&data[..64], &data[64..128]);
    }

    #[test]
    fn quantization() {
        assert_eq!(to_u8(0.0), 0);
        assert_eq!(to_u8(1.0), 255);
        assert_eq!(to_u8(0.5), 127);
        assert_eq!(to_u8(2.0), 255);
        assert_eq!(to_u8(-1.0), 0);
    }

    #[test]
    fn ramp_endpoints() {
        let lut = compile_lut(&[], 3).unwrap();
        let data = render_rgba8(&lut, 1);
        assert_eq!(&data[..4], &[0, 0, 0, 0]);
        assert_eq!(&data[8..], &[255, 255, 255, 255]);
    }

    #[test]
    fn rejects_empty_preview() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_png(dir.path().join("p.png"), &[], 8).unwrap_err();
        assert!(matches!(err, LutError::InvalidSize(_)));
    }
}
