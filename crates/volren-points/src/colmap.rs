//! COLMAP `points3D.txt` writer.
//!
//! ```text
//! # 3D point list with one line of data per point:
//! #   POINT3D_ID, X, Y, Z, R, G, B, ERROR, TRACK[] as (IMAGE_ID, POINT2D_IDX)
//! # Number of points: 2, mean track length: 0
//! 0 0.1 0.2 0.3 255 0 0 0
//! 1 0.4 0.5 0.6 0 255 0 0
//! ```

use crate::{Point3D, PointsResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes points to a `points3D.txt` file.
pub fn write_points3d_txt(path: impl AsRef<Path>, points: &[Point3D]) -> PointsResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    format_points3d(&mut writer, points)?;
    writer.flush()?;

    debug!(path = %path.as_ref().display(), points = points.len(), "Wrote points3D");
    Ok(())
}

/// Formats points in `points3D.txt` layout into any writer.
pub fn format_points3d<W: Write>(mut writer: W, points: &[Point3D]) -> PointsResult<()> {
    let mean_track_length = if points.is_empty() {
        0.0
    } else {
        points.iter().map(|p| p.track.len()).sum::<usize>() as f64 / points.len() as f64
    };

    writeln!(writer, "# 3D point list with one line of data per point:")?;
    writeln!(
        writer,
        "#   POINT3D_ID, X, Y, Z, R, G, B, ERROR, TRACK[] as (IMAGE_ID, POINT2D_IDX)"
    )?;
    writeln!(
        writer,
        "# Number of points: {}, mean track length: {}",
        points.len(),
        mean_track_length
    )?;

    for p in points {
        write!(
            writer,
            "{} {} {} {} {} {} {} {}",
            p.id, p.xyz[0], p.xyz[1], p.xyz[2], p.rgb[0], p.rgb[1], p.rgb[2], p.error
        )?;
        for (image_id, point2d_idx) in &p.track {
            write!(writer, " {} {}", image_id, point2d_idx)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
