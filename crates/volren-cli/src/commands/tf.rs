//! Transfer-function LUT command

use crate::TfArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use volren_lut::preview::{self, PREVIEW_ROWS, PREVIEW_SAMPLES};
use volren_lut::{compile_lut, ControlPoint, tf};

pub fn run(args: TfArgs, verbose: u8) -> Result<()> {
    trace!(lines = args.lines, inputs = args.input.len(), "tf::run");

    let points = collect_points(&args)?;
    info!(points = points.len(), lines = args.lines, "Compiling transfer function");

    // Both tables are compiled before any file is written
    let lut = compile_lut(&points, args.lines).context("Failed to compile LUT")?;
    let preview_lut = match args.preview {
        Some(_) => Some(compile_lut(&points, PREVIEW_SAMPLES).context("Failed to compile preview")?),
        None => None,
    };

    tf::write_lut(&args.outfile, &lut)
        .with_context(|| format!("Failed to write LUT: {}", args.outfile.display()))?;

    if verbose > 0 {
        println!("Wrote {} entries to {}", lut.len(), args.outfile.display());
    }

    if let (Some(path), Some(samples)) = (&args.preview, &preview_lut) {
        super::ensure_parent_dir(path)?;
        preview::write_png(path, samples, PREVIEW_ROWS)
            .with_context(|| format!("Failed to write preview: {}", path.display()))?;
        if verbose > 0 {
            println!("Preview saved to {}", path.display());
        }
    }

    Ok(())
}

/// File points first, then literal arguments.
fn collect_points(args: &TfArgs) -> Result<Vec<ControlPoint>> {
    let mut points = Vec::new();

    if let Some(ref path) = args.infile {
        let from_file = tf::read_control_points(path)
            .with_context(|| format!("Failed to load control points: {}", path.display()))?;
        debug!(count = from_file.len(), "Control points from file");
        points.extend(from_file);
    }

    for input in &args.input {
        let point = tf::parse_point_arg(input).context("Invalid control point argument")?;
        points.push(point);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn args(dir: &std::path::Path) -> TfArgs {
        TfArgs {
            input: Vec::new(),
            infile: None,
            outfile: dir.join("out").join("lut.txt"),
            lines: 3,
            preview: None,
        }
    }

    #[test]
    fn writes_default_ramp() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path());
        let out = args.outfile.clone();

        run(args, 0).unwrap();
        let text = fs::read_to_string(out).unwrap();
        assert_eq!(
            text,
            "0.0000, 0.0000, 0.0000, 0.0000\n0.5000, 0.5000, 0.5000, 0.5000\n1.0000, 1.0000, 1.0000, 1.0000\n"
        );
    }

    #[test]
    fn file_points_precede_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let infile = dir.path().join("points.txt");
        fs::write(&infile, "0.5, 255, 0, 0, 1\n").unwrap();

        let mut args = args(dir.path());
        args.infile = Some(infile);
        args.input = vec!["0.5 0 255 0 1".into()];

        let points = collect_points(&args).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].r, 255.0);
        assert_eq!(points[1].g, 255.0);
    }

    #[test]
    fn bad_argument_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path());
        args.input = vec!["0.5 255 0".into()];
        let out = args.outfile.clone();

        assert!(run(args, 0).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn too_few_lines_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path());
        args.lines = 1;
        let out = args.outfile.clone();

        assert!(run(args, 0).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn writes_preview() {
        let dir = tempfile::tempdir().unwrap();
        let preview: PathBuf = dir.path().join("img").join("preview.png");
        let mut args = args(dir.path());
        args.preview = Some(preview.clone());

        run(args, 0).unwrap();
        assert!(preview.exists());
    }
}
