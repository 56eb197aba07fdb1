//! Random point cloud command

use crate::PointsArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use volren_points::{generate, write_points3d_txt, Aabb};

pub fn run(args: PointsArgs, verbose: u8) -> Result<()> {
    trace!(num = args.num, seed = ?args.seed, "points::run");

    let aabb = Aabb::new(
        [args.xmin, args.ymin, args.zmin],
        [args.xmax, args.ymax, args.zmax],
    )?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(num = args.num, min = ?aabb.min, max = ?aabb.max, "Generating points");
    let points = generate(&aabb, args.num, &mut rng);

    super::ensure_parent_dir(&args.output)?;
    write_points3d_txt(&args.output, &points)
        .with_context(|| format!("Failed to write points: {}", args.output.display()))?;

    if verbose > 0 {
        println!("Saved {} points to {}", points.len(), args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: std::path::PathBuf, seed: Option<u64>) -> PointsArgs {
        PointsArgs {
            xmin: -1.0,
            ymin: -1.0,
            zmin: -1.0,
            xmax: 1.0,
            ymax: 1.0,
            zmax: 1.0,
            num: 25,
            output,
            seed,
        }
    }

    #[test]
    fn seeded_runs_match() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a").join("points3D.txt");
        let b = dir.path().join("b").join("points3D.txt");

        run(args(a.clone(), Some(3)), 0).unwrap();
        run(args(b.clone(), Some(3)), 0).unwrap();

        let text = std::fs::read_to_string(&a).unwrap();
        assert_eq!(text, std::fs::read_to_string(&b).unwrap());
        assert_eq!(text.lines().count(), 3 + 25);
    }

    #[test]
    fn inverted_box_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("points3D.txt");
        let mut args = args(out.clone(), None);
        args.xmin = 2.0;

        assert!(run(args, 0).is_err());
        assert!(!out.exists());
    }
}
