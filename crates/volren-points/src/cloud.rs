//! Box-bounded random points.

use crate::{PointsError, PointsResult};
use rand::Rng;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: [f64; 3],
    /// Maximum corner
    pub max: [f64; 3],
}

impl Aabb {
    /// Creates a box, rejecting any axis where `min > max` or a bound is not finite.
    pub fn new(min: [f64; 3], max: [f64; 3]) -> PointsResult<Self> {
        for (axis, (lo, hi)) in ['x', 'y', 'z'].into_iter().zip(min.into_iter().zip(max)) {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(PointsError::InvalidBounds { axis, min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }
}

/// A 3D point as stored in COLMAP's `points3D.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    /// Point id
    pub id: u64,
    /// x, y, z coordinates
    pub xyz: [f64; 3],
    /// rgb color
    pub rgb: [u8; 3],
    /// Reprojection error
    pub error: f64,
    /// Track as (image id, point2d index) pairs
    pub track: Vec<(u32, u32)>,
}

/// Draws `count` points uniformly inside `aabb` with random colors.
///
/// Ids run from 0. Generated points carry zero error and an empty track.
pub fn generate<R: Rng + ?Sized>(aabb: &Aabb, count: usize, rng: &mut R) -> Vec<Point3D> {
    (0..count as u64)
        .map(|id| Point3D {
            id,
            xyz: [0, 1, 2].map(|k| rng.random_range(aabb.min[k]..=aabb.max[k])),
            rgb: rng.random(),
            error: 0.0,
            track: Vec::new(),
        })
        .collect()
}
