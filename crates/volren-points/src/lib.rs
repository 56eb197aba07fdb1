//! # volren-points
//!
//! Uniform random point clouds inside an axis-aligned box, written as a
//! COLMAP `points3D.txt` file. Useful as an initialization for
//! reconstructions that have no sparse points of their own.
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use volren_points::{generate, Aabb};
//!
//! let aabb = Aabb::new([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]).unwrap();
//! let points = generate(&aabb, 100, &mut StdRng::seed_from_u64(7));
//! assert_eq!(points.len(), 100);
//! ```

#![warn(missing_docs)]

mod cloud;
mod error;
pub mod colmap;

pub use cloud::{generate, Aabb, Point3D};
pub use colmap::write_points3d_txt;
pub use error::{PointsError, PointsResult};
