//! # volren-lut
//!
//! Transfer-function lookup tables for volume rendering.
//!
//! A transfer function is described by a handful of sparse control points,
//! each a position in `[0, 1]` with an RGB color (0..255) and an alpha
//! (0..1). This crate compiles those points into a dense, ordered table of
//! normalized RGBA samples that a renderer can index directly.
//!
//! # Modules
//!
//! - [`ControlPoint`] / [`Anchors`] - sparse input and the fixed boundary anchors
//! - [`compile_lut`] - piecewise-linear compilation into [`Sample`]s
//! - [`tf`] - control-point parsing and LUT text output
//! - [`preview`] - PNG strip preview of a compiled table
//!
//! # Usage
//!
//! ```rust
//! use volren_lut::{compile_lut, ControlPoint};
//!
//! let points = [ControlPoint::new(0.5, 255.0, 0.0, 0.0, 0.2)];
//! let lut = compile_lut(&points, 256).unwrap();
//! assert_eq!(lut.len(), 256);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`png`] - Preview encoding
//!
//! # Used By
//!
//! - `volren-cli` - `volren tf` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod control;
mod compile;
mod error;
pub mod tf;
pub mod preview;

pub use control::{Anchors, ControlPoint};
pub use compile::{compile_lut, compile_lut_with, Sample};
pub use error::{LutError, LutResult};
pub use tf::{parse_point_arg, read_control_points, write_lut};
