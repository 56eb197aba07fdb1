//! Piecewise-linear compilation of control points into a dense LUT.
//!
//! Sample `i` of an `n`-entry table sits at `t = i / (n - 1)`. Each sample is
//! the linear blend of the two sorted control points bracketing `t`; colors
//! are normalized from `0..255` to `0..1` and every channel is clamped.

use crate::{Anchors, ControlPoint, LutError, LutResult};
use tracing::trace;

/// One compiled LUT entry, all channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Sample {
    /// Returns the sample as `[r, g, b, a]`.
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Compiles control points into `sample_count` samples using the default
/// black-to-white [`Anchors`].
///
/// # Errors
///
/// [`LutError::InvalidSize`] if `sample_count < 2`.
///
/// # Example
///
/// ```rust
/// use volren_lut::compile_lut;
///
/// let lut = compile_lut(&[], 3).unwrap();
/// assert_eq!(lut[1].a, 0.5);
/// ```
pub fn compile_lut(points: &[ControlPoint], sample_count: usize) -> LutResult<Vec<Sample>> {
    compile_lut_with(points, &Anchors::default(), sample_count)
}

/// Compiles control points into `sample_count` samples with explicit anchors.
pub fn compile_lut_with(
    points: &[ControlPoint],
    anchors: &Anchors,
    sample_count: usize,
) -> LutResult<Vec<Sample>> {
    if sample_count < 2 {
        return Err(LutError::InvalidSize(format!(
            "sample count must be at least 2, got {}",
            sample_count
        )));
    }

    let sorted = anchors.ordered(points);
    trace!(points = sorted.len(), samples = sample_count, "compile_lut");

    let samples = (0..sample_count)
        .map(|i| {
            let t = sample_position(i, sample_count);
            let (left, right) = bracket(&sorted, t);
            blend(left, right, interpolation_factor(left, right, t))
        })
        .collect();

    Ok(samples)
}

/// Position of sample `i` in an `n`-entry table, `i / (n - 1)`.
#[inline]
fn sample_position(i: usize, n: usize) -> f64 {
    i as f64 / (n - 1) as f64
}

/// Finds the sorted pair surrounding `t`.
///
/// `right` is the first point at or past `t` and `left` its predecessor. At
/// or before the first point both are the first point; past the last point
/// both are the last point. `sorted` always holds the two anchors.
fn bracket(sorted: &[ControlPoint], t: f64) -> (&ControlPoint, &ControlPoint) {
    let idx = sorted.partition_point(|p| p.position < t);
    if idx == 0 {
        (&sorted[0], &sorted[0])
    } else if idx == sorted.len() {
        (&sorted[idx - 1], &sorted[idx - 1])
    } else {
        (&sorted[idx - 1], &sorted[idx])
    }
}

fn interpolation_factor(left: &ControlPoint, right: &ControlPoint, t: f64) -> f64 {
    if left.position == right.position {
        0.5
    } else {
        (t - left.position) / (right.position - left.position)
    }
}

fn blend(left: &ControlPoint, right: &ControlPoint, f: f64) -> Sample {
    let lerp = |l: f64, r: f64| l + (r - l) * f;
    Sample {
        r: (lerp(left.r, right.r) / 255.0).clamp(0.0, 1.0),
        g: (lerp(left.g, right.g) / 255.0).clamp(0.0, 1.0),
        b: (lerp(left.b, right.b) / 255.0).clamp(0.0, 1.0),
        a: lerp(left.a, right.a).clamp(0.0, 1.0),
    }
}
