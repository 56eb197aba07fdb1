//! Control points and the boundary anchors.

/// A sparse anchor of the transfer function.
///
/// Colors are in `0..255`, alpha in `0..1`. Neither the position nor the
/// channels are range-checked; out-of-domain positions are extrapolated flat
/// by the compiler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position along the scalar axis, nominally `[0, 1]`
    pub position: f64,
    /// Red, `0..255`
    pub r: f64,
    /// Green, `0..255`
    pub g: f64,
    /// Blue, `0..255`
    pub b: f64,
    /// Alpha, `0..1`
    pub a: f64,
}

impl ControlPoint {
    /// Creates a control point.
    #[inline]
    pub const fn new(position: f64, r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { position, r, g, b, a }
    }
}

/// The two implicit endpoints every transfer function carries.
///
/// The default is black and transparent at 0, white and opaque at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    /// Prepended before sorting
    pub start: ControlPoint,
    /// Appended before sorting
    pub end: ControlPoint,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            start: ControlPoint::new(0.0, 0.0, 0.0, 0.0, 0.0),
            end: ControlPoint::new(1.0, 255.0, 255.0, 255.0, 1.0),
        }
    }
}

impl Anchors {
    /// Combines the anchors with user points and stable-sorts by position.
    ///
    /// Points sharing a position keep their relative order: start anchor,
    /// then user points as given, then end anchor. Positions are ordered by
    /// [`f64::total_cmp`], so a positive NaN sorts after every number.
    pub fn ordered(&self, points: &[ControlPoint]) -> Vec<ControlPoint> {
        let mut all = Vec::with_capacity(points.len() + 2);
        all.push(self.start);
        all.extend_from_slice(points);
        all.push(self.end);
        all.sort_by(|a, b| a.position.total_cmp(&b.position));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_wraps_user_points() {
        let anchors = Anchors::default();
        let points = [
            ControlPoint::new(0.75, 10.0, 10.0, 10.0, 0.5),
            ControlPoint::new(0.25, 20.0, 20.0, 20.0, 0.5),
        ];
        let ordered = anchors.ordered(&points);

        let positions: Vec<f64> = ordered.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0.0, 0.25, 0.75, 1.0]);
        assert_eq!(ordered[0], anchors.start);
        assert_eq!(ordered[3], anchors.end);
    }

    #[test]
    fn ties_are_stable() {
        let anchors = Anchors::default();
        let first = ControlPoint::new(0.5, 1.0, 0.0, 0.0, 1.0);
        let second = ControlPoint::new(0.5, 2.0, 0.0, 0.0, 1.0);
        let user_start = ControlPoint::new(0.0, 9.0, 9.0, 9.0, 1.0);

        let ordered = anchors.ordered(&[first, user_start, second]);
        assert_eq!(ordered[0], anchors.start);
        assert_eq!(ordered[1], user_start);
        assert_eq!(ordered[2], first);
        assert_eq!(ordered[3], second);
    }

    #[test]
    fn nan_positions_sort_last() {
        let anchors = Anchors::default();
        let nan = ControlPoint::new(f64::NAN, 1.0, 1.0, 1.0, 1.0);
        let mid = ControlPoint::new(0.5, 2.0, 2.0, 2.0, 1.0);

        let ordered = anchors.ordered(&[nan, mid]);
        assert_eq!(ordered[0], anchors.start);
        assert_eq!(ordered[1], mid);
        assert_eq!(ordered[2], anchors.end);
        assert!(ordered[3].position.is_nan());
    }

    #[test]
    fn empty_input_yields_anchors_only() {
        let anchors = Anchors::default();
        assert_eq!(anchors.ordered(&[]), vec![anchors.start, anchors.end]);
    }
}
