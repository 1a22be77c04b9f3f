//! Piecewise-linear membership functions.
//!
//! A [`MembershipShape`] is three ordered breakpoints. Between the first and
//! second breakpoint the degree follows the rising segment, between the second
//! and third the falling segment, and outside the support the degree is 0.
//! An open side turns the shape into a shoulder that saturates to 1 beyond
//! that boundary.

use serde::{Deserialize, Serialize};

/// A breakpoint of a membership shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Three breakpoints plus the two shoulder flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipShape {
    pub points: [Point; 3],
    /// Saturate to 1 left of the first breakpoint.
    pub left_open: bool,
    /// Saturate to 1 right of the third breakpoint.
    pub right_open: bool,
}

impl MembershipShape {
    pub const fn new(points: [Point; 3], left_open: bool, right_open: bool) -> Self {
        Self {
            points,
            left_open,
            right_open,
        }
    }

    /// A closed triangle rising from `left` to a peak of 1 at `peak`, back to 0 at `right`.
    pub const fn triangle(left: f64, peak: f64, right: f64) -> Self {
        Self::new(
            [Point::new(left, 0.0), Point::new(peak, 1.0), Point::new(right, 0.0)],
            false,
            false,
        )
    }

    /// A shoulder that holds 1 at and below `edge` and decays to 0 at `right`.
    ///
    /// The first two breakpoints share `edge`, so the rising side is a vertical segment.
    pub const fn left_shoulder(edge: f64, right: f64) -> Self {
        Self::new(
            [Point::new(edge, 0.0), Point::new(edge, 1.0), Point::new(right, 0.0)],
            true,
            false,
        )
    }

    /// A shoulder that rises from 0 at `left` and holds 1 at and above `edge`.
    pub const fn right_shoulder(left: f64, edge: f64) -> Self {
        Self::new(
            [Point::new(left, 0.0), Point::new(edge, 1.0), Point::new(edge, 0.0)],
            false,
            true,
        )
    }

    /// Degree of membership of `x`, always within [0, 1].
    pub fn evaluate(&self, x: f64) -> f64 {
        let [p1, p2, p3] = self.points;

        let y = if self.left_open && x <= p2.x {
            if x <= p1.x {
                1.0
            } else {
                segment(p1, p2, x)
            }
        } else if self.right_open && p2.x <= x {
            if p3.x <= x {
                1.0
            } else {
                segment(p3, p2, x)
            }
        } else if p1.x <= x && x <= p2.x {
            segment(p1, p2, x)
        } else if p2.x <= x && x <= p3.x {
            segment(p3, p2, x)
        } else {
            0.0
        };

        if y.is_nan() {
            0.0
        } else {
            y.clamp(0.0, 1.0)
        }
    }

    /// The `[first, last]` breakpoint x-coordinates. Shoulders extend past these.
    pub fn support(&self) -> (f64, f64) {
        (self.points[0].x, self.points[2].x)
    }
}

/// Value at `x` of the straight line through `a` and `b`.
///
/// A vertical segment (`a.x == b.x`) has no slope; it yields the larger of the
/// two y-values for every `x`.
pub fn segment(a: Point, b: Point, x: f64) -> f64 {
    if a.x == b.x {
        return a.y.max(b.y);
    }
    a.y + (x - a.x) * (b.y - a.y) / (b.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn triangle_peak_and_edges() {
        let t = MembershipShape::triangle(30.0, 60.0, 90.0);
        assert!(close(t.evaluate(60.0), 1.0));
        assert!(close(t.evaluate(30.0), 0.0));
        assert!(close(t.evaluate(90.0), 0.0));
        assert!(close(t.evaluate(45.0), 0.5));
        assert!(close(t.evaluate(75.0), 0.5));
    }

    #[test]
    fn outside_support_is_zero() {
        let t = MembershipShape::triangle(30.0, 60.0, 90.0);
        assert_eq!(t.evaluate(29.9), 0.0);
        assert_eq!(t.evaluate(90.1), 0.0);
        assert_eq!(t.evaluate(-1e12), 0.0);
        assert_eq!(t.evaluate(f64::INFINITY), 0.0);
    }

    #[test]
    fn left_shoulder_saturates() {
        let s = MembershipShape::left_shoulder(-200.0, -100.0);
        assert_eq!(s.evaluate(-200.0), 1.0);
        assert_eq!(s.evaluate(-5000.0), 1.0);
        assert_eq!(s.evaluate(f64::NEG_INFINITY), 1.0);
        assert!(close(s.evaluate(-150.0), 0.5));
        assert_eq!(s.evaluate(-100.0), 0.0);
        assert_eq!(s.evaluate(0.0), 0.0);
    }

    #[test]
    fn right_shoulder_saturates() {
        let s = MembershipShape::right_shoulder(100.0, 200.0);
        assert_eq!(s.evaluate(200.0), 1.0);
        assert_eq!(s.evaluate(1e9), 1.0);
        assert_eq!(s.evaluate(f64::INFINITY), 1.0);
        assert!(close(s.evaluate(150.0), 0.5));
        assert_eq!(s.evaluate(100.0), 0.0);
        assert_eq!(s.evaluate(-300.0), 0.0);
    }

    #[test]
    fn vertical_segment_takes_larger_y() {
        let a = Point::new(5.0, 0.2);
        let b = Point::new(5.0, 0.9);
        for x in [-100.0, 0.0, 5.0, 42.0] {
            assert_eq!(segment(a, b, x), 0.9);
            assert_eq!(segment(b, a, x), 0.9);
        }
    }

    #[test]
    fn degenerate_shape_at_shared_breakpoint() {
        let shape = MembershipShape::new(
            [Point::new(0.0, 0.3), Point::new(0.0, 0.8), Point::new(10.0, 0.0)],
            false,
            false,
        );
        assert_eq!(shape.evaluate(0.0), 0.8);
    }

    #[test]
    fn nan_input_is_zero() {
        assert_eq!(MembershipShape::triangle(0.0, 1.0, 2.0).evaluate(f64::NAN), 0.0);
        assert_eq!(MembershipShape::left_shoulder(0.0, 1.0).evaluate(f64::NAN), 0.0);
        assert_eq!(MembershipShape::right_shoulder(0.0, 1.0).evaluate(f64::NAN), 0.0);
    }

    #[test]
    fn out_of_range_breakpoints_are_clamped() {
        let shape = MembershipShape::new(
            [Point::new(0.0, -1.0), Point::new(1.0, 3.0), Point::new(2.0, 0.0)],
            false,
            false,
        );
        for i in 0..=20 {
            let y = shape.evaluate(f64::from(i) * 0.1);
            assert!((0.0..=1.0).contains(&y), "degree {y} escaped [0, 1]");
        }
    }
}
