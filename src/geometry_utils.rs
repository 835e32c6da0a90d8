use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::Point2D;

pub fn distance_points(a: &Point2D, b: &Point2D) -> f32 {
    let (x1, y1) = *a;
    let (x2, y2) = *b;

    f32::sqrt(f32::powi(x1 - x2, 2) + f32::powi(y1 - y2, 2))
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1. - t) + (b * t)
}

pub fn lerp_points(a: &Point2D, b: &Point2D, t: f32) -> Point2D {
    (lerp(a.0, b.0, t), lerp(a.1, b.1, t))
}

/// Smoothstep easing; monotonic on [0,1], with exact endpoints.
/// Input outside the range is clamped.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0., 1.);
    t * t * (3. - 2. * t)
}

/// Angle (radians, from the positive x-axis) of the segment start->end.
///
/// A zero-length segment has no direction; it is reported as 0 so that
/// callers always get a stable, finite angle.
pub fn direction_angle(start: &Point2D, end: &Point2D) -> f32 {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    if dx == 0. && dy == 0. {
        0.
    } else {
        dy.atan2(dx)
    }
}

/// A straight shaft from `start` to `end`, plus two barbs which both
/// begin at `end` and finish at the points in `barbs`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ArrowShape {
    pub start: Point2D,
    pub end: Point2D,
    pub barbs: [Point2D; 2],
}

impl ArrowShape {
    /// All the line segments needed to stroke this arrow: shaft first, then each barb
    pub fn lines(&self) -> [(Point2D, Point2D); 3] {
        let [a, b] = self.barbs;
        [(self.start, self.end), (self.end, a), (self.end, b)]
    }

    pub fn length(&self) -> f32 {
        distance_points(&self.start, &self.end)
    }
}

/// Each barb points from `end` back towards `start`, rotated by +/- `barb_angle`
/// (radians) from the reversed direction, and is `barb_length` long.
pub fn compute_arrow(start: Point2D, end: Point2D, barb_length: f32, barb_angle: f32) -> ArrowShape {
    let angle = direction_angle(&start, &end);
    let reversed = Rotation2::new(angle) * Vector2::new(-barb_length, 0.);
    let tip = Vector2::new(end.0, end.1);

    let barbs = [barb_angle, -barb_angle].map(|a| {
        let p = tip + Rotation2::new(a) * reversed;
        (p.x, p.y)
    });

    ArrowShape { start, end, barbs }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_4;

    use super::*;

    fn approx(a: Point2D, b: Point2D) -> bool {
        distance_points(&a, &b) < 0.001
    }

    #[test]
    fn test_direction_cardinals() {
        assert_eq!(direction_angle(&(0., 0.), &(1., 0.)), 0.); // E
        assert!((direction_angle(&(0., 0.), &(0., 3.)) - FRAC_PI_4 * 2.).abs() < 1e-6); // S, in a y-down view
        assert!((direction_angle(&(5., 5.), &(6., 6.)) - FRAC_PI_4).abs() < 1e-6);
        assert_eq!(direction_angle(&(2., 2.), &(2., 2.)), 0.); // degenerate
    }

    #[test]
    fn test_arrow_pointing_right() {
        let arrow = compute_arrow((0., 0.), (10., 0.), 10., FRAC_PI_4);
        let half = 10. * FRAC_PI_4.cos();
        assert_eq!(arrow.start, (0., 0.));
        assert_eq!(arrow.end, (10., 0.));
        assert!(approx(arrow.barbs[0], (10. - half, -half)));
        assert!(approx(arrow.barbs[1], (10. - half, half)));
    }

    #[test]
    fn test_arrow_pointing_down() {
        let arrow = compute_arrow((10., 0.), (10., 10.), 10., FRAC_PI_4);
        let half = 10. * FRAC_PI_4.cos();
        // Both barbs sit "above" the tip, one either side of the shaft
        assert!(arrow.barbs.iter().all(|b| approx((0., b.1), (0., 10. - half))));
        assert!(arrow.barbs.iter().any(|b| approx((b.0, 0.), (10. + half, 0.))));
        assert!(arrow.barbs.iter().any(|b| approx((b.0, 0.), (10. - half, 0.))));
    }

    #[test]
    fn test_barbs_have_requested_length() {
        let arrow = compute_arrow((-3., 7.), (40., -12.), 15., 0.3);
        for b in arrow.barbs {
            assert!((distance_points(&arrow.end, &b) - 15.).abs() < 0.001);
        }
    }

    #[test]
    fn test_degenerate_arrow_is_anchored() {
        let p = (4., 4.);
        let arrow = compute_arrow(p, p, 10., FRAC_PI_4);
        assert_eq!(arrow.length(), 0.);
        for (from, to) in arrow.lines() {
            assert_eq!(from, p);
            assert!(to.0.is_finite() && to.1.is_finite());
        }
        // Falls back to pointing along +x
        assert_eq!(arrow.barbs, compute_arrow((0., 4.), p, 10., FRAC_PI_4).barbs);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out(0.), 0.);
        assert_eq!(ease_in_out(1.), 1.);
        assert_eq!(ease_in_out(-2.), 0.);
        assert_eq!(ease_in_out(7.), 1.);
        let mut last = 0.;
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.);
            assert!(v >= last);
            last = v;
        }
    }
}
