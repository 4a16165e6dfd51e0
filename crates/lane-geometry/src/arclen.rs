//! Piecewise-linear arc-length estimation and inversion.
//!
//! Both functions walk the same uniform parameter subdivision: accuracy is
//! bounded by `subdivisions` and improves monotonically with it. Nothing is
//! cached between calls; cost is O(subdivisions) per call.

use lane_math::Point3;

use crate::bezier::point_on_cubic;

/// Estimate the arc length of a cubic Bezier by summing chord lengths over
/// `subdivisions` uniform parameter steps.
///
/// `subdivisions` is clamped to at least 1. For interactive use the useful
/// range is roughly 2 to 50.
pub fn estimate_length(points: &[Point3; 4], subdivisions: usize) -> f64 {
    let subdivisions = subdivisions.max(1);

    let mut length = 0.0;
    let mut prev = point_on_cubic(points, 0.0);
    for i in 1..=subdivisions {
        let t = i as f64 / subdivisions as f64;
        let next = point_on_cubic(points, t);
        length += (next - prev).length();
        prev = next;
    }
    length
}

/// Locate the point a given distance along the curve, walking the same
/// uniform subdivision as [`estimate_length`].
///
/// Within the subdivision segment that crosses `target`, the curve is
/// treated as locally straight: the result is lerped inside the chord, not
/// re-evaluated on the cubic. If `target` exceeds the total estimated
/// length (floating-point overshoot or caller error), the curve endpoint
/// is returned.
pub fn point_at_distance(points: &[Point3; 4], target: f64, subdivisions: usize) -> Point3 {
    let subdivisions = subdivisions.max(1);

    let mut accumulated = 0.0;
    let mut prev = point_on_cubic(points, 0.0);
    for i in 1..=subdivisions {
        let t = i as f64 / subdivisions as f64;
        let next = point_on_cubic(points, t);
        let seg_len = (next - prev).length();
        // Degenerate segments carry no length; skip so the lerp factor
        // below never divides by zero.
        if seg_len > 0.0 && accumulated + seg_len >= target {
            let f = (target - accumulated) / seg_len;
            return prev.lerp(next, f);
        }
        accumulated += seg_len;
        prev = next;
    }

    point_on_cubic(points, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_math::DVec3;

    fn straight_line() -> [Point3; 4] {
        [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_straight_line_length_exact_for_any_subdivisions() {
        // Chords of a straight segment have no approximation error
        let points = straight_line();
        for subdivisions in [1, 2, 5, 17, 50] {
            let len = estimate_length(&points, subdivisions);
            assert!(
                (len - 3.0).abs() < 1e-12,
                "length {} at {} subdivisions",
                len,
                subdivisions
            );
        }
    }

    #[test]
    fn test_length_improves_monotonically() {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
            DVec3::new(3.0, 2.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ];
        // Chord approximations underestimate; refining never shrinks them
        let coarse = estimate_length(&points, 2);
        let medium = estimate_length(&points, 10);
        let fine = estimate_length(&points, 50);
        assert!(coarse <= medium + 1e-12);
        assert!(medium <= fine + 1e-12);
    }

    #[test]
    fn test_zero_subdivisions_clamps_to_one() {
        let points = straight_line();
        let len = estimate_length(&points, 0);
        assert!((len - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_at_distance_on_straight_line() {
        let points = straight_line();
        for target in [0.0, 0.5, 1.0, 2.25, 3.0] {
            let p = point_at_distance(&points, target, 10);
            assert!(
                (p.x - target).abs() < 1e-12,
                "target {} gave x {}",
                target,
                p.x
            );
        }
    }

    #[test]
    fn test_overshoot_falls_back_to_endpoint() {
        let points = straight_line();
        let p = point_at_distance(&points, 100.0, 10);
        let end = point_on_cubic(&points, 1.0);
        assert!((p - end).length() < 1e-12);
    }

    #[test]
    fn test_degenerate_curve_has_zero_length() {
        let points = [DVec3::new(2.0, 1.0, -4.0); 4];
        assert_eq!(estimate_length(&points, 10), 0.0);
        // Every lookup lands on the (only) point without dividing by zero
        let p = point_at_distance(&points, 1.0, 10);
        assert!((p - points[0]).length() < 1e-12);
    }
}
