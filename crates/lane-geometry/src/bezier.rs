//! Cubic Bezier segment and the parametric curve trait.

use lane_core::{LaneError, Result, Validate};
use lane_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}

/// A single cubic Bezier segment, parameterized over `[0, 1]`.
///
/// Exactly four control points define one evaluable segment; the array is
/// never resized. Piecewise chains of segments are not part of this type's
/// contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CubicBezier {
    pub points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(points: [Point3; 4]) -> Self {
        Self { points }
    }

    /// Four coincident points; the shape a curve has before it is seeded.
    pub fn degenerate(p: Point3) -> Self {
        Self { points: [p; 4] }
    }

    pub fn start(&self) -> Point3 {
        self.points[0]
    }

    pub fn end(&self) -> Point3 {
        self.points[3]
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        point_on_cubic(&self.points, t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl Validate for CubicBezier {
    fn validate(&self) -> Result<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !p.is_finite() {
                return Err(LaneError::Validation(format!(
                    "control point {} is not finite: {:?}",
                    i, p
                )));
            }
        }
        Ok(())
    }
}

/// Evaluate a cubic Bezier at parameter `t` using De Casteljau's algorithm:
/// three successive lerp passes reduce 4 points to 3, to 2, to 1.
///
/// `t` is deliberately NOT clamped; values outside `[0, 1]` extrapolate
/// along the same affine formula.
pub fn point_on_cubic(points: &[Point3; 4], t: f64) -> Point3 {
    let q0 = points[0].lerp(points[1], t);
    let q1 = points[1].lerp(points[2], t);
    let q2 = points[2].lerp(points[3], t);

    let r0 = q0.lerp(q1, t);
    let r1 = q1.lerp(q2, t);

    r0.lerp(r1, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_math::{DQuat, DVec3, Frame};

    fn straight_line() -> CubicBezier {
        CubicBezier::new([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_endpoints_interpolate() {
        let curve = CubicBezier::new([
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(4.0, 0.0, -1.0),
            DVec3::new(-2.0, 5.0, 0.5),
            DVec3::new(7.0, -3.0, 2.0),
        ]);
        assert!((curve.point_at(0.0) - curve.points[0]).length() < 1e-12);
        assert!((curve.point_at(1.0) - curve.points[3]).length() < 1e-12);
    }

    #[test]
    fn test_matches_closed_form() {
        // De Casteljau must agree with the Bernstein expansion
        let curve = CubicBezier::new([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 3.0, 0.0),
            DVec3::new(2.0, 3.0, 1.0),
            DVec3::new(3.0, 0.0, 2.0),
        ]);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let u = 1.0 - t;
            let [p0, p1, p2, p3] = curve.points;
            let expected = u * u * u * p0
                + 3.0 * u * u * t * p1
                + 3.0 * u * t * t * p2
                + t * t * t * p3;
            assert!(
                (curve.point_at(t) - expected).length() < 1e-12,
                "mismatch at t={}",
                t
            );
        }
    }

    #[test]
    fn test_straight_line_is_linear_in_t() {
        let curve = straight_line();
        for i in 0..=12 {
            let t = i as f64 / 12.0;
            let p = curve.point_at(t);
            assert!((p.x - 3.0 * t).abs() < 1e-12, "x at t={}: {}", t, p.x);
            assert!(p.y.abs() < 1e-12);
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn test_t_is_not_clamped() {
        // Extrapolation past the endpoints follows the same polynomial
        let curve = straight_line();
        let before = curve.point_at(-0.5);
        let after = curve.point_at(1.5);
        assert!((before.x - -1.5).abs() < 1e-12);
        assert!((after.x - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_affine_equivariance() {
        // T(B(t)) == B'(t) where B' evaluates the transformed control points
        let curve = CubicBezier::new([
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 2.0, -1.0),
            DVec3::new(2.0, -1.0, 1.0),
            DVec3::new(3.0, 0.0, 0.0),
        ]);
        let frame = Frame::new(
            DVec3::new(4.0, -2.0, 9.0),
            DQuat::from_rotation_z(0.7),
            DVec3::new(2.0, 0.5, 1.5),
        );
        let transformed = CubicBezier::new(curve.points.map(|p| frame.local_to_world(p)));
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            let lhs = frame.local_to_world(curve.point_at(t));
            let rhs = transformed.point_at(t);
            assert!((lhs - rhs).length() < 1e-9, "diverged at t={}", t);
        }
    }

    #[test]
    fn test_tangent_of_straight_line() {
        use approx::assert_relative_eq;

        let curve = straight_line();
        for i in 0..=5 {
            let t = i as f64 / 5.0;
            let tang = curve.tangent_at(t);
            assert_relative_eq!(tang.x, 3.0, epsilon = 1e-12);
            assert_relative_eq!(tang.y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(tang.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_domain() {
        assert_eq!(straight_line().domain(), (0.0, 1.0));
        assert!(!straight_line().is_closed());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut curve = straight_line();
        assert!(curve.validate().is_ok());
        curve.points[2].y = f64::NAN;
        assert!(curve.validate().is_err());
    }
}
