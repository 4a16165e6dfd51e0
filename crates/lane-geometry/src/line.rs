//! A positioned Bezier rail: control points in a scene entity's frame.

use lane_core::{LaneError, Result, Tolerance, Validate};
use lane_math::{DVec3, DVec4, Frame, Point3};
use serde::{Deserialize, Serialize};

use crate::bezier::CubicBezier;
use crate::sample::{self, SampleSet, SamplingMode};

/// A cubic Bezier bound to a scene entity's coordinate frame.
///
/// Control points are stored in the frame's local space; every operation
/// that crosses the API boundary speaks world space. The last sampling
/// result is retained until the next `sample_curve` or
/// `clear_sample_points` call so the host can materialize it at its own
/// pace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierLine {
    bezier: CubicBezier,
    frame: Frame,
    samples: SampleSet,
    color: DVec4,
}

impl BezierLine {
    /// A line at the given frame with all control points collapsed onto
    /// the local origin; call [`seed_control_points`](Self::seed_control_points)
    /// to give it shape.
    pub fn new(frame: Frame) -> Self {
        Self {
            bezier: CubicBezier::degenerate(DVec3::ZERO),
            frame,
            samples: Vec::new(),
            color: DVec4::ONE,
        }
    }

    /// Seed the 4 control points evenly along the frame's local forward
    /// axis, starting at the local image of `origin_world` and spanning
    /// `length` local units in total.
    pub fn seed_control_points(&mut self, origin_world: Point3, length: f64) -> Result<()> {
        let origin = self.frame.world_to_local(origin_world)?;
        let spacing = length / 3.0;
        self.bezier.points =
            std::array::from_fn(|i| origin + DVec3::Z * (i as f64 * spacing));
        Ok(())
    }

    /// Replace one control point with the local image of `world_point`.
    ///
    /// An out-of-range index is a non-fatal caller slip: it is logged and
    /// reported, and the curve is left untouched.
    pub fn update_control_point(&mut self, index: usize, world_point: Point3) -> Result<()> {
        let len = self.bezier.points.len();
        if index >= len {
            log::warn!(
                "ignoring control point update: index {} out of range (len {})",
                index,
                len
            );
            return Err(LaneError::ControlPointIndex { index, len });
        }
        self.bezier.points[index] = self.frame.world_to_local(world_point)?;
        Ok(())
    }

    /// All 4 control points mapped into world space. Read-only projection;
    /// the stored local points are untouched.
    pub fn world_control_points(&self) -> [Point3; 4] {
        self.bezier.points.map(|p| self.frame.local_to_world(p))
    }

    /// Re-sample the curve with the given mode, replacing the retained
    /// sample set wholesale. Points come back in world space.
    pub fn sample_curve(&mut self, mode: SamplingMode, subdivisions: usize) -> Result<&[Point3]> {
        let local = sample::sample(&self.bezier.points, mode, subdivisions)?;
        self.samples = local
            .into_iter()
            .map(|p| self.frame.local_to_world(p))
            .collect();
        Ok(&self.samples)
    }

    /// The world-space points of the last `sample_curve` call, if any.
    pub fn sample_points(&self) -> &[Point3] {
        &self.samples
    }

    pub fn clear_sample_points(&mut self) {
        self.samples.clear();
    }

    pub fn bezier(&self) -> &CubicBezier {
        &self.bezier
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Host pushes the scene entity's current transform here whenever it
    /// moves; retained samples are not remapped automatically.
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    /// Display color tag (RGBA) carried for the host; never interpreted
    /// by the core.
    pub fn color(&self) -> DVec4 {
        self.color
    }

    pub fn set_color(&mut self, color: DVec4) {
        self.color = color;
    }
}

impl Validate for BezierLine {
    fn validate(&self) -> Result<()> {
        self.bezier.validate()?;
        let tol = Tolerance::default_precision();
        if [self.frame.scale.x, self.frame.scale.y, self.frame.scale.z]
            .iter()
            .any(|&s| tol.is_zero(s))
        {
            return Err(LaneError::Validation(format!(
                "frame scale {:?} has a zero component",
                self.frame.scale
            )));
        }
        Ok(())
    }
}
