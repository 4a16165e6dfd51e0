//! A lane: two Bezier rails sampled together.

use lane_core::Result;
use lane_math::{Frame, Point3};
use serde::{Deserialize, Serialize};

use crate::line::BezierLine;
use crate::sample::SamplingMode;

/// A pair of parallel rails, designated right and left.
///
/// The lane has no geometry of its own; it only coordinates sampling
/// across the pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    right: BezierLine,
    left: BezierLine,
}

impl Lane {
    pub fn new(right: BezierLine, left: BezierLine) -> Self {
        Self { right, left }
    }

    /// Place a lane at `origin_world`: two straight rails of the given
    /// `length`, offset `width / 2` to either side along the placement
    /// frame's right axis.
    pub fn spawn(frame: Frame, width: f64, length: f64) -> Result<Self> {
        let half = frame.right() * (width / 2.0);

        let right_origin = frame.translation + half;
        let mut right = BezierLine::new(Frame {
            translation: right_origin,
            ..frame
        });
        right.seed_control_points(right_origin, length)?;

        let left_origin = frame.translation - half;
        let mut left = BezierLine::new(Frame {
            translation: left_origin,
            ..frame
        });
        left.seed_control_points(left_origin, length)?;

        Ok(Self { right, left })
    }

    /// Clear both retained sample sets, then re-sample each rail with the
    /// identical mode.
    ///
    /// The rails are sampled independently: under [`SamplingMode::ByDistance`]
    /// two rails of unequal arc length end up with different sample
    /// counts. Callers pairing samples across the rails must handle that.
    pub fn sample_bezier_lines(&mut self, mode: SamplingMode, subdivisions: usize) -> Result<()> {
        self.right.clear_sample_points();
        self.left.clear_sample_points();

        self.right.sample_curve(mode, subdivisions)?;
        self.left.sample_curve(mode, subdivisions)?;
        Ok(())
    }

    pub fn right(&self) -> &BezierLine {
        &self.right
    }

    pub fn left(&self) -> &BezierLine {
        &self.left
    }

    pub fn right_mut(&mut self) -> &mut BezierLine {
        &mut self.right
    }

    pub fn left_mut(&mut self) -> &mut BezierLine {
        &mut self.left
    }

    pub fn set_right(&mut self, right: BezierLine) {
        self.right = right;
    }

    pub fn set_left(&mut self, left: BezierLine) {
        self.left = left;
    }

    /// World-space sample points of both rails, right first.
    pub fn sample_points(&self) -> (&[Point3], &[Point3]) {
        (self.right.sample_points(), self.left.sample_points())
    }
}
