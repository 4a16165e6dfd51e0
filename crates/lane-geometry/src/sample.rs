//! Point-sampling strategies over a cubic Bezier segment.
//!
//! All strategies are stateless and produce a fresh, ordered [`SampleSet`]
//! in the control points' own space; callers map the result through a
//! [`lane_math::Frame`] for world-space output.

use lane_core::{LaneError, Result};
use lane_math::Point3;
use serde::{Deserialize, Serialize};

use crate::arclen::{estimate_length, point_at_distance};
use crate::bezier::point_on_cubic;

/// An ordered point sequence produced by one sampling call; replaced
/// wholesale on each re-sample, never updated incrementally.
pub type SampleSet = Vec<Point3>;

/// Default subdivision count for arc-length work; the interactive sweet
/// spot within the supported 2..=50 range.
pub const DEFAULT_SUBDIVISIONS: usize = 20;

/// Fewer samples than this cannot describe a curve: start, interior, end.
pub const MIN_SAMPLE_COUNT: usize = 3;

/// How to walk the curve when stamping points along it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SamplingMode {
    /// Stamp at fixed parameter increments; the step fraction is clamped
    /// into `(0, 1]`.
    ByParameterStep(f64),
    /// Stamp at fixed arc-length spacing (model units).
    ByDistance(f64),
    /// Stamp a fixed number of parameter-uniform points (minimum 3).
    ByCount(usize),
}

/// Dispatch to the strategy selected by `mode`.
///
/// `subdivisions` only affects [`SamplingMode::ByDistance`], which needs
/// the arc-length walk; the other strategies ignore it.
pub fn sample(points: &[Point3; 4], mode: SamplingMode, subdivisions: usize) -> Result<SampleSet> {
    match mode {
        SamplingMode::ByParameterStep(step) => sample_by_parameter_step(points, step),
        SamplingMode::ByDistance(spacing) => sample_by_distance(points, spacing, subdivisions),
        SamplingMode::ByCount(count) => Ok(sample_by_count(points, count)),
    }
}

/// Stamp points at `t = 0, step, 2*step, ..` up to `t = 1`.
///
/// If the step does not evenly divide the unit range, one extra sample is
/// emitted at `t = 1` so the endpoint is always present. Non-positive
/// steps are rejected (they would generate unbounded samples); steps above
/// 1 are clamped to 1.
pub fn sample_by_parameter_step(points: &[Point3; 4], step: f64) -> Result<SampleSet> {
    if step <= 0.0 {
        return Err(LaneError::SamplingValue(format!(
            "parameter step must be positive, got {}",
            step
        )));
    }
    let step = step.min(1.0);

    let n = (1.0 / step).floor() as usize;
    let mut samples = Vec::with_capacity(n + 2);
    for i in 0..=n {
        samples.push(point_on_cubic(points, i as f64 * step));
    }
    if (n as f64) * step < 1.0 {
        samples.push(point_on_cubic(points, 1.0));
    }
    Ok(samples)
}

/// Stamp points every `spacing` units of estimated arc length.
///
/// One extra sample at `t = 1` is appended unconditionally so the endpoint
/// is always present. When the total length is an exact multiple of
/// `spacing` this yields two coincident trailing points; that duplicate is
/// part of the contract, callers that care must dedupe themselves.
pub fn sample_by_distance(
    points: &[Point3; 4],
    spacing: f64,
    subdivisions: usize,
) -> Result<SampleSet> {
    if spacing <= 0.0 {
        return Err(LaneError::SamplingValue(format!(
            "distance spacing must be positive, got {}",
            spacing
        )));
    }

    let total = estimate_length(points, subdivisions);
    let n = (total / spacing).floor() as usize;

    let mut samples = Vec::with_capacity(n + 2);
    for i in 0..=n {
        samples.push(point_at_distance(points, i as f64 * spacing, subdivisions));
    }
    samples.push(point_on_cubic(points, 1.0));
    Ok(samples)
}

/// Stamp `count` points uniformly in parameter space, both endpoints
/// included. `count` is clamped up to [`MIN_SAMPLE_COUNT`].
pub fn sample_by_count(points: &[Point3; 4], count: usize) -> SampleSet {
    let count = count.max(MIN_SAMPLE_COUNT);

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 / (count - 1) as f64;
        samples.push(point_on_cubic(points, t));
    }
    samples
}
