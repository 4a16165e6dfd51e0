//! bezier-lane geometry: cubic Bezier curves and paired-lane sampling.

pub mod arclen;
pub mod bezier;
pub mod lane;
pub mod line;
pub mod sample;

pub use arclen::{estimate_length, point_at_distance};
pub use bezier::{Curve, CubicBezier};
pub use lane::Lane;
pub use line::BezierLine;
pub use sample::{SampleSet, SamplingMode, DEFAULT_SUBDIVISIONS};
