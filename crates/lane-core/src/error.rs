use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaneError {
    #[error("Control point index {index} out of range (curve has {len} points)")]
    ControlPointIndex { index: usize, len: usize },

    #[error("Invalid sampling value: {0}")]
    SamplingValue(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, LaneError>;
