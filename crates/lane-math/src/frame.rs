use glam::{DAffine3, DQuat, DVec3};
use lane_core::{LaneError, Result};
use serde::{Deserialize, Serialize};

use crate::{Point3, Vector3};

/// Coordinate frame of a scene entity: translation, rotation, and scale.
///
/// Converts points between the entity's local space and world space. The
/// frame itself belongs to the host scene graph; curve code receives a copy
/// and is told about changes through `BezierLine::set_frame`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub translation: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Frame {
    pub fn identity() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }

    pub fn from_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    pub fn new(translation: DVec3, rotation: DQuat, scale: DVec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Map a point from the frame's local space into world space.
    pub fn local_to_world(&self, p: Point3) -> Point3 {
        self.to_affine().transform_point3(p)
    }

    /// Map a world-space point into the frame's local space.
    ///
    /// Fails when the frame is not invertible (a zero scale component).
    pub fn world_to_local(&self, p: Point3) -> Result<Point3> {
        let affine = self.to_affine();
        if affine.matrix3.determinant().abs() < 1e-15 {
            return Err(LaneError::Geometry(format!(
                "frame with scale {:?} is not invertible",
                self.scale
            )));
        }
        Ok(affine.inverse().transform_point3(p))
    }

    /// The frame's forward axis (+Z) in world space, unit length.
    pub fn forward(&self) -> Vector3 {
        self.rotation * DVec3::Z
    }

    /// The frame's right axis (+X) in world space, unit length.
    pub fn right(&self) -> Vector3 {
        self.rotation * DVec3::X
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}
