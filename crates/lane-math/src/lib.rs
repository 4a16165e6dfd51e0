pub mod frame;

pub use glam::{dvec3, DAffine3, DMat4, DQuat, DVec2, DVec3, DVec4};
pub use frame::Frame;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
