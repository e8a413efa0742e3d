//! Spatial primitives for 3D tile positioning
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: Forward (+) / Backward (-)
//!
//! Orientations are Euler triples applied yaw (Y), then pitch (X), then
//! roll (Z); a tile's local forward axis is +Z. [`EulerRot::look_at`] points
//! that axis at a target.

mod point3d;
mod vector3d;
mod euler;
mod pose;

pub use point3d::Point3D;
pub use vector3d::Vector3D;
pub use euler::EulerRot;
pub use pose::Pose;
