//! Position + orientation value assigned to one tile

use super::{EulerRot, Point3D};

/// A target pose produced by a layout: position plus orientation.
///
/// Poses carry no back-reference to a tile; the association is purely
/// positional (pose `i` belongs to tile `i`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Point3D,
    pub orientation: EulerRot,
}

impl Pose {
    /// Identity pose (origin, no rotation)
    pub const IDENTITY: Self = Self {
        position: Point3D::ORIGIN,
        orientation: EulerRot::IDENTITY,
    };

    /// Create a new pose
    pub fn new(position: Point3D, orientation: EulerRot) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a pose at `position` with identity orientation
    pub fn at(position: Point3D) -> Self {
        Self {
            position,
            orientation: EulerRot::IDENTITY,
        }
    }

    /// Linearly interpolate both channels between two poses
    pub fn lerp(&self, other: &Pose, t: f32) -> Self {
        Self {
            position: self.position.lerp(&other.position, t),
            orientation: self.orientation.lerp(&other.orientation, t),
        }
    }
}
