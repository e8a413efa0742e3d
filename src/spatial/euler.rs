//! Euler-angle orientation triple

use super::{Point3D, Vector3D};

/// An orientation as Euler angles, in radians.
///
/// The rotation composes yaw (`y`, about Y), then pitch (`x`, about X),
/// then roll (`z`, about Z). A tile's local forward axis is +Z, so
/// [`EulerRot::look_at`] produces the orientation whose forward axis points
/// at the target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerRot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerRot {
    /// Identity orientation (no rotation)
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new orientation from pitch, yaw, and roll components
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Orientation whose forward axis points from `from` toward `toward`.
    ///
    /// Derived as `yaw = atan2(dx, dz)`, `pitch = asin(-dy)`, zero roll.
    /// Coincident points degenerate to [`EulerRot::IDENTITY`], never NaN.
    pub fn look_at(from: Point3D, toward: Point3D) -> Self {
        let direction = (toward - from).normalize();
        if direction.magnitude_squared() < 0.0001 {
            return Self::IDENTITY;
        }

        let yaw = direction.x.atan2(direction.z);
        let pitch = (-direction.y).clamp(-1.0, 1.0).asin();

        Self {
            x: pitch,
            y: yaw,
            z: 0.0,
        }
    }

    /// Componentwise linear interpolation between two orientations.
    ///
    /// Interpolation happens per Euler channel, the same way the tile host
    /// animates its rotation properties. No shortest-arc handling.
    pub fn lerp(&self, other: &EulerRot, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// The world-space forward direction of this orientation.
    ///
    /// Roll spins the tile about its own forward axis, so only yaw and
    /// pitch contribute.
    pub fn forward(&self) -> Vector3D {
        let (sp, cp) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        Vector3D::new(cp * sy, -sp, cp * cy)
    }
}
