//! Host seam: the entities whose poses the engine drives

use crate::spatial::{EulerRot, Point3D, Pose};

/// A displayable entity owned by the host render layer.
///
/// The engine reads poses when a transition starts and writes them every
/// tick while one is in flight. Everything else about the entity — markup,
/// textures, picking — belongs to the host. Identity is the tile's index in
/// the collection, stable for the session.
pub trait Tile {
    fn position(&self) -> Point3D;
    fn orientation(&self) -> EulerRot;
    fn set_position(&mut self, position: Point3D);
    fn set_orientation(&mut self, orientation: EulerRot);

    /// Both channels as one pose value
    fn pose(&self) -> Pose {
        Pose::new(self.position(), self.orientation())
    }

    /// Write both channels from one pose value
    fn set_pose(&mut self, pose: Pose) {
        self.set_position(pose.position);
        self.set_orientation(pose.orientation);
    }
}

/// Minimal in-memory tile for tests and headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StubTile {
    pub position: Point3D,
    pub orientation: EulerRot,
}

impl StubTile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pose(pose: Pose) -> Self {
        Self {
            position: pose.position,
            orientation: pose.orientation,
        }
    }
}

impl Tile for StubTile {
    fn position(&self) -> Point3D {
        self.position
    }

    fn orientation(&self) -> EulerRot {
        self.orientation
    }

    fn set_position(&mut self, position: Point3D) {
        self.position = position;
    }

    fn set_orientation(&mut self, orientation: EulerRot) {
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_round_trip() {
        let mut tile = StubTile::new();
        let pose = Pose::new(Point3D::new(1.0, 2.0, 3.0), EulerRot::new(0.1, 0.2, 0.3));
        tile.set_pose(pose);
        assert_eq!(tile.pose(), pose);
    }
}
