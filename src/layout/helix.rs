//! Double-helix arrangement: two interleaved spiral strands

use std::f32::consts::PI;

use crate::spatial::{EulerRot, Point3D, Pose};

const RADIUS: f32 = 900.0;
const VERTICAL_SPACING: f32 = 15.0;
const ROTATION_PER_STEP: f32 = 0.175;
const TOP: f32 = 450.0;

/// Target poses for `count` tiles along a double helix.
///
/// Even indices ride one strand, odd indices the other, offset by π.
/// Consecutive pairs share a step: same height, opposite sides of the
/// axis. Each tile faces directly outward from the helix's central axis.
pub fn poses(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let strand = (i % 2) as f32;
            let step = (i / 2) as f32;
            let angle = step * ROTATION_PER_STEP + strand * PI;

            let position = Point3D::new(
                angle.sin() * RADIUS,
                -step * VERTICAL_SPACING + TOP,
                angle.cos() * RADIUS,
            );
            let outward = Point3D::new(position.x * 2.0, position.y, position.z * 2.0);
            Pose::new(position, EulerRot::look_at(position, outward))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_coordinates() {
        let poses = poses(4);
        assert_eq!(poses.len(), 4);

        // Step 0, strand 0: angle 0
        assert!(poses[0].position.x.abs() < 0.001);
        assert!((poses[0].position.z - 900.0).abs() < 0.001);
        assert_eq!(poses[0].position.y, 450.0);

        // Step 0, strand 1: angle pi, directly opposite
        assert!(poses[1].position.x.abs() < 0.1);
        assert!((poses[1].position.z + 900.0).abs() < 0.001);
        assert_eq!(poses[1].position.y, 450.0);

        // Step 1 drops by the vertical spacing
        assert_eq!(poses[2].position.y, 435.0);
    }

    #[test]
    fn test_constant_distance_from_axis() {
        for pose in poses(60) {
            let r = (pose.position.x * pose.position.x + pose.position.z * pose.position.z).sqrt();
            assert!((r - RADIUS).abs() < 0.01);
        }
    }

    #[test]
    fn test_faces_away_from_axis() {
        for pose in poses(30) {
            let radial =
                crate::spatial::Vector3D::new(pose.position.x, 0.0, pose.position.z).normalize();
            let forward = pose.orientation.forward();
            assert!(forward.dot(&radial) > 0.999);
        }
    }
}
