//! Spherical arrangement: tiles evenly distributed on a sphere

use std::f32::consts::PI;

use crate::spatial::{EulerRot, Point3D, Pose};

const RADIUS: f32 = 1000.0;

/// Target poses for `count` tiles spread over a sphere of radius 1000.
///
/// Uses the uniform-area polar parametrization `phi = acos(-1 + 2i/N)` with
/// a golden-angle-style azimuthal spread `theta = sqrt(N·π)·phi`. Each tile
/// faces directly outward from the sphere's center.
pub fn poses(count: usize) -> Vec<Pose> {
    let n = count as f32;
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / n).acos();
            let theta = (n * PI).sqrt() * phi;

            let position = Point3D::from_spherical(RADIUS, phi, theta);
            let outward = position * 2.0;
            Pose::new(position, EulerRot::look_at(position, outward))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_points_on_sphere() {
        for pose in poses(80) {
            let r = pose.position.distance(&Point3D::ORIGIN);
            assert!((r - RADIUS).abs() < 0.01, "radius was {r}");
        }
    }

    #[test]
    fn test_faces_outward() {
        for pose in poses(40) {
            let radial = pose.position.to_vector().normalize();
            let forward = pose.orientation.forward();
            // Forward axis aligns with the radial direction
            assert!(forward.dot(&radial) > 0.999);
        }
    }

    #[test]
    fn test_single_tile_sits_at_pole() {
        // i = 0 gives phi = acos(-1) = pi, the bottom pole
        let poses = poses(1);
        assert_eq!(poses.len(), 1);
        assert!((poses[0].position.y + RADIUS).abs() < 0.1);
    }
}
