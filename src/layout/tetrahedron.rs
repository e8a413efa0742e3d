//! Tetrahedral arrangement: tiles packed across the four faces of a
//! regular tetrahedron

use std::f32::consts::{FRAC_PI_2, PI};

use crate::config::TileMetrics;
use crate::spatial::{EulerRot, Point3D, Pose, Vector3D};

/// Rows per side face, top to bottom. 51 slots.
const SIDE_ROW_COUNTS: [usize; 10] = [1, 2, 3, 4, 5, 6, 6, 7, 8, 9];
/// Rows on the base face, right-aligned against the 10-row scale. 47 slots.
const BASE_ROW_COUNTS: [usize; 8] = [2, 3, 4, 6, 7, 8, 8, 9];
/// Conceptual row scale shared by every face
const TOTAL_ROWS: usize = 10;

/// Total assignable slots: three side faces plus the base.
pub const TETRAHEDRON_CAPACITY: usize = 51 * 3 + 47;

/// Target poses for `count` tiles packed over the tetrahedron's faces.
///
/// The solid is sized from `metrics` so that the ten-row template exactly
/// spans each face's slant height. Faces fill in the fixed order side 1,
/// side 2, side 3, base; rows fill left to right per their template.
///
/// Capacity is [`TETRAHEDRON_CAPACITY`] (200) slots. Counts above capacity
/// are truncated — the surplus tiles receive no pose, which callers handle
/// by leaving those tiles where they are. Counts below capacity simply
/// under-fill the templates. Neither case is an error.
pub fn poses(count: usize, metrics: &TileMetrics) -> Vec<Pose> {
    let tile_w = metrics.tile_width();
    let face_altitude = TOTAL_ROWS as f32 * metrics.tile_height();
    let radius = (face_altitude / 1.5) * 1.05;
    let height = radius * 1.4;

    let tip = Point3D::new(0.0, height * 0.6, 0.0);
    let y_base = -height * 0.4;

    let angle_step = 2.0 * PI / 3.0;
    let corner = |k: usize| {
        let angle = k as f32 * angle_step;
        Point3D::new(radius * angle.cos(), y_base, radius * angle.sin())
    };
    let (v1, v2, v3) = (corner(0), corner(1), corner(2));

    // Base winding runs opposite the sides so its normal points down/out
    let faces = [
        [tip, v1, v2],
        [tip, v2, v3],
        [tip, v3, v1],
        [v3, v2, v1],
    ];

    let mut poses = Vec::with_capacity(count.min(TETRAHEDRON_CAPACITY));

    'faces: for (f, [a, b, c]) in faces.into_iter().enumerate() {
        let is_base = f == 3;
        let template: &[usize] = if is_base {
            &BASE_ROW_COUNTS
        } else {
            &SIDE_ROW_COUNTS
        };
        let normal = Vector3D::plane_normal(b - a, c - a);

        for (r, &items_in_row) in template.iter().enumerate() {
            // Base rows occupy the tail of the shared row scale
            let effective_row = if is_base {
                r + (TOTAL_ROWS - template.len())
            } else {
                r
            };
            let row_progress = (effective_row as f32 + 1.0) / (TOTAL_ROWS as f32 + 0.5);

            let left = a.lerp(&b, row_progress);
            let right = a.lerp(&c, row_progress);
            let dir = (right - left).normalize();
            let center = left.lerp(&right, 0.5);

            let content_width = items_in_row as f32 * tile_w;
            let start = center + dir * (tile_w / 2.0 - content_width / 2.0);

            for slot in 0..items_in_row {
                if poses.len() >= count {
                    break 'faces;
                }

                let position = start + dir * (slot as f32 * tile_w);
                let orientation = if is_base {
                    // Lie flat, align with the row direction, flip upward
                    EulerRot::new(-FRAC_PI_2, PI, dir.z.atan2(dir.x))
                } else {
                    EulerRot::look_at(position, position + normal * 100.0)
                };

                poses.push(Pose::new(position, orientation));
            }
        }
    }

    if poses.len() < count {
        tracing::warn!(
            requested = count,
            assigned = poses.len(),
            "tetrahedron arrangement is full; surplus tiles keep their poses"
        );
    }

    poses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_poses(count: usize) -> Vec<Pose> {
        poses(count, &TileMetrics::default())
    }

    #[test]
    fn test_capacity() {
        assert_eq!(TETRAHEDRON_CAPACITY, 200);
        assert_eq!(SIDE_ROW_COUNTS.iter().sum::<usize>(), 51);
        assert_eq!(BASE_ROW_COUNTS.iter().sum::<usize>(), 47);
    }

    #[test]
    fn test_full_solid_assigns_every_tile() {
        assert_eq!(default_poses(200).len(), 200);
    }

    #[test]
    fn test_overflow_truncates_without_panicking() {
        // The 201st tile receives no pose; this is a warning, not an error
        assert_eq!(default_poses(201).len(), 200);
        assert_eq!(default_poses(500).len(), 200);
    }

    #[test]
    fn test_underfill_stops_early() {
        assert_eq!(default_poses(10).len(), 10);
        assert_eq!(default_poses(1).len(), 1);
    }

    #[test]
    fn test_apex_tile_sits_near_the_tip() {
        // The first side row holds a single tile just below the apex
        let metrics = TileMetrics::default();
        let face_altitude = TOTAL_ROWS as f32 * metrics.tile_height();
        let radius = (face_altitude / 1.5) * 1.05;
        let tip_y = radius * 1.4 * 0.6;

        let first = default_poses(1)[0];
        assert!(first.position.y < tip_y);
        assert!(first.position.y > 0.0);
    }

    #[test]
    fn test_side_tiles_face_along_the_face_normal() {
        let all = default_poses(200);
        // Tiles 0..51 belong to the first side face (tip, v1, v2)
        let metrics = TileMetrics::default();
        let face_altitude = TOTAL_ROWS as f32 * metrics.tile_height();
        let radius = (face_altitude / 1.5) * 1.05;
        let height = radius * 1.4;
        let tip = Point3D::new(0.0, height * 0.6, 0.0);
        let angle_step = 2.0 * PI / 3.0;
        let v1 = Point3D::new(radius, -height * 0.4, 0.0);
        let v2 = Point3D::new(
            radius * angle_step.cos(),
            -height * 0.4,
            radius * angle_step.sin(),
        );
        let normal = Vector3D::plane_normal(v1 - tip, v2 - tip);

        for pose in &all[..51] {
            let forward = pose.orientation.forward();
            assert!(forward.dot(&normal) > 0.999);
        }
    }

    #[test]
    fn test_base_tiles_lie_flat() {
        let all = default_poses(200);
        // The final 47 tiles sit on the base face at the base height
        let metrics = TileMetrics::default();
        let face_altitude = TOTAL_ROWS as f32 * metrics.tile_height();
        let radius = (face_altitude / 1.5) * 1.05;
        let y_base = -radius * 1.4 * 0.4;

        for pose in &all[153..] {
            assert!((pose.position.y - y_base).abs() < 0.01);
            assert!((pose.orientation.x + FRAC_PI_2).abs() < 0.0001);
            assert!((pose.orientation.y - PI).abs() < 0.0001);
        }
    }

    #[test]
    fn test_rows_are_spaced_by_tile_width() {
        let metrics = TileMetrics::default();
        let all = poses(200, &metrics);
        // Row 2 of the first side face: tiles 1 and 2
        let spacing = all[1].position.distance(&all[2].position);
        assert!((spacing - metrics.tile_width()).abs() < 0.01);
    }
}
