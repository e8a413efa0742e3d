//! Flat table arrangement: a 20-column wall facing the camera

use crate::spatial::{Point3D, Pose};

const COLUMNS: usize = 20;
const CELL_WIDTH: f32 = 160.0;
const CELL_HEIGHT: f32 = 200.0;
/// Centers the 20 columns around the origin on X
const X_OFFSET: f32 = -1520.0;
const Y_OFFSET: f32 = 900.0;

/// Target poses for `count` tiles in the flat table arrangement.
///
/// Row-major fill, 20 tiles per row, Y descending per row from the top
/// offset. Orientation is identity (camera-neutral).
pub fn poses(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let col = (i % COLUMNS) as f32;
            let row = (i / COLUMNS) as f32;
            Pose::at(Point3D::new(
                col * CELL_WIDTH + X_OFFSET,
                -(row * CELL_HEIGHT) + Y_OFFSET,
                0.0,
            ))
        })
        .collect()
}
