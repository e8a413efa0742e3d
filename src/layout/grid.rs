//! Volumetric grid arrangement: 5×4×10 lattice receding in depth

use crate::spatial::{Point3D, Pose};

const COLS: usize = 5;
const ROWS: usize = 4;
const X_SPACING: f32 = 450.0;
const Y_SPACING: f32 = 450.0;
const Z_SPACING: f32 = 1000.0;
const X_OFFSET: f32 = -900.0;
const Y_OFFSET: f32 = 675.0;
const Z_OFFSET: f32 = -4500.0;

/// Target poses for `count` tiles in the volumetric grid.
///
/// Row-major fill through a 5-column, 4-row, 10-layer lattice. Counts past
/// the nominal 200-slot volume keep receding in z unbounded; that overflow
/// is accepted behavior, not an error.
pub fn poses(count: usize) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let x = (i % COLS) as f32;
            let y = ((i / COLS) % ROWS) as f32;
            let z = (i / (COLS * ROWS)) as f32;

            Pose::at(Point3D::new(
                x * X_SPACING + X_OFFSET,
                -(y * Y_SPACING) + Y_OFFSET,
                z * Z_SPACING + Z_OFFSET,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_coordinates() {
        let poses = poses(200);

        assert_eq!(poses[0].position, Point3D::new(-900.0, 675.0, -4500.0));
        // Last slot of the nominal volume: col 4, row 3, layer 9
        assert_eq!(poses[199].position, Point3D::new(900.0, -675.0, 4500.0));
        // Layer stride
        assert_eq!(poses[20].position.z, -3500.0);
    }

    #[test]
    fn test_overflow_recedes_in_z() {
        let poses = poses(220);
        assert_eq!(poses.len(), 220);
        // Slot 200 wraps back to col 0, row 0 on layer 10
        assert_eq!(poses[200].position, Point3D::new(-900.0, 675.0, 5500.0));
    }
}
