//! Per-column index of the topmost solid voxel, maintained incrementally.
//!
//! The sunlight channel keys its shadow-cliff rule off this map, so the map
//! must be consistent with the voxel buffer before light propagation runs on
//! an edit.

use crate::volume::Volume;

/// One entry per (x, z) column: the y of the topmost solid cell, or 0 when
/// the column holds no solid cell above y = 0.
///
/// Invariant: for every column, either the entry is 0 or the cell at the
/// recorded y is solid and every cell strictly above it in the column is air.
#[derive(Clone, Debug)]
pub struct HeightMap {
    data: Vec<i32>,
    width: i32,
}

impl HeightMap {
    /// Creates a height map of all zeros for the given volume.
    pub fn new(volume: &Volume) -> Self {
        Self {
            data: vec![0; volume.column_count()],
            width: volume.width,
        }
    }

    /// Returns the topmost-solid y for column `(x, z)`.
    pub fn top(&self, x: i32, z: i32) -> i32 {
        self.data[(z * self.width + x) as usize]
    }

    /// Sets the topmost-solid y for column `(x, z)`.
    pub fn set_top(&mut self, x: i32, z: i32, y: i32) {
        self.data[(z * self.width + x) as usize] = y;
    }

    /// Raw column entries, `z·width + x` order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Recomputes every column from the voxel buffer.
    pub fn recompute(&mut self, volume: &Volume, voxels: &[u8]) {
        for z in 0..volume.depth {
            for x in 0..volume.width {
                let mut top = 0;
                for y in (0..volume.height).rev() {
                    if voxels[volume.index(x, y, z).expect("column scan in bounds")] != 0 {
                        top = y;
                        break;
                    }
                }
                self.set_top(x, z, top);
            }
        }
    }

    /// Re-establishes the column invariant after the cell `(x, y, z)` has
    /// been written with `new_value`.
    ///
    /// A solid write above the recorded top raises the column; clearing the
    /// recorded top rescans downward for the next solid cell.
    pub fn update_on_edit(
        &mut self,
        volume: &Volume,
        voxels: &[u8],
        x: i32,
        y: i32,
        z: i32,
        new_value: u8,
    ) {
        let current = self.top(x, z);
        if new_value == 0 {
            if y == current {
                for h in (0..y).rev() {
                    if h == 0 || voxels[volume.index(x, h, z).expect("rescan in bounds")] != 0 {
                        self.set_top(x, z, h);
                        break;
                    }
                }
            }
        } else if current < y {
            self.set_top(x, z, y);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
