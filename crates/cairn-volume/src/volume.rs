//! Immutable volume descriptor and bounds-checked grid addressing.
//!
//! A [`Volume`] describes a fixed dense axis-aligned box of voxels. Every
//! other crate in the workspace funnels its coordinate arithmetic through
//! [`Volume::index`], which is the single bounds-check primitive.

use serde::{Deserialize, Serialize};

/// Descriptor for a fixed dense voxel grid.
///
/// The voxel buffer itself is caller-owned: a linear `[u8]` of
/// `cell_count()` bytes where 0 is air and any non-zero value is a solid,
/// opaque block id. The descriptor is plain data and cheap to copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Cell count along x.
    pub width: i32,
    /// Cell count along y.
    pub height: i32,
    /// Cell count along z.
    pub depth: i32,
    /// Edge length of a mesh chunk, typically 16.
    pub chunk_size: i32,
    /// Peak light level, typically 15 or 32.
    pub max_light: u8,
}

impl Volume {
    /// Creates a new volume descriptor.
    pub fn new(width: i32, height: i32, depth: i32, chunk_size: i32, max_light: u8) -> Self {
        debug_assert!(width > 0 && height > 0 && depth > 0);
        debug_assert!(chunk_size > 0);
        debug_assert!(max_light > 0);
        Self {
            width,
            height,
            depth,
            chunk_size,
            max_light,
        }
    }

    /// Total number of cells in the volume.
    pub fn cell_count(&self) -> usize {
        (self.width * self.height * self.depth) as usize
    }

    /// Number of (x, z) columns, one height-map entry each.
    pub fn column_count(&self) -> usize {
        (self.width * self.depth) as usize
    }

    /// Returns the linear index for `(x, y, z)`, or `None` when any
    /// coordinate falls outside the volume.
    ///
    /// Layout: `z·width·height + y·width + x` (x varies fastest).
    pub fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if x < 0
            || x >= self.width
            || y < 0
            || y >= self.height
            || z < 0
            || z >= self.depth
        {
            return None;
        }
        Some((z * self.width * self.height + y * self.width + x) as usize)
    }

    /// Decomposes a linear index back into `(x, y, z)`.
    pub fn decompose(&self, i: usize) -> (i32, i32, i32) {
        debug_assert!(i < self.cell_count());
        let i = i as i32;
        let slice = self.width * self.height;
        let z = i / slice;
        let y = (i % slice) / self.width;
        let x = (i % slice) % self.width;
        (x, y, z)
    }

    /// Returns the height-map column index for `(x, z)`.
    ///
    /// The coordinates must be inside the volume footprint.
    pub fn column(&self, x: i32, z: i32) -> usize {
        debug_assert!(x >= 0 && x < self.width && z >= 0 && z < self.depth);
        (z * self.width + x) as usize
    }

    /// Returns `true` if the cell at `(x, y, z)` is solid.
    ///
    /// Out-of-bounds cells are not solid.
    pub fn is_solid(&self, voxels: &[u8], x: i32, y: i32, z: i32) -> bool {
        match self.index(x, y, z) {
            Some(i) => voxels[i] != 0,
            None => false,
        }
    }
}

/// Returns the y at which an agent of `agent_height` cells comes to rest
/// after dropping from `(x, y, z)`.
///
/// Returns −1 when the start cell is solid or out of bounds, or when the
/// first solid cell hit has fewer than `agent_height` air cells above it.
/// Returns 0 when the drop reaches the volume floor. Cells above the top of
/// the volume count as air for the clearance scan.
pub fn ground(
    volume: &Volume,
    voxels: &[u8],
    agent_height: i32,
    x: i32,
    y: i32,
    z: i32,
) -> i32 {
    match volume.index(x, y, z) {
        None => return -1,
        Some(i) => {
            if voxels[i] != 0 {
                return -1;
            }
        }
    }
    for floor in (0..y).rev() {
        if !volume.is_solid(voxels, x, floor, z) {
            continue;
        }
        for h in 1..=agent_height {
            if volume.is_solid(voxels, x, floor + h, z) {
                return -1;
            }
        }
        return floor + 1;
    }
    0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
