//! Breadth-first flood and removal over one light channel.
//!
//! Both directions run as explicit wave loops over a pair of reusable
//! queues instead of the naive recursive formulation, so large volumes
//! cannot grow the stack. Neighbor visitation order is fixed (−y, +y, −x,
//! +x, −z, +z) and observable: the first writer wins when levels tie.

use cairn_volume::{HeightMap, Region, Volume};

use crate::field::{LightField, SUNLIGHT};

/// The six axis neighbor offsets in propagation order.
pub(crate) const NEIGHBORS: [(i32, i32, i32); 6] = [
    (0, -1, 0),
    (0, 1, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Index of the −y entry in [`NEIGHBORS`]: the only direction sunlight
/// travels for free.
pub(crate) const DOWN: usize = 0;

/// Reusable BFS queues for the light engine.
///
/// Create one per world (or per worker) and pass it into every
/// [`flood_light`]/[`remove_light`]/[`crate::propagate`]/[`crate::update`]
/// call; the queues grow on demand and keep their capacity across calls.
#[derive(Debug, Default)]
pub struct LightScratch {
    pub(crate) raise: Vec<usize>,
    pub(crate) raise_next: Vec<usize>,
    pub(crate) clear: Vec<(usize, u8)>,
    pub(crate) clear_next: Vec<(usize, u8)>,
    pub(crate) reseed: Vec<usize>,
}

impl LightScratch {
    /// Empty scratch; queues allocate lazily.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scratch with queue capacity reserved for a worst-case wave over the
    /// given volume.
    pub fn for_volume(volume: &Volume) -> Self {
        let cells = volume.cell_count();
        Self {
            raise: Vec::with_capacity(cells),
            raise_next: Vec::with_capacity(cells),
            clear: Vec::with_capacity(cells),
            clear_next: Vec::with_capacity(cells),
            reseed: Vec::with_capacity(cells),
        }
    }
}

/// Raises light outward from cells whose level on `channel` was just set.
///
/// `seeds` are linear cell indices; their levels must already be written
/// into `light`. Every cell whose level changes grows `bounds` when one is
/// supplied.
#[allow(clippy::too_many_arguments)]
pub fn flood_light(
    bounds: Option<&mut Region>,
    channel: usize,
    volume: &Volume,
    voxels: &[u8],
    height: &HeightMap,
    light: &mut LightField,
    seeds: &[usize],
    scratch: &mut LightScratch,
) {
    scratch.raise.clear();
    scratch.raise.extend_from_slice(seeds);
    flood_waves(
        bounds,
        channel,
        volume,
        voxels,
        height,
        light,
        &mut scratch.raise,
        &mut scratch.raise_next,
    );
}

/// Tears down light that depended on a removed or dimmed source, then
/// re-floods from every surviving independent source on the frontier.
///
/// `seeds` are `(cell, prior_level)` pairs whose light must already be
/// zeroed. A neighbor dimmer than the level being removed was lit by the
/// removed source and is torn down in turn; a neighbor at an equal or
/// brighter level survives and becomes a re-flood seed. A full-strength
/// sunlight shaft is the exception: removal follows it straight down even
/// though the levels tie, mirroring the zero-cost downward flood.
#[allow(clippy::too_many_arguments)]
pub fn remove_light(
    mut bounds: Option<&mut Region>,
    channel: usize,
    volume: &Volume,
    voxels: &[u8],
    height: &HeightMap,
    light: &mut LightField,
    seeds: &[(usize, u8)],
    scratch: &mut LightScratch,
) {
    scratch.clear.clear();
    scratch.clear.extend_from_slice(seeds);
    scratch.reseed.clear();

    let queue = &mut scratch.clear;
    let next = &mut scratch.clear_next;
    while !queue.is_empty() {
        next.clear();
        for &(i, level) in queue.iter() {
            let (x, y, z) = volume.decompose(i);
            for (n, &(dx, dy, dz)) in NEIGHBORS.iter().enumerate() {
                let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                let Some(neighbor) = volume.index(nx, ny, nz) else {
                    continue;
                };
                if voxels[neighbor] != 0 {
                    continue;
                }
                let nl = light.get(channel, neighbor);
                if nl == 0 {
                    continue;
                }
                if nl < level
                    || (channel == SUNLIGHT
                        && n == DOWN
                        && level == volume.max_light
                        && nl == volume.max_light)
                {
                    next.push((neighbor, nl));
                    light.set(channel, neighbor, 0);
                    if let Some(b) = bounds.as_deref_mut() {
                        b.grow(nx, ny, nz);
                    }
                } else {
                    scratch.reseed.push(neighbor);
                }
            }
        }
        std::mem::swap(queue, next);
    }

    if !scratch.reseed.is_empty() {
        std::mem::swap(&mut scratch.raise, &mut scratch.reseed);
        scratch.reseed.clear();
        flood_waves(
            bounds,
            channel,
            volume,
            voxels,
            height,
            light,
            &mut scratch.raise,
            &mut scratch.raise_next,
        );
    }
}

/// Floods from the seeds already staged in `scratch.raise`, consuming them.
///
/// Used by the coordinator paths that build their seed set directly in the
/// scratch queue instead of borrowing a separate slice.
pub(crate) fn flood_pending(
    bounds: Option<&mut Region>,
    channel: usize,
    volume: &Volume,
    voxels: &[u8],
    height: &HeightMap,
    light: &mut LightField,
    scratch: &mut LightScratch,
) {
    flood_waves(
        bounds,
        channel,
        volume,
        voxels,
        height,
        light,
        &mut scratch.raise,
        &mut scratch.raise_next,
    );
}

/// Wave loop shared by flooding and the re-flood phase of removal.
#[allow(clippy::too_many_arguments)]
fn flood_waves(
    mut bounds: Option<&mut Region>,
    channel: usize,
    volume: &Volume,
    voxels: &[u8],
    height: &HeightMap,
    light: &mut LightField,
    queue: &mut Vec<usize>,
    next: &mut Vec<usize>,
) {
    while !queue.is_empty() {
        next.clear();
        for &i in queue.iter() {
            let level = light.get(channel, i);
            if level == 0 {
                continue;
            }
            let (x, y, z) = volume.decompose(i);
            for (n, &(dx, dy, dz)) in NEIGHBORS.iter().enumerate() {
                let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                let Some(neighbor) = volume.index(nx, ny, nz) else {
                    continue;
                };
                let cost = if channel == SUNLIGHT && n == DOWN && level == volume.max_light {
                    0
                } else {
                    1
                };
                let nl = level - cost;
                if voxels[neighbor] != 0 || light.get(channel, neighbor) >= nl {
                    continue;
                }
                // Full-strength sunlight never enters a cell that sits above
                // its column's terrain: that keeps open sky from leaking
                // sideways into shadowed columns.
                if channel == SUNLIGHT
                    && n != DOWN
                    && level == volume.max_light
                    && ny > height.top(nx, nz)
                {
                    continue;
                }
                light.set(channel, neighbor, nl);
                next.push(neighbor);
                if let Some(b) = bounds.as_deref_mut() {
                    b.grow(nx, ny, nz);
                }
            }
        }
        std::mem::swap(queue, next);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
