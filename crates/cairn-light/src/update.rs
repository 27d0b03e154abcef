//! Single-cell edit coordinator: rewires the height map and every light
//! channel after a voxel write and reports the changed bounding box.

use cairn_volume::{BlockPalette, HeightMap, Region, Volume};

use crate::field::LightField;
use crate::flood::{LightScratch, NEIGHBORS, flood_light, flood_pending, remove_light};

/// Writes `value` into `(x, y, z)` and repairs the light field around it.
///
/// `bounds` is reset to the degenerate box at the edit cell and grown to the
/// minimal AABB of every cell whose light changed; the renderer uses it to
/// invalidate chunks. Out-of-bounds coordinates and writes of the value
/// already present are no-ops (the degenerate box still reports the request).
/// With `update_light` false only the voxel buffer is touched, for bulk
/// edits that re-propagate once at the end.
#[allow(clippy::too_many_arguments)]
pub fn update<P: BlockPalette>(
    bounds: &mut Region,
    volume: &Volume,
    voxels: &mut [u8],
    height: &mut HeightMap,
    light: &mut LightField,
    palette: &P,
    scratch: &mut LightScratch,
    x: i32,
    y: i32,
    z: i32,
    value: u8,
    update_light: bool,
) {
    *bounds = Region::point(x, y, z);

    let Some(i) = volume.index(x, y, z) else {
        tracing::warn!("voxel update out of bounds: ({}, {}, {})", x, y, z);
        return;
    };
    let current = voxels[i];
    if current == value {
        return;
    }
    voxels[i] = value;

    if !update_light {
        return;
    }

    height.update_on_edit(volume, voxels, x, y, z, value);

    // A replaced emitter takes its channel's cone down with it.
    if let Some(channel) = palette.emission(current) {
        let channel = channel as usize;
        if channel < light.channels() {
            let prior = light.get(channel, i);
            if prior != 0 {
                light.set(channel, i, 0);
                remove_light(
                    Some(&mut *bounds),
                    channel,
                    volume,
                    voxels,
                    height,
                    light,
                    &[(i, prior)],
                    scratch,
                );
            }
        }
    }

    // Filling an air cell swallows whatever light was passing through it.
    if value != 0 && current == 0 {
        for channel in 0..light.channels() {
            let prior = light.get(channel, i);
            if prior != 0 {
                light.set(channel, i, 0);
                remove_light(
                    Some(&mut *bounds),
                    channel,
                    volume,
                    voxels,
                    height,
                    light,
                    &[(i, prior)],
                    scratch,
                );
            }
        }
    }

    // A placed emitter floods its channel from the new source.
    if let Some(channel) = palette.emission(value) {
        let channel = channel as usize;
        if channel < light.channels() {
            light.set(channel, i, volume.max_light);
            flood_light(
                Some(&mut *bounds),
                channel,
                volume,
                voxels,
                height,
                light,
                &[i],
                scratch,
            );
        }
    }

    // Clearing a solid cell refills it from its brightest lit neighbors.
    if value == 0 && current != 0 {
        for channel in 0..light.channels() {
            scratch.raise.clear();
            for &(dx, dy, dz) in NEIGHBORS.iter() {
                if let Some(neighbor) = volume.index(x + dx, y + dy, z + dz) {
                    if light.get(channel, neighbor) != 0 {
                        scratch.raise.push(neighbor);
                    }
                }
            }
            if !scratch.raise.is_empty() {
                flood_pending(
                    Some(&mut *bounds),
                    channel,
                    volume,
                    voxels,
                    height,
                    light,
                    scratch,
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
