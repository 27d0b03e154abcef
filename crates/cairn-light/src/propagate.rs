//! Full-volume light propagation from scratch.

use cairn_volume::{BlockPalette, HeightMap, Volume};

use crate::field::{LightField, SUNLIGHT};
use crate::flood::{LightScratch, flood_pending};

/// Rebuilds the height map and every light channel from the voxel buffer.
///
/// Sunlight is seeded at `max_light` in every air cell of the top row and
/// flooded first; each emitter channel is then seeded at `max_light` inside
/// every block the palette says emits on it. The result is the diffusion
/// fixpoint: running `propagate` again changes nothing.
pub fn propagate<P: BlockPalette>(
    volume: &Volume,
    voxels: &[u8],
    height: &mut HeightMap,
    light: &mut LightField,
    palette: &P,
    scratch: &mut LightScratch,
) {
    light.clear();

    // One descending scan per column does double duty: it seeds the top-row
    // sky cells and records the topmost solid cell.
    scratch.raise.clear();
    let top = volume.height - 1;
    for z in 0..volume.depth {
        for x in 0..volume.width {
            let mut column_top = 0;
            for y in (0..volume.height).rev() {
                let i = volume.index(x, y, z).expect("column scan in bounds");
                if y == top && voxels[i] == 0 {
                    light.set(SUNLIGHT, i, volume.max_light);
                    scratch.raise.push(i);
                }
                if voxels[i] != 0 {
                    column_top = y;
                    break;
                }
            }
            height.set_top(x, z, column_top);
        }
    }
    let sky_seeds = scratch.raise.len();
    flood_pending(None, SUNLIGHT, volume, voxels, height, light, scratch);

    let mut emitter_seeds = 0;
    if light.channels() > 1 {
        for channel in 1..light.channels() {
            scratch.raise.clear();
            for i in 0..volume.cell_count() {
                if voxels[i] != 0 && palette.emission(voxels[i]) == Some(channel as u8) {
                    light.set(channel, i, volume.max_light);
                    scratch.raise.push(i);
                }
            }
            emitter_seeds += scratch.raise.len();
            flood_pending(None, channel, volume, voxels, height, light, scratch);
        }
    }

    tracing::debug!(
        sky_seeds,
        emitter_seeds,
        channels = light.channels(),
        "propagated light field"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
