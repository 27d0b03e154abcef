//! Per-cell per-channel light storage.

use cairn_volume::Volume;

/// Channel index of the sunlight field.
pub const SUNLIGHT: usize = 0;

/// Dense light levels for a volume: one `u8` plane per channel, each plane
/// laid out exactly like the voxel buffer.
///
/// A field has either 1 channel (sunlight only) or 4 channels (sunlight plus
/// three emitter colors). Solid cells hold level 0 on every channel; air
/// cells hold the diffusion fixpoint in `0..=max_light`.
#[derive(Clone, Debug)]
pub struct LightField {
    data: Vec<u8>,
    cells: usize,
    channels: usize,
}

impl LightField {
    /// Creates a dark field with the given channel count (1 or 4).
    pub fn new(volume: &Volume, channels: usize) -> Self {
        debug_assert!(channels == 1 || channels == 4);
        let cells = volume.cell_count();
        Self {
            data: vec![0; cells * channels],
            cells,
            channels,
        }
    }

    /// Dark single-channel field: daylight only.
    pub fn sun_only(volume: &Volume) -> Self {
        Self::new(volume, 1)
    }

    /// Dark four-channel field: sunlight plus three emitter channels.
    pub fn with_emitters(volume: &Volume) -> Self {
        Self::new(volume, 4)
    }

    /// Number of channels (1 or 4).
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of cells per channel plane.
    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Light level of cell `i` on `channel`.
    pub fn get(&self, channel: usize, i: usize) -> u8 {
        self.data[channel * self.cells + i]
    }

    /// Sets the light level of cell `i` on `channel`.
    pub fn set(&mut self, channel: usize, i: usize, level: u8) {
        self.data[channel * self.cells + i] = level;
    }

    /// One channel's full plane, voxel-buffer layout.
    pub fn plane(&self, channel: usize) -> &[u8] {
        &self.data[channel * self.cells..(channel + 1) * self.cells]
    }

    /// Resets every channel to darkness.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
