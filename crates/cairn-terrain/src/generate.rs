//! Fractal island generator.
//!
//! Terrain grows inside a noise-perturbed cylinder: a cell is solid when it
//! sits below a noise-scaled ceiling *and* inside a noise-wobbled disc, so
//! the island silhouette erodes toward its rim. A single z/y/x scan both
//! places terrain and decorates surfaces, reading the rows it has already
//! written.

use glam::Vec2;
use noise::{Fbm, MultiFractal, NoiseFn, Simplex};
use serde::{Deserialize, Serialize};

use cairn_volume::Volume;

use crate::blocks::{AIR, GRASS, LAMP_RED, ROCK, SOIL};

/// Fractal parameters and decoration toggles for [`generate`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// World seed; equal seeds reproduce the field exactly.
    pub seed: u32,
    /// Base frequency of the terrain fBm. Default: 0.01.
    pub frequency: f64,
    /// Amplitude multiplier per octave. Default: 0.5.
    pub gain: f64,
    /// Frequency multiplier per octave. Default: 2.0.
    pub lacunarity: f64,
    /// Number of fBm octaves. Default: 3.
    pub octaves: usize,
    /// Paint exposed terrain with grass.
    pub grass: bool,
    /// Sprinkle rare lamp pillars on the surface.
    pub lamps: bool,
    /// Auxiliary-noise magnitude a surface site must exceed to grow a lamp
    /// pillar; closer to 1.0 means rarer lamps. Default: 0.98.
    pub lamp_threshold: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.01,
            gain: 0.5,
            lacunarity: 2.0,
            octaves: 3,
            grass: true,
            lamps: true,
            lamp_threshold: 0.98,
        }
    }
}

/// Fills `voxels` with a generated island.
///
/// The buffer is cleared to air first. Solid cells take [`ROCK`] or
/// [`SOIL`] from an auxiliary noise sample; when decoration is enabled the
/// exposed surface is repainted [`GRASS`] and, where the auxiliary noise
/// spikes past the lamp threshold, a one-block pedestal with a colored lamp
/// on top is planted instead.
pub fn generate(volume: &Volume, voxels: &mut [u8], params: &GeneratorParams) {
    debug_assert_eq!(voxels.len(), volume.cell_count());
    voxels.fill(AIR);

    let fbm = Fbm::<Simplex>::new(params.seed)
        .set_octaves(params.octaves)
        .set_frequency(params.frequency)
        .set_lacunarity(params.lacunarity)
        .set_persistence(params.gain);
    // The auxiliary source stays single-octave at 4× the base frequency; it
    // picks block flavors and decoration sites.
    let aux = Simplex::new(params.seed);
    let aux_frequency = params.frequency * 4.0;
    let aux_at = |a: f64, b: f64, c: f64| {
        aux.get([a * aux_frequency, b * aux_frequency, c * aux_frequency])
    };

    let radius = 0.5 * volume.width.max(volume.depth) as f32;
    let ceiling = (volume.height - 2) as f32;
    for z in 0..volume.depth {
        for y in 0..volume.height {
            for x in 0..volume.width {
                let offset = Vec2::new(
                    x as f32 - volume.width as f32 * 0.5 + 0.5,
                    z as f32 - volume.depth as f32 * 0.5 + 0.5,
                );
                let d = offset.length();
                if d > radius {
                    continue;
                }
                let i = volume.index(x, y, z).expect("generator scan in bounds");
                let n = fbm.get([x as f64, y as f64, z as f64]).abs() as f32;
                if (y as f32) < ceiling * n && d < radius * (0.8 + 0.2 * n) {
                    voxels[i] = SOIL - aux_at(z as f64, x as f64, y as f64).abs().round() as u8;
                    continue;
                }
                if (params.grass || params.lamps) && y > 0 && voxels[i] == AIR {
                    let below = volume.index(x, y - 1, z).expect("row below already scanned");
                    if voxels[below] == ROCK || voxels[below] == SOIL {
                        if params.grass {
                            voxels[below] = GRASS;
                        }
                        if params.lamps
                            && aux_at(z as f64 * 10.0, x as f64 * 10.0, y as f64 * 10.0).abs()
                                > params.lamp_threshold
                        {
                            if let Some(above) = volume.index(x, y + 1, z) {
                                voxels[i] = SOIL;
                                let color =
                                    (aux_at(x as f64, y as f64, z as f64).abs() * 2.0).round();
                                voxels[above] = LAMP_RED + color as u8;
                            }
                        }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
