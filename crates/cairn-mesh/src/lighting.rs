//! Per-face ambient light: a 5-sample cross filter over the cell a face
//! looks into.

use cairn_light::LightField;
use cairn_volume::Volume;

use crate::face::Face;

/// Sample offsets in the face's tangent plane: the face-neighbor cell itself
/// plus its four edge neighbors.
const LIGHT_SAMPLES: [(i32, i32); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Computes the blended light for one face, one value per channel, into
/// `out` (length = channel count).
///
/// `(x, y, z)` is the air cell the face looks into. Per channel, each of the
/// five samples contributes when it is in-bounds, air, and carries nonzero
/// light; the face-neighbor cell itself always contributes, so a face in
/// darkness blends to 0 rather than dividing by zero. The result is
/// normalized to `[0, 1]` against the volume's peak light level.
#[allow(clippy::too_many_arguments)]
pub fn face_light(
    volume: &Volume,
    voxels: &[u8],
    light: &LightField,
    face: Face,
    x: i32,
    y: i32,
    z: i32,
    out: &mut [f32],
) {
    debug_assert_eq!(out.len(), light.channels());
    let (ux, uy, uz) = face.tangent();
    let (vx, vy, vz) = face.bitangent();
    for (channel, value) in out.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        let mut count = 0u8;
        for (s, &(u, v)) in LIGHT_SAMPLES.iter().enumerate() {
            let sample = volume.index(x + ux * u + vx * v, y + uy * u + vy * v, z + uz * u + vz * v);
            let Some(i) = sample else {
                continue;
            };
            if voxels[i] != 0 {
                continue;
            }
            let level = light.get(channel, i);
            if level != 0 || s == 0 {
                sum += level as f32;
                count += 1;
            }
        }
        *value = sum / count as f32 / volume.max_light as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_light::SUNLIGHT;

    fn setup() -> (Volume, Vec<u8>, LightField) {
        let volume = Volume::new(5, 5, 5, 4, 15);
        let voxels = vec![0u8; volume.cell_count()];
        let light = LightField::sun_only(&volume);
        (volume, voxels, light)
    }

    #[test]
    fn test_uniform_light_blends_to_one() {
        let (volume, voxels, mut light) = setup();
        for i in 0..volume.cell_count() {
            light.set(SUNLIGHT, i, 15);
        }
        let mut out = [0.0f32];
        face_light(&volume, &voxels, &light, Face::PosY, 2, 3, 2, &mut out);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_dark_face_blends_to_zero() {
        let (volume, voxels, light) = setup();
        let mut out = [0.5f32];
        face_light(&volume, &voxels, &light, Face::PosY, 2, 3, 2, &mut out);
        assert_eq!(out[0], 0.0, "dark neighbor still contributes a zero");
    }

    #[test]
    fn test_dark_side_samples_are_excluded() {
        let (volume, voxels, mut light) = setup();
        // Only the face-neighbor cell is lit: the four dark cross samples
        // must not drag the average down.
        let center = volume.index(2, 3, 2).unwrap();
        light.set(SUNLIGHT, center, 15);
        let mut out = [0.0f32];
        face_light(&volume, &voxels, &light, Face::PosY, 2, 3, 2, &mut out);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_partially_lit_cross_averages() {
        let (volume, voxels, mut light) = setup();
        let center = volume.index(2, 3, 2).unwrap();
        light.set(SUNLIGHT, center, 15);
        // PosY tangent is +x, bitangent is -z: the (−1, 0) sample sits at
        // x−1, the (0, 1) sample at z−1.
        light.set(SUNLIGHT, volume.index(1, 3, 2).unwrap(), 9);
        light.set(SUNLIGHT, volume.index(2, 3, 1).unwrap(), 6);
        let mut out = [0.0f32];
        face_light(&volume, &voxels, &light, Face::PosY, 2, 3, 2, &mut out);
        // (15 + 9 + 6) / 3 / 15
        assert!((out[0] - 30.0 / 3.0 / 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_solid_and_out_of_bounds_samples_are_skipped() {
        let (volume, mut voxels, mut light) = setup();
        // Face at the volume edge: two cross samples are out of bounds.
        for i in 0..volume.cell_count() {
            light.set(SUNLIGHT, i, 15);
        }
        voxels[volume.index(1, 4, 0).unwrap()] = 1;
        light.set(SUNLIGHT, volume.index(1, 4, 0).unwrap(), 0);
        let mut out = [0.0f32];
        // Neighbor cell (0, 4, 0): samples at x−1 and z−1 are OOB, the
        // sample at x+1 is solid, leaving the center and z+1 samples.
        face_light(&volume, &voxels, &light, Face::PosY, 0, 4, 0, &mut out);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_channels_filtered_independently() {
        let volume = Volume::new(5, 5, 5, 4, 15);
        let voxels = vec![0u8; volume.cell_count()];
        let mut light = LightField::with_emitters(&volume);
        let center = volume.index(2, 3, 2).unwrap();
        light.set(SUNLIGHT, center, 15);
        light.set(2, center, 5);
        let mut out = [0.0f32; 4];
        face_light(&volume, &voxels, &light, Face::PosY, 2, 3, 2, &mut out);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 0.0);
        assert!((out[2] - 5.0 / 15.0).abs() < 1e-6);
        assert_eq!(out[3], 0.0);
    }
}
