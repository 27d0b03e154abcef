//! Visible-face emission for one chunk of the volume.

use cairn_light::LightField;
use cairn_volume::{BlockPalette, Volume};
use glam::Vec3;

use crate::face::Face;
use crate::lighting::face_light;

/// Bounding sphere of a chunk's emitted geometry, in chunk-local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    /// Center of the contributing-cell box.
    pub center: Vec3,
    /// Half-diagonal of the contributing-cell box.
    pub radius: f32,
}

/// Packed face records for one chunk plus the derived bounds.
///
/// Each record is `4 + channels` floats: the face center in chunk-local
/// coordinates, the texture index packed with the face
/// (`texture·6 + face`), then one blended light value per channel. The
/// buffer is reused across calls; [`mesh_chunk`] clears it first.
#[derive(Clone, Debug)]
pub struct ChunkFaces {
    data: Vec<f32>,
    channels: usize,
    /// Chunk-local minimum of cells that emitted a face, inclusive.
    pub cell_min: [i32; 3],
    /// Chunk-local maximum of cells that emitted a face, exclusive.
    pub cell_max: [i32; 3],
    /// Bounding sphere of the contributing-cell box.
    pub sphere: BoundingSphere,
}

impl ChunkFaces {
    /// Creates an empty buffer for a field with the given channel count.
    pub fn new(channels: usize) -> Self {
        Self {
            data: Vec::new(),
            channels,
            cell_min: [0; 3],
            cell_max: [0; 3],
            sphere: BoundingSphere {
                center: Vec3::ZERO,
                radius: 0.0,
            },
        }
    }

    /// Floats per face record.
    pub fn stride(&self) -> usize {
        4 + self.channels
    }

    /// Number of emitted faces.
    pub fn len(&self) -> usize {
        self.data.len() / self.stride()
    }

    /// Returns `true` if no faces were emitted.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The packed float stream, `stride()` floats per face.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The packed stream as raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

/// Emits every visible face of the chunk with origin
/// `(chunk_x, chunk_y, chunk_z)` into `out` and returns the face count.
///
/// A face is visible iff the cell it looks into is in-bounds air; faces on
/// the volume boundary are never emitted. Cells are visited z-major, then
/// y, then x, then the six faces in [`Face::ALL`] order, so the stream is
/// stable for a given world state. Chunks that overhang the volume's upper
/// edges are clipped to it.
///
/// With zero faces emitted the cell box keeps its empty sentinel (min at
/// the chunk size, max at 0) and the sphere is meaningless; callers gate on
/// the returned count.
#[allow(clippy::too_many_arguments)]
pub fn mesh_chunk<P: BlockPalette>(
    volume: &Volume,
    voxels: &[u8],
    light: &LightField,
    palette: &P,
    chunk_x: i32,
    chunk_y: i32,
    chunk_z: i32,
    out: &mut ChunkFaces,
) -> usize {
    debug_assert_eq!(out.channels, light.channels());
    let size = volume.chunk_size;
    out.data.clear();
    out.cell_min = [size; 3];
    out.cell_max = [0; 3];

    let mut count = 0usize;
    let mut blended = vec![0.0f32; light.channels()];
    let end_x = (chunk_x + size).min(volume.width);
    let end_y = (chunk_y + size).min(volume.height);
    let end_z = (chunk_z + size).min(volume.depth);
    for z in chunk_z.max(0)..end_z {
        for y in chunk_y.max(0)..end_y {
            for x in chunk_x.max(0)..end_x {
                let value = voxels[volume.index(x, y, z).expect("chunk cell in bounds")];
                if value == 0 {
                    continue;
                }
                let (cx, cy, cz) = (x - chunk_x, y - chunk_y, z - chunk_z);
                let mut visible = false;
                for face in Face::ALL {
                    let (nx, ny, nz) = face.neighbor(x, y, z);
                    let Some(neighbor) = volume.index(nx, ny, nz) else {
                        continue;
                    };
                    if voxels[neighbor] != 0 {
                        continue;
                    }
                    visible = true;
                    let texture = palette.texture(face.index() as u8, value, x, y, z);
                    out.data.push(cx as f32 + 0.5);
                    out.data.push(cy as f32 + 0.5);
                    out.data.push(cz as f32 + 0.5);
                    out.data.push(texture as f32 * 6.0 + face.index() as f32);
                    face_light(volume, voxels, light, face, nx, ny, nz, &mut blended);
                    out.data.extend_from_slice(&blended);
                    count += 1;
                }
                if visible {
                    out.cell_min[0] = out.cell_min[0].min(cx);
                    out.cell_min[1] = out.cell_min[1].min(cy);
                    out.cell_min[2] = out.cell_min[2].min(cz);
                    out.cell_max[0] = out.cell_max[0].max(cx + 1);
                    out.cell_max[1] = out.cell_max[1].max(cy + 1);
                    out.cell_max[2] = out.cell_max[2].max(cz + 1);
                }
            }
        }
    }

    let min = Vec3::new(
        out.cell_min[0] as f32,
        out.cell_min[1] as f32,
        out.cell_min[2] as f32,
    );
    let max = Vec3::new(
        out.cell_max[0] as f32,
        out.cell_max[1] as f32,
        out.cell_max[2] as f32,
    );
    out.sphere = BoundingSphere {
        center: 0.5 * (min + max),
        radius: (0.5 * (max - min)).length(),
    };
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_light::{LightScratch, SUNLIGHT, propagate};
    use cairn_volume::{HeightMap, Unlit};

    fn lit_world(volume: &Volume, voxels: &[u8]) -> LightField {
        let mut height = HeightMap::new(volume);
        let mut light = LightField::sun_only(volume);
        let mut scratch = LightScratch::new();
        propagate(volume, voxels, &mut height, &mut light, &Unlit, &mut scratch);
        light
    }

    #[test]
    fn test_lone_cube_emits_six_faces() {
        let volume = Volume::new(8, 8, 8, 8, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        voxels[volume.index(3, 3, 3).unwrap()] = 1;
        let light = lit_world(&volume, &voxels);

        let mut out = ChunkFaces::new(1);
        let count = mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        assert_eq!(count, 6);
        assert_eq!(out.len(), 6);
        assert_eq!(out.cell_min, [3, 3, 3]);
        assert_eq!(out.cell_max, [4, 4, 4]);
    }

    #[test]
    fn test_buried_cell_emits_nothing() {
        let volume = Volume::new(4, 4, 4, 4, 15);
        let mut voxels = vec![1u8; volume.cell_count()];
        // Every cell solid: every neighbor is either solid or out of bounds.
        let light = lit_world(&volume, &voxels);
        let mut out = ChunkFaces::new(1);
        let count = mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        assert_eq!(count, 0);
        assert!(out.is_empty());

        // Opening one cell exposes exactly the faces looking into it.
        voxels[volume.index(1, 1, 1).unwrap()] = 0;
        let light = lit_world(&volume, &voxels);
        let count = mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        assert_eq!(count, 6);
    }

    #[test]
    fn test_boundary_faces_are_not_emitted() {
        let volume = Volume::new(4, 4, 4, 4, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        voxels[volume.index(0, 0, 0).unwrap()] = 1;
        let light = lit_world(&volume, &voxels);
        let mut out = ChunkFaces::new(1);
        // Three faces look out of the volume, three look into air.
        let count = mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_record_layout_and_texture_packing() {
        let volume = Volume::new(8, 8, 8, 8, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        voxels[volume.index(2, 5, 4).unwrap()] = 1;
        let light = lit_world(&volume, &voxels);

        struct Numbered;
        impl BlockPalette for Numbered {
            fn emission(&self, _value: u8) -> Option<u8> {
                None
            }
            fn texture(&self, face: u8, _value: u8, _x: i32, _y: i32, _z: i32) -> u32 {
                10 + face as u32
            }
        }

        let mut out = ChunkFaces::new(1);
        let count = mesh_chunk(&volume, &voxels, &light, &Numbered, 0, 0, 0, &mut out);
        assert_eq!(count, 6);
        assert_eq!(out.stride(), 5);
        for (f, record) in out.data().chunks(out.stride()).enumerate() {
            assert_eq!(&record[0..3], &[2.5, 5.5, 4.5], "face center");
            let face = Face::ALL[f];
            let expected = (10 + face.index() as u32) as f32 * 6.0 + face.index() as f32;
            assert_eq!(record[3], expected, "texture packing for face {f}");
            assert!((0.0..=1.0).contains(&record[4]), "light in unit range");
        }
    }

    #[test]
    fn test_emission_order_is_z_y_x() {
        let volume = Volume::new(8, 8, 8, 8, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        voxels[volume.index(6, 1, 1).unwrap()] = 1;
        voxels[volume.index(1, 6, 1).unwrap()] = 1;
        voxels[volume.index(1, 1, 6).unwrap()] = 1;
        let light = lit_world(&volume, &voxels);

        let mut out = ChunkFaces::new(1);
        mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        let centers: Vec<[f32; 3]> = out
            .data()
            .chunks(out.stride())
            .map(|r| [r[0], r[1], r[2]])
            .collect();
        // Lowest z first; within equal z, lowest y; within that, lowest x.
        assert_eq!(centers[0], [6.5, 1.5, 1.5]);
        assert_eq!(centers[6], [1.5, 6.5, 1.5]);
        assert_eq!(centers[12], [1.5, 1.5, 6.5]);
    }

    #[test]
    fn test_sphere_encloses_every_face_center() {
        let volume = Volume::new(16, 16, 16, 16, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        for (x, y, z) in [(1, 1, 1), (14, 2, 3), (7, 12, 9), (3, 8, 14)] {
            voxels[volume.index(x, y, z).unwrap()] = 1;
        }
        let light = lit_world(&volume, &voxels);

        let mut out = ChunkFaces::new(1);
        let count = mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        assert!(count > 0);
        for record in out.data().chunks(out.stride()) {
            let center = Vec3::new(record[0], record[1], record[2]);
            let distance = (center - out.sphere.center).length();
            assert!(
                distance <= out.sphere.radius + 1e-4,
                "face center {center} outside sphere"
            );
        }
    }

    #[test]
    fn test_partial_chunk_on_upper_edge() {
        // 20-wide volume with 16-cell chunks leaves a 4-wide edge chunk.
        let volume = Volume::new(20, 8, 8, 16, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        voxels[volume.index(18, 3, 3).unwrap()] = 1;
        let light = lit_world(&volume, &voxels);

        let mut out = ChunkFaces::new(1);
        let count = mesh_chunk(&volume, &voxels, &light, &Unlit, 16, 0, 0, &mut out);
        assert_eq!(count, 6);
        assert_eq!(out.cell_min, [2, 3, 3], "chunk-local coordinates");
    }

    #[test]
    fn test_fully_sunlit_top_face_blends_to_one() {
        let volume = Volume::new(8, 8, 8, 8, 15);
        let mut voxels = vec![0u8; volume.cell_count()];
        voxels[volume.index(4, 2, 4).unwrap()] = 1;
        let light = lit_world(&volume, &voxels);

        let mut out = ChunkFaces::new(1);
        mesh_chunk(&volume, &voxels, &light, &Unlit, 0, 0, 0, &mut out);
        let top = out
            .data()
            .chunks(out.stride())
            .find(|r| r[3] as usize % 6 == Face::PosY.index())
            .expect("top face present");
        assert_eq!(top[4], 1.0);
        assert_eq!(light.get(SUNLIGHT, volume.index(4, 3, 4).unwrap()), 15);
    }
}
