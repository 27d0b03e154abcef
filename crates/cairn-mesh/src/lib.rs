//! Per-chunk visible-face extraction with ambient light filtering.

pub mod face;
pub mod lighting;
pub mod mesher;

pub use face::Face;
pub use lighting::face_light;
pub use mesher::{BoundingSphere, ChunkFaces, mesh_chunk};
