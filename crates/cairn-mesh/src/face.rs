//! The six voxel faces and their fixed normal/tangent frames.

/// One of the six faces of a voxel.
///
/// The `repr(u8)` discriminant is the face index packed into the texture
/// component of every emitted face record, so the order is part of the
/// output format and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// +Z face.
    PosZ = 0,
    /// +Y face (top).
    PosY = 1,
    /// −Y face (bottom).
    NegY = 2,
    /// −X face.
    NegX = 3,
    /// +X face.
    PosX = 4,
    /// −Z face.
    NegZ = 5,
}

impl Face {
    /// All six faces in emission order.
    pub const ALL: [Face; 6] = [
        Self::PosZ,
        Self::PosY,
        Self::NegY,
        Self::NegX,
        Self::PosX,
        Self::NegZ,
    ];

    /// Returns the face index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal.
    pub fn normal(self) -> (i32, i32, i32) {
        match self {
            Self::PosZ => (0, 0, 1),
            Self::PosY => (0, 1, 0),
            Self::NegY => (0, -1, 0),
            Self::NegX => (-1, 0, 0),
            Self::PosX => (1, 0, 0),
            Self::NegZ => (0, 0, -1),
        }
    }

    /// First tangent axis of the face plane (the light filter's `u`).
    pub fn tangent(self) -> (i32, i32, i32) {
        match self {
            Self::PosZ => (1, 0, 0),
            Self::PosY => (1, 0, 0),
            Self::NegY => (1, 0, 0),
            Self::NegX => (0, 0, 1),
            Self::PosX => (0, 0, 1),
            Self::NegZ => (-1, 0, 0),
        }
    }

    /// Second tangent axis of the face plane (the light filter's `v`).
    pub fn bitangent(self) -> (i32, i32, i32) {
        match self {
            Self::PosZ => (0, 1, 0),
            Self::PosY => (0, 0, -1),
            Self::NegY => (0, 0, 1),
            Self::NegX => (0, 1, 0),
            Self::PosX => (0, 1, 0),
            Self::NegZ => (0, 1, 0),
        }
    }

    /// The cell the face looks into: `(x, y, z)` offset by the normal.
    pub fn neighbor(self, x: i32, y: i32, z: i32) -> (i32, i32, i32) {
        let (nx, ny, nz) = self.normal();
        (x + nx, y + ny, z + nz)
    }
}
