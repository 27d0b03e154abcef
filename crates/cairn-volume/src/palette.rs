//! Block palette: maps voxel byte values to their lighting and texturing
//! behavior.
//!
//! The palette is a per-world value injected into the light engine and the
//! mesher, so two worlds can run different block sets in one process without
//! global state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of emitter light channels (channels 1..=3; channel 0 is sunlight).
pub const EMITTER_CHANNELS: u8 = 3;

/// Host-supplied block behavior consumed by the light engine and the mesher.
pub trait BlockPalette {
    /// Returns the emitter channel (1..=3) the block radiates on, or `None`
    /// for non-emitting blocks. Air (value 0) never emits.
    fn emission(&self, value: u8) -> Option<u8>;

    /// Returns the texture index for one face of a block.
    ///
    /// `face` is the mesher's face index (0..6); the cell coordinates let a
    /// palette vary textures by position.
    fn texture(&self, face: u8, value: u8, x: i32, y: i32, z: i32) -> u32;
}

/// Full descriptor for a registered block.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockDef {
    /// Human-readable name (e.g. "rock", "grass").
    pub name: String,
    /// Emitter channel (1..=3) or `None` for non-emitting blocks.
    pub emission: Option<u8>,
    /// Texture index per face, indexed by the mesher's face order.
    pub faces: [u32; 6],
}

impl BlockDef {
    /// A block with the same texture on all six faces and no emission.
    pub fn uniform(name: &str, texture: u32) -> Self {
        Self {
            name: name.to_string(),
            emission: None,
            faces: [texture; 6],
        }
    }
}

/// Errors that can occur during block registration.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A block with the same name has already been registered.
    #[error("duplicate block name: {0}")]
    DuplicateName(String),
    /// All 255 non-air byte values have been consumed.
    #[error("block palette is full (max 256 blocks including air)")]
    PaletteFull,
    /// The emitter channel is outside 1..=3.
    #[error("invalid emitter channel {0} (must be 1..=3)")]
    InvalidChannel(u8),
}

/// Registry-backed [`BlockPalette`]: block values are assigned sequentially
/// from 1, with air fixed at 0 so zeroed voxel memory is empty space.
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    blocks: Vec<BlockDef>,
}

impl PaletteRegistry {
    /// Creates a registry with air pre-registered as value 0.
    pub fn new() -> Self {
        Self {
            blocks: vec![BlockDef {
                name: "air".to_string(),
                emission: None,
                faces: [0; 6],
            }],
        }
    }

    /// Registers a block and returns its assigned voxel value.
    ///
    /// Values are assigned sequentially starting from 1 (0 is air).
    pub fn register(&mut self, def: BlockDef) -> Result<u8, PaletteError> {
        if self.blocks.iter().any(|b| b.name == def.name) {
            return Err(PaletteError::DuplicateName(def.name));
        }
        if self.blocks.len() > u8::MAX as usize {
            return Err(PaletteError::PaletteFull);
        }
        if let Some(channel) = def.emission {
            if channel == 0 || channel > EMITTER_CHANNELS {
                return Err(PaletteError::InvalidChannel(channel));
            }
        }
        let value = self.blocks.len() as u8;
        self.blocks.push(def);
        Ok(value)
    }

    /// Returns the definition for a voxel value, or `None` for unregistered
    /// values.
    pub fn get(&self, value: u8) -> Option<&BlockDef> {
        self.blocks.get(value as usize)
    }

    /// Returns the voxel value for a named block.
    pub fn lookup(&self, name: &str) -> Option<u8> {
        self.blocks
            .iter()
            .position(|b| b.name == name)
            .map(|i| i as u8)
    }

    /// Total number of registered blocks, including air.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if only air is registered.
    pub fn is_empty(&self) -> bool {
        self.blocks.len() <= 1
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockPalette for PaletteRegistry {
    fn emission(&self, value: u8) -> Option<u8> {
        self.blocks.get(value as usize).and_then(|b| b.emission)
    }

    fn texture(&self, face: u8, value: u8, _x: i32, _y: i32, _z: i32) -> u32 {
        match self.blocks.get(value as usize) {
            Some(def) => def.faces[face as usize % 6],
            None => 0,
        }
    }
}

/// Palette for sunlight-only worlds: nothing emits, every face maps to
/// texture 0. Equivalent to a single-channel light field.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlit;

impl BlockPalette for Unlit {
    fn emission(&self, _value: u8) -> Option<u8> {
        None
    }

    fn texture(&self, _face: u8, _value: u8, _x: i32, _y: i32, _z: i32) -> u32 {
        0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
