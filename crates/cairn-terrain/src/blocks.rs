//! The block set the generator writes, and a palette describing it.

use cairn_volume::{BlockDef, PaletteRegistry};

/// Empty space.
pub const AIR: u8 = 0;
/// Base terrain, darker noise pockets.
pub const ROCK: u8 = 1;
/// Base terrain, lighter noise pockets; also the pedestal under lamps.
pub const SOIL: u8 = 2;
/// Painted over the terrain surface when grass decoration is on.
pub const GRASS: u8 = 3;
/// Lamp emitting on channel 1.
pub const LAMP_RED: u8 = 4;
/// Lamp emitting on channel 2.
pub const LAMP_GREEN: u8 = 5;
/// Lamp emitting on channel 3.
pub const LAMP_BLUE: u8 = 6;

/// Texture atlas slots for the starter blocks.
mod texture {
    pub const ROCK: u32 = 0;
    pub const SOIL: u32 = 1;
    pub const GRASS_SIDE: u32 = 2;
    pub const GRASS_TOP: u32 = 3;
    pub const LAMP_FIRST: u32 = 4;
}

/// Builds the palette matching the generator's block values, so a generated
/// world lights and meshes without further host wiring.
///
/// Registration order pins each block to the value the generator writes.
pub fn starter_palette() -> PaletteRegistry {
    let mut palette = PaletteRegistry::new();
    palette
        .register(BlockDef::uniform("rock", texture::ROCK))
        .expect("fresh palette accepts rock");
    palette
        .register(BlockDef::uniform("soil", texture::SOIL))
        .expect("fresh palette accepts soil");
    palette
        .register(BlockDef {
            name: "grass".to_string(),
            emission: None,
            // Face order: +z, top, bottom, −x, +x, −z.
            faces: [
                texture::GRASS_SIDE,
                texture::GRASS_TOP,
                texture::SOIL,
                texture::GRASS_SIDE,
                texture::GRASS_SIDE,
                texture::GRASS_SIDE,
            ],
        })
        .expect("fresh palette accepts grass");
    for (name, channel) in [("lamp-red", 1u8), ("lamp-green", 2), ("lamp-blue", 3)] {
        palette
            .register(BlockDef {
                name: name.to_string(),
                emission: Some(channel),
                faces: [texture::LAMP_FIRST + (channel - 1) as u32; 6],
            })
            .expect("fresh palette accepts lamps");
    }
    palette
}
