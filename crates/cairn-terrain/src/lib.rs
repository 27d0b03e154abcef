//! Procedural island generation: fractal noise inside a cylindrical
//! envelope, with optional grass and lamp decoration.

pub mod blocks;
pub mod generate;

pub use blocks::{
    AIR, GRASS, LAMP_BLUE, LAMP_GREEN, LAMP_RED, ROCK, SOIL, starter_palette,
};
pub use generate::{GeneratorParams, generate};
