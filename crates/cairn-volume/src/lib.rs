//! Dense voxel grid primitives: volume addressing, column height map, change regions, and block palettes.

pub mod heightmap;
pub mod palette;
pub mod region;
pub mod volume;

pub use heightmap::HeightMap;
pub use palette::{BlockDef, BlockPalette, PaletteError, PaletteRegistry, Unlit};
pub use region::Region;
pub use volume::{Volume, ground};
