//! Multi-channel voxel light field with incremental BFS propagation.
//!
//! One sunlight channel (always channel 0) plus up to three emitter
//! channels, each an independent scalar field diffused by the same
//! breadth-first engine. Sunlight attenuates asymmetrically: a full-strength
//! column travels straight down for free, and the per-column height map
//! keeps it from leaking sideways under terrain.

pub mod field;
pub mod flood;
pub mod propagate;
pub mod update;

pub use field::{LightField, SUNLIGHT};
pub use flood::{LightScratch, flood_light, remove_light};
pub use propagate::propagate;
pub use update::update;
