//! Grid pathfinding for walking agents: 3D A* with step-up/step-down moves,
//! head clearance, and a visit cap.

pub mod astar;
pub mod rules;

pub use astar::{PathNode, find_path};
pub use rules::PathContext;
