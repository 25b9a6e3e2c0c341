//! Shared types for the enclosure: grid dimensions, cell coordinates, wall
//! placements, viewport and spatial transforms.

mod types;

pub use types::{CellCoord, GridSpec, Side, Transform, ViewportContext, WallPlacement};
