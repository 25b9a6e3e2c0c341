//! Enclosure layout: perimeter walls, floor and ceiling derived from grid
//! dimensions.
//!
//! # Invariants
//! - Exactly one wall placement per perimeter cell-edge.
//! - No interior walls are produced; the enclosure is a single bordered room.
//! - Layout is a pure function of the `GridSpec`.

mod boundary;
mod surfaces;

pub use boundary::{LayoutError, WALL_TEXTURE, generate_boundary_walls};
pub use surfaces::{
    CEILING_TEXTURE, FLOOR_TEXTURE, SurfaceKind, SurfacePlacement, ceiling_placement,
    cell_center, floor_placement,
};

pub fn crate_info() -> &'static str {
    "mazen-layout v0.1.0"
}
