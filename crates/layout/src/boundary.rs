use mazen_common::{CellCoord, GridSpec, Side, WallPlacement};

/// Texture id carried by every perimeter wall.
pub const WALL_TEXTURE: &str = "wall";

/// Errors from layout generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid grid: length={length}, width={width}, cell_size={cell_size}")]
    InvalidGrid {
        length: u32,
        width: u32,
        cell_size: f32,
    },
}

impl LayoutError {
    pub(crate) fn invalid(grid: &GridSpec) -> Self {
        Self::InvalidGrid {
            length: grid.length,
            width: grid.width,
            cell_size: grid.cell_size,
        }
    }
}

/// Generate the perimeter walls of a `length x width` enclosure.
///
/// Order is fixed: for each `x` a `Left` wall at `(x, 0)` then a `Right` wall
/// at `(x, width - 1)`; then for each `z` a `Front` wall at `(length - 1, z)`
/// then a `Back` wall at `(0, z)`. The result always holds
/// `2 * (length + width)` placements. On a grid one cell wide the same cell
/// receives two opposite faces and both are kept.
pub fn generate_boundary_walls(grid: &GridSpec) -> Result<Vec<WallPlacement>, LayoutError> {
    if !grid.is_valid() {
        return Err(LayoutError::invalid(grid));
    }

    // is_valid bounds both dimensions by i32::MAX.
    let length = grid.length as i32;
    let width = grid.width as i32;
    let mut walls = Vec::with_capacity(2 * (grid.length as usize + grid.width as usize));

    for x in 0..length {
        walls.push(WallPlacement::new(
            CellCoord::new(x, 0),
            Side::Left,
            WALL_TEXTURE,
        ));
        walls.push(WallPlacement::new(
            CellCoord::new(x, width - 1),
            Side::Right,
            WALL_TEXTURE,
        ));
    }

    for z in 0..width {
        walls.push(WallPlacement::new(
            CellCoord::new(length - 1, z),
            Side::Front,
            WALL_TEXTURE,
        ));
        walls.push(WallPlacement::new(
            CellCoord::new(0, z),
            Side::Back,
            WALL_TEXTURE,
        ));
    }

    tracing::debug!(
        length = grid.length,
        width = grid.width,
        walls = walls.len(),
        "generated boundary walls"
    );

    Ok(walls)
}
