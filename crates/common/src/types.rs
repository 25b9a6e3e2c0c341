use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A 2D cell coordinate in the enclosure grid (X along length, Z along width).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub x: i32,
    pub z: i32,
}

impl CellCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Which face of a cell a wall occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The `z = 0` face of the cell.
    Left,
    /// The far `z` face of the cell.
    Right,
    /// The far `x` face of the cell.
    Front,
    /// The `x = 0` face of the cell.
    Back,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Front, Side::Back];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid dimensions of an enclosure.
///
/// `length` counts cells along X, `width` counts cells along Z and
/// `cell_size` is the scene-space edge length of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub length: u32,
    pub width: u32,
    pub cell_size: f32,
}

impl GridSpec {
    /// Largest length or width a cell coordinate can address.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    pub fn new(length: u32, width: u32, cell_size: f32) -> Self {
        Self {
            length,
            width,
            cell_size,
        }
    }

    /// True when both dimensions are in `1..=MAX_DIMENSION` and the cell
    /// size is a positive finite number.
    pub fn is_valid(&self) -> bool {
        (1..=Self::MAX_DIMENSION).contains(&self.length)
            && (1..=Self::MAX_DIMENSION).contains(&self.width)
            && self.cell_size.is_finite()
            && self.cell_size > 0.0
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= 0
            && cell.z >= 0
            && (cell.x as i64) < self.length as i64
            && (cell.z as i64) < self.width as i64
    }

    /// Scene-space extent of the whole grid along X and Z.
    pub fn extent(&self) -> (f32, f32) {
        (
            self.length as f32 * self.cell_size,
            self.width as f32 * self.cell_size,
        )
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            length: 10,
            width: 10,
            cell_size: 100.0,
        }
    }
}

/// One perimeter wall: a cell, the face it occupies and the texture to use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallPlacement {
    pub cell: CellCoord,
    pub orientation: Side,
    pub texture_id: String,
}

impl WallPlacement {
    pub fn new(cell: CellCoord, orientation: Side, texture_id: impl Into<String>) -> Self {
        Self {
            cell,
            orientation,
            texture_id: texture_id.into(),
        }
    }
}

/// Size of the host viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportContext {
    pub width: f32,
    pub height: f32,
}

impl ViewportContext {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Width over height, guarding against a zero-height viewport.
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

impl Default for ViewportContext {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn grid_validity() {
        assert!(GridSpec::new(3, 2, 100.0).is_valid());
        assert!(!GridSpec::new(0, 2, 100.0).is_valid());
        assert!(!GridSpec::new(3, 0, 100.0).is_valid());
        assert!(!GridSpec::new(3, 2, 0.0).is_valid());
        assert!(!GridSpec::new(3, 2, -5.0).is_valid());
        assert!(!GridSpec::new(3, 2, f32::NAN).is_valid());
    }

    #[test]
    fn grid_dimensions_must_fit_cell_coords() {
        let max = GridSpec::MAX_DIMENSION;
        assert!(GridSpec::new(max, 1, 1.0).is_valid());
        assert!(GridSpec::new(1, max, 1.0).is_valid());
        assert!(!GridSpec::new(max + 1, 1, 1.0).is_valid());
        assert!(!GridSpec::new(1, u32::MAX, 1.0).is_valid());
    }

    #[test]
    fn grid_contains_cells() {
        let grid = GridSpec::new(3, 2, 100.0);
        assert!(grid.contains(CellCoord::new(0, 0)));
        assert!(grid.contains(CellCoord::new(2, 1)));
        assert!(!grid.contains(CellCoord::new(3, 0)));
        assert!(!grid.contains(CellCoord::new(0, -1)));
    }

    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(Side::Front.to_string(), "front");
        assert_eq!(Side::ALL.len(), 4);
    }

    #[test]
    fn viewport_half_width_and_aspect() {
        let vp = ViewportContext::new(1280.0, 720.0);
        assert_eq!(vp.half_width(), 640.0);
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(ViewportContext::new(100.0, 0.0).aspect(), 100.0);
    }
}
