use glam::{Quat, Vec2, Vec3};
use mazen_common::{CellCoord, GridSpec, Transform};
use serde::{Deserialize, Serialize};

use crate::boundary::LayoutError;

pub const FLOOR_TEXTURE: &str = "floor";
pub const CEILING_TEXTURE: &str = "ceiling";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    Floor,
    Ceiling,
}

/// A horizontal plane covering the enclosure.
///
/// `transform` places a unit plane lying in local XY; `scale.x`/`scale.y`
/// carry the plane's extent and the rotation about X lays it flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePlacement {
    pub kind: SurfaceKind,
    pub transform: Transform,
    pub texture_id: String,
    /// How many times the texture tiles across the plane.
    pub texture_repeat: [u32; 2],
}

impl SurfacePlacement {
    /// Plane extent along its local X and Y axes.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.transform.scale.x, self.transform.scale.y)
    }
}

/// The floor: one cell-size plane per grid cell, half a cell below eye level.
pub fn floor_placement(grid: &GridSpec) -> Result<SurfacePlacement, LayoutError> {
    if !grid.is_valid() {
        return Err(LayoutError::invalid(grid));
    }
    let (extent_x, extent_z) = grid.extent();
    Ok(SurfacePlacement {
        kind: SurfaceKind::Floor,
        transform: Transform {
            position: Vec3::new(extent_x / 2.0, -grid.cell_size / 2.0, extent_z / 2.0),
            rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            scale: Vec3::new(extent_x, extent_z, 1.0),
        },
        texture_id: FLOOR_TEXTURE.to_string(),
        texture_repeat: [grid.length, grid.width],
    })
}

/// The ceiling: twice the grid extent, one cell above eye level, facing down.
pub fn ceiling_placement(grid: &GridSpec) -> Result<SurfacePlacement, LayoutError> {
    if !grid.is_valid() {
        return Err(LayoutError::invalid(grid));
    }
    let (extent_x, extent_z) = grid.extent();
    Ok(SurfacePlacement {
        kind: SurfaceKind::Ceiling,
        transform: Transform {
            position: Vec3::new(extent_x / 2.0, grid.cell_size, extent_z / 2.0),
            rotation: Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
            scale: Vec3::new(2.0 * extent_x, 2.0 * extent_z, 1.0),
        },
        texture_id: CEILING_TEXTURE.to_string(),
        texture_repeat: [1, 1],
    })
}

/// Scene-space XZ centre of a cell.
pub fn cell_center(cell: CellCoord, cell_size: f32) -> Vec2 {
    Vec2::new(
        cell.x as f32 * cell_size + cell_size / 2.0,
        cell.z as f32 * cell_size + cell_size / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_covers_grid_below_eye_level() {
        let grid = GridSpec::new(3, 2, 100.0);
        let floor = floor_placement(&grid).unwrap();
        assert_eq!(floor.kind, SurfaceKind::Floor);
        assert_eq!(floor.transform.position, Vec3::new(150.0, -50.0, 100.0));
        assert_eq!(floor.extent(), Vec2::new(300.0, 200.0));
        assert_eq!(floor.texture_repeat, [3, 2]);
        assert_eq!(floor.texture_id, FLOOR_TEXTURE);
    }

    #[test]
    fn floor_faces_up() {
        let floor = floor_placement(&GridSpec::new(3, 2, 100.0)).unwrap();
        let normal = floor.transform.rotation * Vec3::Z;
        assert!((normal - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn ceiling_is_double_extent_and_faces_down() {
        let grid = GridSpec::new(3, 2, 100.0);
        let ceiling = ceiling_placement(&grid).unwrap();
        assert_eq!(ceiling.transform.position, Vec3::new(150.0, 100.0, 100.0));
        assert_eq!(ceiling.extent(), Vec2::new(600.0, 400.0));
        let normal = ceiling.transform.rotation * Vec3::Z;
        assert!((normal + Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn surfaces_reject_invalid_grid() {
        let grid = GridSpec::new(0, 2, 100.0);
        assert!(floor_placement(&grid).is_err());
        assert!(ceiling_placement(&grid).is_err());
    }

    #[test]
    fn cell_center_is_half_a_cell_in() {
        assert_eq!(cell_center(CellCoord::new(0, 0), 100.0), Vec2::new(50.0, 50.0));
        assert_eq!(cell_center(CellCoord::new(2, 1), 100.0), Vec2::new(250.0, 150.0));
    }
}
