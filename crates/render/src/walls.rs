use glam::{Quat, Vec3};
use mazen_common::{Side, Transform, WallPlacement};

use crate::scene::{NodeKind, SceneNode};

/// Turns a wall placement into something the renderer can draw.
///
/// Implementations must accept every `Side` and any non-negative cell.
pub trait WallMeshBuilder {
    fn build(&self, placement: &WallPlacement, cell_size: f32) -> SceneNode;
}

/// Builds each wall as a thin box lying on the placement's cell face,
/// spanning from the floor (half a cell below eye level) to the ceiling
/// (one cell above).
#[derive(Debug, Clone, Copy)]
pub struct BoxWallBuilder {
    /// Wall thickness as a fraction of the cell size.
    pub thickness: f32,
}

impl Default for BoxWallBuilder {
    fn default() -> Self {
        Self { thickness: 0.05 }
    }
}

impl WallMeshBuilder for BoxWallBuilder {
    fn build(&self, placement: &WallPlacement, cell_size: f32) -> SceneNode {
        let c = cell_size;
        let x0 = placement.cell.x as f32 * c;
        let z0 = placement.cell.z as f32 * c;
        let height = 1.5 * c;
        let center_y = -c / 2.0 + height / 2.0;
        let thick = self.thickness * c;

        let (position, scale) = match placement.orientation {
            Side::Left => (Vec3::new(x0 + c / 2.0, center_y, z0), Vec3::new(c, height, thick)),
            Side::Right => (
                Vec3::new(x0 + c / 2.0, center_y, z0 + c),
                Vec3::new(c, height, thick),
            ),
            Side::Back => (Vec3::new(x0, center_y, z0 + c / 2.0), Vec3::new(thick, height, c)),
            Side::Front => (
                Vec3::new(x0 + c, center_y, z0 + c / 2.0),
                Vec3::new(thick, height, c),
            ),
        };

        SceneNode {
            kind: NodeKind::Wall,
            transform: Transform {
                position,
                rotation: Quat::IDENTITY,
                scale,
            },
            texture_id: placement.texture_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazen_common::CellCoord;

    fn wall(x: i32, z: i32, side: Side) -> WallPlacement {
        WallPlacement::new(CellCoord::new(x, z), side, "wall")
    }

    #[test]
    fn left_and_right_sit_on_z_faces() {
        let b = BoxWallBuilder::default();
        let left = b.build(&wall(1, 0, Side::Left), 100.0);
        assert_eq!(left.transform.position.x, 150.0);
        assert_eq!(left.transform.position.z, 0.0);
        assert_eq!(left.transform.scale.x, 100.0);

        let right = b.build(&wall(1, 1, Side::Right), 100.0);
        assert_eq!(right.transform.position.z, 200.0);
    }

    #[test]
    fn front_and_back_sit_on_x_faces() {
        let b = BoxWallBuilder::default();
        let back = b.build(&wall(0, 1, Side::Back), 100.0);
        assert_eq!(back.transform.position.x, 0.0);
        assert_eq!(back.transform.position.z, 150.0);
        assert_eq!(back.transform.scale.z, 100.0);

        let front = b.build(&wall(2, 1, Side::Front), 100.0);
        assert_eq!(front.transform.position.x, 300.0);
    }

    #[test]
    fn walls_span_floor_to_ceiling() {
        let b = BoxWallBuilder::default();
        for side in Side::ALL {
            let node = b.build(&wall(0, 0, side), 100.0);
            let t = node.transform;
            let bottom = t.position.y - t.scale.y / 2.0;
            let top = t.position.y + t.scale.y / 2.0;
            assert!((bottom + 50.0).abs() < 1e-4);
            assert!((top - 100.0).abs() < 1e-4);
            assert_eq!(node.kind, NodeKind::Wall);
            assert_eq!(node.texture_id, "wall");
        }
    }
}
