use glam::Vec3;
use mazen_common::{CellCoord, GridSpec, ViewportContext};
use mazen_input::{
    NavKey, NavigationConfig, NavigationController, OrbitConfig, OrbitLookController,
};
use mazen_layout::cell_center;
use mazen_render::ViewerCamera;
use serde::{Deserialize, Serialize};

/// Who is exploring the enclosure and which cell they start in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerDescriptor {
    pub name: String,
    pub cell: CellCoord,
}

impl ViewerDescriptor {
    pub fn new(name: impl Into<String>, cell: CellCoord) -> Self {
        Self {
            name: name.into(),
            cell,
        }
    }
}

impl Default for ViewerDescriptor {
    fn default() -> Self {
        Self {
            name: "player".into(),
            cell: CellCoord::new(0, 0),
        }
    }
}

/// Read-only snapshot of the viewer for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    /// Cell currently containing the camera (may lie outside the grid).
    pub position_cell: CellCoord,
    /// Accumulated yaw in radians.
    pub yaw: f32,
    pub orbit_target: Vec3,
}

/// The viewer attached to an enclosure: camera plus the controllers that
/// move and turn it.
#[derive(Debug, Clone)]
pub struct Viewer {
    descriptor: ViewerDescriptor,
    cell_size: f32,
    pub(crate) camera: ViewerCamera,
    pub(crate) orbit: OrbitLookController,
    pub(crate) orbit_target: Vec3,
    navigation: NavigationController,
}

impl Viewer {
    /// Place the camera at the centre of the descriptor's cell, at eye
    /// level (y = 0), facing yaw 0.
    pub(crate) fn new(
        descriptor: ViewerDescriptor,
        grid: &GridSpec,
        viewport: &ViewportContext,
        navigation: NavigationConfig,
        orbit: OrbitConfig,
    ) -> Self {
        let center = cell_center(descriptor.cell, grid.cell_size);
        let camera = ViewerCamera::new(Vec3::new(center.x, 0.0, center.y), viewport.aspect());
        let orbit = OrbitLookController::new(orbit, viewport);
        let orbit_target = orbit.orbit_target(viewport);
        Self {
            descriptor,
            cell_size: grid.cell_size,
            camera,
            orbit,
            orbit_target,
            navigation: NavigationController::new(navigation),
        }
    }

    pub fn descriptor(&self) -> &ViewerDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn camera(&self) -> &ViewerCamera {
        &self.camera
    }

    pub fn orbit_target(&self) -> Vec3 {
        self.orbit_target
    }

    pub fn yaw(&self) -> f32 {
        self.orbit.yaw()
    }

    /// Yaw wrapped into `[0, 2π)`.
    pub fn heading(&self) -> f32 {
        self.orbit.heading()
    }

    pub fn state(&self) -> ViewerState {
        let p = self.camera.position;
        ViewerState {
            position_cell: CellCoord::new(
                (p.x / self.cell_size).floor() as i32,
                (p.z / self.cell_size).floor() as i32,
            ),
            yaw: self.orbit.yaw(),
            orbit_target: self.orbit_target,
        }
    }

    /// Move the camera one step along its local axes.
    pub(crate) fn on_key_down(&mut self, key: NavKey) {
        let local = self.navigation.on_key_down(key);
        self.camera.translate_local(local);
        tracing::trace!(?key, position = ?self.camera.position, "viewer moved");
    }

    /// Turn from a pointer move. The orbit target is refreshed on the next
    /// frame tick.
    pub(crate) fn on_pointer_move(&mut self, x: f32, viewport: &ViewportContext) {
        let yaw = self.orbit.on_pointer_move(x, viewport);
        tracing::trace!(x, yaw, "pointer moved");
    }

    pub(crate) fn resize(&mut self, viewport: &ViewportContext) {
        self.camera.aspect = viewport.aspect();
        self.orbit_target = self.orbit.orbit_target(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer_at(cell: CellCoord) -> Viewer {
        Viewer::new(
            ViewerDescriptor::new("Ada", cell),
            &GridSpec::new(3, 2, 100.0),
            &ViewportContext::new(1280.0, 720.0),
            NavigationConfig::default(),
            OrbitConfig::default(),
        )
    }

    #[test]
    fn camera_starts_in_cell_center() {
        let v = viewer_at(CellCoord::new(2, 1));
        assert_eq!(v.camera().position, Vec3::new(250.0, 0.0, 150.0));
        assert_eq!(v.state().position_cell, CellCoord::new(2, 1));
        assert_eq!(v.name(), "Ada");
    }

    #[test]
    fn initial_orbit_target_is_on_positive_x() {
        let v = viewer_at(CellCoord::new(0, 0));
        let state = v.state();
        assert_eq!(state.yaw, 0.0);
        assert!((state.orbit_target.x - 32.0 * 640.0).abs() < 1e-2);
        assert_eq!(state.orbit_target.y, 0.0);
        assert!(state.orbit_target.z.abs() < 1e-2);
    }

    #[test]
    fn key_moves_camera_and_updates_cell() {
        let mut v = viewer_at(CellCoord::new(0, 0));
        // identity orientation looks down -Z; back key steps +Z
        for _ in 0..2 {
            v.on_key_down(NavKey::Back);
        }
        assert_eq!(v.camera().position, Vec3::new(50.0, 0.0, 110.0));
        assert_eq!(v.state().position_cell, CellCoord::new(0, 1));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut v = viewer_at(CellCoord::new(0, 0));
        v.resize(&ViewportContext::new(800.0, 800.0));
        assert_eq!(v.camera().aspect, 1.0);
        assert!((v.orbit_target().x - 32.0 * 400.0).abs() < 1e-2);
    }
}
