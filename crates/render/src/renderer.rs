use crate::camera::ViewerCamera;
use crate::scene::{NodeKind, Scene};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and the camera, then produces output for
/// one frame. It never changes the camera or the navigation state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `scene` as seen from `camera`.
    fn render(&mut self, scene: &Scene, camera: &ViewerCamera) -> Self::Output;
}

/// Text renderer for the CLI and tests.
///
/// Produces a human-readable description of each frame.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, scene: &Scene, camera: &ViewerCamera) -> String {
        self.frames += 1;
        let p = camera.position;
        let f = camera.forward();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame {} (walls={}, floors={}, ceilings={}) ===\n",
            self.frames,
            scene.count(NodeKind::Wall),
            scene.count(NodeKind::Floor),
            scene.count(NodeKind::Ceiling),
        ));
        out.push_str(&format!(
            "Camera: pos=({:.1}, {:.1}, {:.1}) forward=({:.3}, {:.3}, {:.3}) fov={:.0}\n",
            p.x,
            p.y,
            p.z,
            f.x,
            f.y,
            f.z,
            camera.fov.to_degrees()
        ));
        out
    }
}
