//! Rendering Adapter: renderer-agnostic scene, camera and collaborator traits.
//!
//! # Invariants
//! - Renderers read the scene and camera; they never mutate navigation state.
//! - Camera translation is always relative to the camera's own axes.
//!
//! The concrete GPU backend lives in `mazen-render-wgpu`; the debug text
//! renderer here serves the CLI and tests.

mod camera;
mod hud;
mod renderer;
mod scene;
mod walls;

pub use camera::ViewerCamera;
pub use hud::{HudLabel, HudWriter, LabelBoard};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{NodeKind, Scene, SceneNode};
pub use walls::{BoxWallBuilder, WallMeshBuilder};

pub fn crate_info() -> &'static str {
    "mazen-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
