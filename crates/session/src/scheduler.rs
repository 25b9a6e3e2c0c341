use mazen_common::ViewportContext;
use mazen_render::{Renderer, Scene};

use crate::viewer::Viewer;

/// Host-driven frame loop.
///
/// The host calls [`tick`](Self::tick) once per display frame while
/// [`wants_frame`](Self::wants_frame) is true. Each tick re-arms the request
/// for the next one, so the loop runs until [`stop`](Self::stop).
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    running: bool,
    frame_requested: bool,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the loop and request the first frame.
    pub fn start(&mut self) {
        self.running = true;
        self.frame_requested = true;
    }

    /// Stop the loop. Further ticks are no-ops and no frame is requested.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!(frames = self.frames, "frame loop stopped");
        }
        self.running = false;
        self.frame_requested = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the host should deliver another frame.
    pub fn wants_frame(&self) -> bool {
        self.running && self.frame_requested
    }

    /// Frames ticked since start.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Run one frame: edge-hover turn, orbit target, re-arm, look-at, render.
    ///
    /// Returns `None` without touching anything once stopped.
    pub fn tick<R: Renderer + ?Sized>(
        &mut self,
        viewer: &mut Viewer,
        scene: &Scene,
        viewport: &ViewportContext,
        renderer: &mut R,
    ) -> Option<R::Output> {
        if !self.running {
            return None;
        }
        self.frame_requested = false;
        let _span = tracing::info_span!("frame", n = self.frames + 1).entered();

        let yaw = viewer.orbit.on_frame_tick(viewport);
        let target = viewer.orbit.orbit_target(viewport);
        viewer.orbit_target = target;

        self.frame_requested = true;
        self.frames += 1;

        if !viewer.camera.look_at(target) {
            tracing::debug!(?target, "camera sits on orbit target; orientation kept");
        }
        tracing::trace!(yaw, ?target, "frame prepared");

        Some(renderer.render(scene, &viewer.camera))
    }
}
