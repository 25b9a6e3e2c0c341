use mazen_common::{GridSpec, ViewportContext, WallPlacement};
use mazen_input::NavKey;
use mazen_render::{HudLabel, HudWriter, Renderer, Scene};

use crate::config::ScriptStep;
use crate::scheduler::FrameScheduler;
use crate::viewer::Viewer;

/// HUD label id carrying the viewer's name.
pub const PLAYER_NAME_LABEL: &str = "player-name";

/// An input event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    KeyDown(NavKey),
    /// A raw key code; unmapped codes are ignored.
    KeyCode(u32),
    PointerMove { x: f32 },
    Resize(ViewportContext),
}

/// A running navigation session.
///
/// The host feeds key, pointer and resize events in any order and calls
/// [`tick`](Self::tick) once per display frame. Everything runs on the
/// host's thread; no two calls overlap.
#[derive(Debug)]
pub struct Session {
    grid: GridSpec,
    walls: Vec<WallPlacement>,
    scene: Scene,
    viewer: Viewer,
    viewport: ViewportContext,
    scheduler: FrameScheduler,
}

impl Session {
    pub(crate) fn start(
        grid: GridSpec,
        walls: Vec<WallPlacement>,
        scene: Scene,
        viewer: Viewer,
        viewport: ViewportContext,
        hud: &mut dyn HudWriter,
    ) -> Self {
        hud.draw(HudLabel::new(PLAYER_NAME_LABEL, viewer.name()));

        let mut scheduler = FrameScheduler::new();
        scheduler.start();

        tracing::info!(
            viewer = %viewer.name(),
            walls = walls.len(),
            width = viewport.width,
            height = viewport.height,
            "session started"
        );

        Self {
            grid,
            walls,
            scene,
            viewer,
            viewport,
            scheduler,
        }
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn walls(&self) -> &[WallPlacement] {
        &self.walls
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn viewport(&self) -> &ViewportContext {
        &self.viewport
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Whether the host should schedule another frame.
    pub fn wants_frame(&self) -> bool {
        self.scheduler.wants_frame()
    }

    pub fn on_key_down(&mut self, key: NavKey) {
        if !self.is_running() {
            return;
        }
        self.viewer.on_key_down(key);
    }

    /// Returns true when the code mapped to a navigation key and the viewer
    /// moved. A stopped session returns false for every code.
    pub fn on_key_code(&mut self, code: u32) -> bool {
        if !self.is_running() {
            return false;
        }
        match NavKey::from_key_code(code) {
            Some(key) => {
                self.on_key_down(key);
                true
            }
            None => {
                tracing::trace!(code, "ignoring unmapped key code");
                false
            }
        }
    }

    pub fn on_pointer_move(&mut self, x: f32) {
        if !self.is_running() {
            return;
        }
        self.viewer.on_pointer_move(x, &self.viewport);
    }

    pub fn resize(&mut self, viewport: ViewportContext) {
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.viewer.resize(&viewport);
    }

    pub fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::KeyDown(key) => self.on_key_down(key),
            HostEvent::KeyCode(code) => {
                self.on_key_code(code);
            }
            HostEvent::PointerMove { x } => self.on_pointer_move(x),
            HostEvent::Resize(viewport) => self.resize(viewport),
        }
    }

    /// Run one frame through the scheduler. `None` once stopped.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Option<R::Output> {
        self.scheduler
            .tick(&mut self.viewer, &self.scene, &self.viewport, renderer)
    }

    /// Apply one scripted step, collecting the output of any frames it runs.
    pub fn apply_step<R: Renderer + ?Sized>(
        &mut self,
        step: &ScriptStep,
        renderer: &mut R,
    ) -> Vec<R::Output> {
        match *step {
            ScriptStep::Key(key) => self.dispatch(HostEvent::KeyDown(key)),
            ScriptStep::KeyCode(code) => self.dispatch(HostEvent::KeyCode(code)),
            ScriptStep::Pointer(x) => self.dispatch(HostEvent::PointerMove { x }),
            ScriptStep::Resize(viewport) => self.dispatch(HostEvent::Resize(viewport)),
            ScriptStep::Frames(n) => {
                return (0..n).map_while(|_| self.tick(renderer)).collect();
            }
        }
        Vec::new()
    }

    /// Stop the frame loop and detach input handling.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }
}
