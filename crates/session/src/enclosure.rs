use mazen_common::{GridSpec, ViewportContext, WallPlacement};
use mazen_input::{NavigationConfig, OrbitConfig};
use mazen_layout::{
    LayoutError, SurfacePlacement, ceiling_placement, floor_placement, generate_boundary_walls,
};
use mazen_render::{BoxWallBuilder, HudWriter, Scene, SceneNode, WallMeshBuilder};

use crate::error::SessionError;
use crate::session::Session;
use crate::viewer::{Viewer, ViewerDescriptor};

/// A bordered room on a grid, ready for a viewer.
///
/// Built once from a `GridSpec`; the grid and the placed walls never change
/// afterwards. Attach a viewer, then start a session to begin navigating.
#[derive(Debug, Clone)]
pub struct Enclosure {
    grid: GridSpec,
    walls: Vec<WallPlacement>,
    scene: Scene,
    viewer: Option<Viewer>,
    viewport: ViewportContext,
    navigation: NavigationConfig,
    orbit: OrbitConfig,
}

/// Build a complete enclosure: ceiling, floor, then the boundary walls.
pub fn build_enclosure(grid: GridSpec) -> Result<Enclosure, SessionError> {
    Enclosure::build(grid)
}

impl Enclosure {
    /// An enclosure with nothing attached yet.
    pub fn empty(grid: GridSpec) -> Result<Self, SessionError> {
        if !grid.is_valid() {
            return Err(LayoutError::InvalidGrid {
                length: grid.length,
                width: grid.width,
                cell_size: grid.cell_size,
            }
            .into());
        }
        Ok(Self {
            grid,
            walls: Vec::new(),
            scene: Scene::new(),
            viewer: None,
            viewport: ViewportContext::default(),
            navigation: NavigationConfig::default(),
            orbit: OrbitConfig::default(),
        })
    }

    pub fn build(grid: GridSpec) -> Result<Self, SessionError> {
        Self::build_with(grid, &BoxWallBuilder::default())
    }

    /// Like [`build`](Self::build) with a caller-supplied wall builder.
    pub fn build_with<B: WallMeshBuilder + ?Sized>(
        grid: GridSpec,
        builder: &B,
    ) -> Result<Self, SessionError> {
        let mut enclosure = Self::empty(grid)?;
        enclosure.attach_ceiling(&ceiling_placement(&grid)?);
        enclosure.attach_floor(&floor_placement(&grid)?);
        let walls = generate_boundary_walls(&grid)?;
        enclosure.attach_walls(&walls, builder);
        tracing::debug!(
            length = grid.length,
            width = grid.width,
            cell_size = grid.cell_size,
            nodes = enclosure.scene.len(),
            "enclosure built"
        );
        Ok(enclosure)
    }

    /// Viewport used for the viewer's camera and turn math.
    pub fn with_viewport(mut self, viewport: ViewportContext) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitConfig) -> Self {
        self.orbit = orbit;
        self
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

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn attach_walls<B: WallMeshBuilder + ?Sized>(
        &mut self,
        placements: &[WallPlacement],
        builder: &B,
    ) {
        for placement in placements {
            self.scene.add(builder.build(placement, self.grid.cell_size));
            self.walls.push(placement.clone());
        }
    }

    pub fn attach_floor(&mut self, floor: &SurfacePlacement) {
        self.scene.add(SceneNode::from_surface(floor));
    }

    pub fn attach_ceiling(&mut self, ceiling: &SurfacePlacement) {
        self.scene.add(SceneNode::from_surface(ceiling));
    }

    /// Attach (or replace) the viewer. Its camera starts at the centre of the
    /// descriptor's cell.
    pub fn attach_viewer(&mut self, descriptor: ViewerDescriptor) -> &Viewer {
        if !self.grid.contains(descriptor.cell) {
            tracing::warn!(cell = ?descriptor.cell, "viewer attached outside the grid");
        }
        tracing::debug!(name = %descriptor.name, cell = ?descriptor.cell, "viewer attached");
        self.viewer.insert(Viewer::new(
            descriptor,
            &self.grid,
            &self.viewport,
            self.navigation,
            self.orbit,
        ))
    }

    /// Register input handling, draw the player label and arm the frame loop.
    ///
    /// Fails with [`SessionError::NoViewerAttached`] before touching `hud`
    /// when no viewer has been attached.
    pub fn start_session(self, hud: &mut dyn HudWriter) -> Result<Session, SessionError> {
        let Some(viewer) = self.viewer else {
            return Err(SessionError::NoViewerAttached);
        };
        Ok(Session::start(
            self.grid,
            self.walls,
            self.scene,
            viewer,
            self.viewport,
            hud,
        ))
    }
}
