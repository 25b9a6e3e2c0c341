use mazen_common::Transform;
use mazen_layout::{SurfaceKind, SurfacePlacement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Wall,
    Floor,
    Ceiling,
}

/// A renderable element of the enclosure.
///
/// The transform places a unit cube centred on the origin; renderers that
/// draw planes instead use the X/Y scale as the plane extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub transform: Transform,
    pub texture_id: String,
}

impl SceneNode {
    pub fn from_surface(surface: &SurfacePlacement) -> Self {
        let kind = match surface.kind {
            SurfaceKind::Floor => NodeKind::Floor,
            SurfaceKind::Ceiling => NodeKind::Ceiling,
        };
        Self {
            kind,
            transform: surface.transform,
            texture_id: surface.texture_id.clone(),
        }
    }
}

/// Scene graph: every node the renderer should draw, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    pub fn iter_kind(&self, kind: NodeKind) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazen_common::GridSpec;
    use mazen_layout::{ceiling_placement, floor_placement};

    #[test]
    fn surfaces_become_nodes() {
        let grid = GridSpec::new(3, 2, 100.0);
        let floor = SceneNode::from_surface(&floor_placement(&grid).unwrap());
        let ceiling = SceneNode::from_surface(&ceiling_placement(&grid).unwrap());
        assert_eq!(floor.kind, NodeKind::Floor);
        assert_eq!(floor.texture_id, "floor");
        assert_eq!(ceiling.kind, NodeKind::Ceiling);
    }

    #[test]
    fn counts_by_kind() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        for kind in [NodeKind::Wall, NodeKind::Wall, NodeKind::Floor] {
            scene.add(SceneNode {
                kind,
                transform: Transform::default(),
                texture_id: "t".into(),
            });
        }
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.count(NodeKind::Wall), 2);
        assert_eq!(scene.count(NodeKind::Ceiling), 0);
        assert_eq!(scene.iter_kind(NodeKind::Floor).count(), 1);
    }
}
