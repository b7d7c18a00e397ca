use eframe::egui::{Vec2, vec2};

use crate::layout::LayoutProvider;
use crate::playlist::PlaylistGraph;
use crate::util::stable_pair;

/// Per-node kinematics, in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeState {
    /// Spring anchor. Only moves when a drag is dropped.
    pub rest: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl NodeState {
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            rest: position,
            position,
            velocity: Vec2::ZERO,
        }
    }
}

/// The immutable graph together with the mutable state of every node,
/// index-aligned with `graph.nodes`.
pub struct Scene {
    pub graph: PlaylistGraph,
    pub nodes: Vec<NodeState>,
}

impl Scene {
    pub fn new(graph: PlaylistGraph, positions: &[Vec2]) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let position = positions.get(index).copied().unwrap_or(Vec2::ZERO);
                let (vx, vy) = stable_pair(&format!("{}#velocity", node.id));
                NodeState {
                    velocity: vec2(vx, vy),
                    ..NodeState::at_rest(position)
                }
            })
            .collect();

        Self { graph, nodes }
    }

    pub fn from_layout(graph: PlaylistGraph, provider: &dyn LayoutProvider) -> Self {
        let positions = provider.place(&graph);
        Self::new(graph, &positions)
    }

    pub fn translate(&mut self, index: usize, delta: Vec2) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.position += delta;
        }
    }

    pub fn halt(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.velocity = Vec2::ZERO;
        }
    }

    /// Makes the node's current position its new equilibrium.
    pub fn commit_rest(&mut self, index: usize) -> Option<Vec2> {
        let node = self.nodes.get_mut(index)?;
        node.rest = node.position;
        node.velocity = Vec2::ZERO;
        Some(node.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CircleLayout;
    use crate::playlist::{DanglingEdgePolicy, graph_from_str};

    fn two_nodes() -> PlaylistGraph {
        graph_from_str(
            r#"{
                "nodes": [
                    {"id": "a", "label": "A", "type": "artist"},
                    {"id": "b", "label": "B", "type": "genre"}
                ],
                "edges": [{"source": "a", "target": "b", "relation": "belongs_to"}]
            }"#,
            DanglingEdgePolicy::Reject,
        )
        .expect("two node graph")
    }

    #[test]
    fn initial_state_rests_at_layout_position_with_small_jitter() {
        let scene = Scene::from_layout(two_nodes(), &CircleLayout { scale: 30.0 });

        assert_eq!(scene.nodes.len(), 2);
        for node in &scene.nodes {
            assert_eq!(node.rest, node.position);
            assert!(node.velocity.x.abs() <= 1.0 && node.velocity.y.abs() <= 1.0);
        }
        assert!((scene.nodes[1].position - vec2(-30.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn missing_layout_positions_default_to_origin() {
        let scene = Scene::new(two_nodes(), &[vec2(5.0, 5.0)]);
        assert_eq!(scene.nodes[1].position, Vec2::ZERO);
    }

    #[test]
    fn commit_rest_moves_anchor_and_stops_node() {
        let mut scene = Scene::new(two_nodes(), &[Vec2::ZERO, vec2(100.0, 0.0)]);
        scene.translate(0, vec2(7.0, -3.0));

        assert_eq!(scene.commit_rest(0), Some(vec2(7.0, -3.0)));
        assert_eq!(scene.nodes[0].velocity, Vec2::ZERO);
        assert_eq!(scene.commit_rest(9), None);
    }
}
