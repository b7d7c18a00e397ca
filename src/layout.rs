use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use crate::playlist::PlaylistGraph;
use crate::util::stable_pair;

/// Produces the starting world positions for every node, in node-set order.
pub trait LayoutProvider {
    fn name(&self) -> &'static str;

    fn place(&self, graph: &PlaylistGraph) -> Vec<Vec2>;
}

/// Fruchterman-Reingold style spring layout seeded from stable id hashes.
#[derive(Clone, Copy, Debug)]
pub struct ForceLayout {
    pub iterations: usize,
    pub scale: f32,
}

impl LayoutProvider for ForceLayout {
    fn name(&self) -> &'static str {
        "force"
    }

    fn place(&self, graph: &PlaylistGraph) -> Vec<Vec2> {
        let ids = graph
            .nodes
            .iter()
            .map(|node| node.id.as_str())
            .collect::<Vec<_>>();
        let mut positions = force_layout(&ids, &graph.edge_pairs(), self.iterations);
        rescale(&mut positions, self.scale);
        positions
    }
}

/// Nodes evenly spaced on a circle of radius `scale`.
#[derive(Clone, Copy, Debug)]
pub struct CircleLayout {
    pub scale: f32,
}

impl LayoutProvider for CircleLayout {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn place(&self, graph: &PlaylistGraph) -> Vec<Vec2> {
        let n = graph.node_count();
        if n == 1 {
            return vec![Vec2::ZERO];
        }

        (0..n)
            .map(|index| {
                let angle = (index as f32 / n as f32) * TAU;
                vec2(angle.cos(), angle.sin()) * self.scale
            })
            .collect()
    }
}

fn force_layout(node_ids: &[&str], edges: &[(usize, usize)], iterations: usize) -> Vec<Vec2> {
    let n = node_ids.len();
    if n == 0 {
        return Vec::new();
    }

    let mut positions = node_ids
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let angle = (index as f32 / n as f32) * TAU;
            let (jx, jy) = stable_pair(id);
            vec2(angle.cos(), angle.sin()) + vec2(jx, jy) * 0.25
        })
        .collect::<Vec<_>>();

    if n == 1 {
        return positions;
    }

    // Unit-area layout; the caller rescales afterwards.
    let k = (1.0 / n as f32).sqrt();
    let mut temperature = 0.1_f32;
    let cooling = temperature / (iterations.max(1) as f32 + 1.0);

    for _ in 0..iterations {
        let mut disp = vec![Vec2::ZERO; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.length().max(0.01);
                let direction = delta / distance;
                let force = (k * k) / distance;
                disp[i] += direction * force;
                disp[j] -= direction * force;
            }
        }

        for &(from, to) in edges {
            if from >= n || to >= n || from == to {
                continue;
            }

            let delta = positions[from] - positions[to];
            let distance = delta.length().max(0.01);
            let direction = delta / distance;
            let force = (distance * distance) / k;
            disp[from] -= direction * force;
            disp[to] += direction * force;
        }

        for i in 0..n {
            let d = disp[i];
            let length = d.length();
            if length > 0.0 {
                positions[i] += d / length * length.min(temperature);
            }
        }

        temperature -= cooling;
        if temperature <= 0.0 {
            break;
        }
    }

    positions
}

/// Centers the layout on the origin and scales it so that the largest absolute
/// coordinate equals `scale`.
pub fn rescale(positions: &mut [Vec2], scale: f32) {
    if positions.is_empty() {
        return;
    }

    let mut centroid = Vec2::ZERO;
    for position in positions.iter() {
        centroid += *position;
    }
    centroid /= positions.len() as f32;

    let mut extent = 0.0_f32;
    for position in positions.iter_mut() {
        *position -= centroid;
        extent = extent.max(position.x.abs()).max(position.y.abs());
    }

    if extent <= f32::EPSILON {
        return;
    }

    let factor = scale / extent;
    for position in positions.iter_mut() {
        *position *= factor;
    }
}
