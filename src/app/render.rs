use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2, vec2};

use crate::util::truncate_label;

use super::config::RenderConfig;
use super::render_utils::{
    DRAG_RING_COLOR, EDGE_COLOR, LABEL_COLOR, category_color, circle_visible, edge_visible,
};
use super::scene::Scene;
use super::viewport::Viewport;

const LABEL_OFFSET: Vec2 = vec2(10.0, 0.0);

pub(in crate::app) struct NodeSprite {
    pub(in crate::app) index: usize,
    pub(in crate::app) center: Pos2,
    pub(in crate::app) color: Color32,
}

pub(in crate::app) struct LabelSprite<'a> {
    pub(in crate::app) origin: Pos2,
    pub(in crate::app) text: &'a str,
}

/// Everything one frame draws, back to front: edges, then nodes, then labels.
pub(in crate::app) struct FramePlan<'a> {
    pub(in crate::app) edges: Vec<[Pos2; 2]>,
    pub(in crate::app) nodes: Vec<NodeSprite>,
    pub(in crate::app) labels: Vec<LabelSprite<'a>>,
}

pub(in crate::app) fn plan_frame<'a>(
    scene: &'a Scene,
    viewport: &Viewport,
    clip: Rect,
    render: RenderConfig,
) -> FramePlan<'a> {
    let screen_positions = scene
        .nodes
        .iter()
        .map(|node| viewport.to_screen(node.position))
        .collect::<Vec<_>>();

    let mut edges = Vec::with_capacity(scene.graph.edge_count());
    for edge in &scene.graph.edges {
        let (Some(&start), Some(&end)) = (
            screen_positions.get(edge.source),
            screen_positions.get(edge.target),
        ) else {
            continue;
        };
        if edge_visible(clip, start, end, 1.0) {
            edges.push([start, end]);
        }
    }

    let mut nodes = Vec::with_capacity(screen_positions.len());
    let mut labels = Vec::with_capacity(screen_positions.len());
    for (index, (record, &center)) in scene.graph.nodes.iter().zip(&screen_positions).enumerate() {
        if !circle_visible(clip, center, render.node_radius) {
            continue;
        }

        nodes.push(NodeSprite {
            index,
            center,
            color: category_color(record.category),
        });
        labels.push(LabelSprite {
            origin: center + LABEL_OFFSET,
            text: truncate_label(&record.label, render.label_chars),
        });
    }

    FramePlan {
        edges,
        nodes,
        labels,
    }
}

pub(in crate::app) fn paint_frame(
    painter: &Painter,
    plan: &FramePlan<'_>,
    render: RenderConfig,
    dragged: Option<usize>,
) {
    let edge_stroke = Stroke::new(1.0, EDGE_COLOR);
    for segment in &plan.edges {
        painter.line_segment(*segment, edge_stroke);
    }

    for sprite in &plan.nodes {
        painter.circle_filled(sprite.center, render.node_radius, sprite.color);
        if dragged == Some(sprite.index) {
            painter.circle_stroke(
                sprite.center,
                render.node_radius + 2.0,
                Stroke::new(1.5, DRAG_RING_COLOR),
            );
        }
    }

    let font = FontId::proportional(render.label_font_size);
    for label in &plan.labels {
        painter.text(
            label.origin,
            Align2::LEFT_TOP,
            label.text,
            font.clone(),
            LABEL_COLOR,
        );
    }
}

/// One-line description of a node for the hover readout.
pub(in crate::app) fn hover_caption(scene: &Scene, index: usize) -> Option<String> {
    let record = scene.graph.nodes.get(index)?;
    let (degree, relations) = scene.graph.links_of(index);
    let mut caption = format!(
        "{}  |  {}  |  links {}",
        record.label,
        record.category.label(),
        degree
    );
    if !relations.is_empty() {
        caption.push_str(&format!(" ({})", relations.join(", ")));
    }
    Some(caption)
}
