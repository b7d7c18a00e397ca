use std::collections::VecDeque;

use eframe::egui::{self, Align, Context, Frame, Layout, ViewportCommand};

use crate::playlist::Category;

use super::super::config::ViewerConfig;
use super::super::graph::InputController;
use super::super::physics::StepClock;
use super::super::render_utils::BACKGROUND_COLOR;
use super::super::scene::Scene;
use super::super::viewport::Viewport;
use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(scene: Scene, config: ViewerConfig, document: String) -> Self {
        Self {
            document,
            scene,
            viewport: Viewport::new(config.zoom),
            viewport_centered: false,
            controller: InputController::new(config.zoom, config.render.node_radius),
            clock: StepClock::new(config.target_fps),
            config,
            settling: true,
            quit_requested: false,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
            visible_node_count: 0,
            visible_edge_count: 0,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.update_fps_counter(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("playlist-graph");
                    ui.separator();
                    ui.label(format!("document: {}", self.document));
                    ui.label(self.graph_summary_text());
                    ui.separator();
                    ui.label(format!("zoom: {:.1}x", self.viewport.zoom));
                    ui.label(format!("mode: {}", self.controller.mode().label()));
                    if self.settling {
                        ui.label("settling");
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.visible_graph_text());
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                        }
                    });
                });
            });

        egui::CentralPanel::default()
            .frame(Frame::NONE.fill(BACKGROUND_COLOR))
            .show(ctx, |ui| self.draw_graph(ui));

        if self.quit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn graph_summary_text(&self) -> String {
        let graph = &self.scene.graph;
        let mut text = format!(
            "nodes: {}  tracks: {}  artists: {}  genres: {}",
            graph.node_count(),
            graph.count_by_category(Category::Track),
            graph.count_by_category(Category::Artist),
            graph.count_by_category(Category::Genre),
        );
        let other = graph.count_by_category(Category::Other);
        if other > 0 {
            text.push_str(&format!("  other: {other}"));
        }
        text.push_str(&format!("  edges: {}", graph.edge_count()));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ZoomConfig;
    use crate::playlist::{DanglingEdgePolicy, PlaylistGraph, graph_from_str};

    fn model_for(graph: PlaylistGraph, config: ViewerConfig) -> ViewModel {
        let positions = vec![eframe::egui::Vec2::ZERO; graph.node_count()];
        ViewModel::new(Scene::new(graph, &positions), config, "test.json".to_owned())
    }

    #[test]
    fn starting_zoom_stays_inside_configured_range() {
        let config = ViewerConfig {
            zoom: ZoomConfig {
                min: 2.0,
                max: 5.0,
                ..ZoomConfig::default()
            },
            ..ViewerConfig::default()
        };
        let model = model_for(PlaylistGraph::default(), config);
        assert_eq!(model.viewport.zoom, 2.0);
    }

    #[test]
    fn summary_counts_every_node_including_other() {
        let graph = graph_from_str(
            r#"{
                "nodes": [
                    {"id": "t1", "label": "One", "type": "track"},
                    {"id": "a1", "label": "Artist", "type": "artist"},
                    {"id": "x1", "label": "Mystery", "type": "podcast"}
                ],
                "edges": [{"source": "t1", "target": "a1", "relation": "created_by"}]
            }"#,
            DanglingEdgePolicy::Reject,
        )
        .expect("graph");
        let model = model_for(graph, ViewerConfig::default());
        assert_eq!(
            model.graph_summary_text(),
            "nodes: 3  tracks: 1  artists: 1  genres: 0  other: 1  edges: 1"
        );
    }

    #[test]
    fn summary_omits_other_when_absent() {
        let model = model_for(PlaylistGraph::default(), ViewerConfig::default());
        assert_eq!(
            model.graph_summary_text(),
            "nodes: 0  tracks: 0  artists: 0  genres: 0  edges: 0"
        );
    }
}
