use std::collections::VecDeque;

use eframe::egui::Context;

mod config;
mod graph;
mod physics;
mod render;
mod render_utils;
mod scene;
mod ui;
mod viewport;

pub use config::{RenderConfig, SpringConfig, ViewerConfig, ZoomConfig};
pub use scene::Scene;

use graph::InputController;
use physics::StepClock;
use viewport::Viewport;

pub struct GraphViewerApp {
    model: ViewModel,
}

/// Single owner of all per-frame state; only the egui frame callback touches it.
struct ViewModel {
    document: String,
    scene: Scene,
    viewport: Viewport,
    viewport_centered: bool,
    controller: InputController,
    clock: StepClock,
    config: ViewerConfig,
    settling: bool,
    quit_requested: bool,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
    visible_node_count: usize,
    visible_edge_count: usize,
}

impl GraphViewerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        scene: Scene,
        config: ViewerConfig,
        document: String,
    ) -> Self {
        Self {
            model: ViewModel::new(scene, config, document),
        }
    }
}

impl eframe::App for GraphViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}
