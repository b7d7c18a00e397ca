use eframe::egui::{self, Align2, Color32, FontId, Sense, Ui, vec2};

use super::super::ViewModel;
use super::super::physics::step_springs;
use super::super::render::{hover_caption, paint_frame, plan_frame};
use super::super::render_utils::draw_background;
use super::input::collect_input_events;
use super::interaction::{Flow, node_under_pointer};

impl ViewModel {
    /// One frame: input, then physics, then a full redraw.
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        if !self.viewport_centered {
            self.viewport.center_on(rect.center());
            self.viewport_centered = true;
        }

        for event in collect_input_events(ui, rect, response.hovered()) {
            if self
                .controller
                .handle(event, &mut self.scene, &mut self.viewport)
                == Flow::Quit
            {
                self.quit_requested = true;
                break;
            }
        }

        let elapsed_secs = ui.input(|input| input.stable_dt);
        let steps = self.clock.advance(elapsed_secs);
        let dragged = self.controller.dragged_node();
        for _ in 0..steps {
            self.settling = step_springs(&mut self.scene.nodes, dragged, self.config.spring);
        }

        let render = self.config.render;
        let plan = plan_frame(&self.scene, &self.viewport, rect, render);
        draw_background(&painter, rect);
        paint_frame(&painter, &plan, render, dragged);
        self.visible_node_count = plan.nodes.len();
        self.visible_edge_count = plan.edges.len();

        let hovered = dragged.or_else(|| {
            response.hover_pos().and_then(|pointer| {
                node_under_pointer(&self.scene.nodes, &self.viewport, pointer, render.node_radius)
            })
        });

        if dragged.is_some() {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::Grabbing);
        } else if hovered.is_some() {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::PointingHand);
        }

        if let Some(caption) = hovered.and_then(|index| hover_caption(&self.scene, index)) {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                caption,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        ui.ctx().request_repaint_after(self.clock.step_interval());
    }
}
