use eframe::egui::{Pos2, Vec2};
use tracing::{debug, info};

use super::super::config::ZoomConfig;
use super::super::scene::{NodeState, Scene};
use super::super::viewport::Viewport;

/// Device-independent input, in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) enum InputEvent {
    PointerDown(Pos2),
    PointerMove(Pos2),
    PointerUp(Pos2),
    /// Wheel notches; positive zooms in.
    Wheel(f32),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) enum InteractionMode {
    Idle,
    Dragging { node: usize, anchor_world: Vec2 },
    Panning { last_pointer: Pos2 },
    Quit,
}

impl InteractionMode {
    pub(in crate::app) fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Panning { .. } => "panning",
            Self::Quit => "quitting",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum Flow {
    Continue,
    Quit,
}

pub(in crate::app) struct InputController {
    mode: InteractionMode,
    zoom: ZoomConfig,
    node_radius: f32,
}

impl InputController {
    pub(in crate::app) fn new(zoom: ZoomConfig, node_radius: f32) -> Self {
        Self {
            mode: InteractionMode::Idle,
            zoom,
            node_radius,
        }
    }

    pub(in crate::app) fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub(in crate::app) fn dragged_node(&self) -> Option<usize> {
        match self.mode {
            InteractionMode::Dragging { node, .. } => Some(node),
            _ => None,
        }
    }

    pub(in crate::app) fn handle(
        &mut self,
        event: InputEvent,
        scene: &mut Scene,
        viewport: &mut Viewport,
    ) -> Flow {
        if self.mode == InteractionMode::Quit {
            return Flow::Quit;
        }

        match (self.mode, event) {
            (_, InputEvent::Quit) => {
                info!("quit requested");
                self.mode = InteractionMode::Quit;
                return Flow::Quit;
            }
            (_, InputEvent::Wheel(notches)) => {
                viewport.zoom_by(notches, self.zoom);
            }
            (InteractionMode::Idle, InputEvent::PointerDown(pointer)) => {
                self.mode =
                    match node_under_pointer(&scene.nodes, viewport, pointer, self.node_radius) {
                        Some(node) => {
                            scene.halt(node);
                            InteractionMode::Dragging {
                                node,
                                anchor_world: viewport.to_world(pointer),
                            }
                        }
                        None => InteractionMode::Panning {
                            last_pointer: pointer,
                        },
                    };
            }
            (InteractionMode::Dragging { node, anchor_world }, InputEvent::PointerMove(pointer)) => {
                let world = viewport.to_world(pointer);
                scene.translate(node, world - anchor_world);
                self.mode = InteractionMode::Dragging {
                    node,
                    anchor_world: world,
                };
            }
            (InteractionMode::Panning { last_pointer }, InputEvent::PointerMove(pointer)) => {
                viewport.pan_by(pointer - last_pointer);
                self.mode = InteractionMode::Panning {
                    last_pointer: pointer,
                };
            }
            (InteractionMode::Dragging { node, .. }, InputEvent::PointerUp(_)) => {
                if let Some(rest) = scene.commit_rest(node) {
                    debug!(node, x = rest.x, y = rest.y, "dropped node at new rest position");
                }
                self.mode = InteractionMode::Idle;
            }
            (InteractionMode::Panning { .. }, InputEvent::PointerUp(_)) => {
                self.mode = InteractionMode::Idle;
            }
            _ => {}
        }

        Flow::Continue
    }
}

/// Node whose screen-space circle contains `pointer`. Overlaps resolve to the
/// node drawn last, i.e. the one on top.
pub(in crate::app) fn node_under_pointer(
    nodes: &[NodeState],
    viewport: &Viewport,
    pointer: Pos2,
    radius: f32,
) -> Option<usize> {
    nodes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, node)| viewport.to_screen(node.position).distance(pointer) <= radius)
        .map(|(index, _)| index)
}
