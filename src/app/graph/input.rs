use eframe::egui::{self, Key, PointerButton, Rect, Ui};

use super::interaction::InputEvent;

/// Scroll distance, in points, that counts as one wheel notch.
const SCROLL_POINTS_PER_NOTCH: f32 = 40.0;

/// Translates this frame's raw egui input into controller events, in arrival
/// order. Presses only count inside `canvas`; moves and releases are always
/// forwarded so a gesture can finish outside it. The frame's accumulated
/// wheel delta comes last.
pub(in crate::app) fn collect_input_events(
    ui: &Ui,
    canvas: Rect,
    canvas_hovered: bool,
) -> Vec<InputEvent> {
    ui.input(|input| {
        let mut events = Vec::new();

        for event in &input.events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } if canvas.contains(*pos) => events.push(InputEvent::PointerDown(*pos)),
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => events.push(InputEvent::PointerUp(*pos)),
                egui::Event::PointerMoved(pos) => events.push(InputEvent::PointerMove(*pos)),
                egui::Event::Key {
                    key: Key::Escape | Key::Q,
                    pressed: true,
                    repeat: false,
                    ..
                } => events.push(InputEvent::Quit),
                _ => {}
            }
        }

        events.extend(wheel_event(input.raw_scroll_delta.y, canvas_hovered));
        events
    })
}

fn wheel_event(scroll_points: f32, canvas_hovered: bool) -> Option<InputEvent> {
    (canvas_hovered && scroll_points.abs() > f32::EPSILON)
        .then(|| InputEvent::Wheel(scroll_points / SCROLL_POINTS_PER_NOTCH))
}
