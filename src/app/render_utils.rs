use eframe::egui::{Color32, Painter, Pos2, Rect};

use crate::playlist::Category;

pub(super) const BACKGROUND_COLOR: Color32 = Color32::BLACK;
pub(super) const EDGE_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
pub(super) const LABEL_COLOR: Color32 = Color32::WHITE;
pub(super) const DRAG_RING_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

pub(super) fn category_color(category: Category) -> Color32 {
    match category {
        Category::Track => Color32::from_rgb(29, 185, 84),
        Category::Artist => Color32::from_rgb(179, 179, 179),
        Category::Genre => Color32::from_rgb(30, 215, 96),
        Category::Other => Color32::WHITE,
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);
}

pub(super) fn circle_visible(rect: Rect, center: Pos2, radius: f32) -> bool {
    rect.expand(radius).contains(center)
}

/// Clips the segment `start..end` against `rect` grown by `padding`, keeping
/// the parameter window `[entry, exit]` of the part that lies inside. The edge
/// is visible while that window stays non-empty.
pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let bounds = rect.expand(padding);
    let travel = end - start;
    let slabs = [
        (-travel.x, start.x - bounds.left()),
        (travel.x, bounds.right() - start.x),
        (-travel.y, start.y - bounds.top()),
        (travel.y, bounds.bottom() - start.y),
    ];

    let mut entry = 0.0_f32;
    let mut exit = 1.0_f32;
    for (toward_outside, room) in slabs {
        if toward_outside == 0.0 {
            // Parallel to this side: either always inside it or never.
            if room < 0.0 {
                return false;
            }
            continue;
        }

        let crossing = room / toward_outside;
        if toward_outside < 0.0 {
            entry = entry.max(crossing);
        } else {
            exit = exit.min(crossing);
        }
        if entry > exit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0))
    }

    #[test]
    fn palette_has_explicit_fallback() {
        assert_eq!(category_color(Category::Track), Color32::from_rgb(29, 185, 84));
        assert_eq!(category_color(Category::Other), Color32::WHITE);
        assert_ne!(category_color(Category::Genre), category_color(Category::Track));
    }

    #[test]
    fn circle_partially_inside_is_visible() {
        assert!(circle_visible(canvas(), pos2(-5.0, 50.0), 12.0));
        assert!(!circle_visible(canvas(), pos2(-13.0, 50.0), 12.0));
    }

    #[test]
    fn edge_crossing_canvas_is_visible() {
        assert!(edge_visible(canvas(), pos2(-50.0, 50.0), pos2(150.0, 50.0), 1.0));
        assert!(!edge_visible(canvas(), pos2(-50.0, -50.0), pos2(150.0, -40.0), 1.0));
        assert!(edge_visible(canvas(), pos2(-10.0, 20.0), pos2(20.0, -10.0), 0.0));
        // Bounding boxes overlap at the corner but the segment misses the canvas.
        assert!(!edge_visible(canvas(), pos2(-10.0, 5.0), pos2(5.0, -10.0), 0.0));
    }

    #[test]
    fn edge_inside_or_touching_canvas_is_visible() {
        assert!(edge_visible(canvas(), pos2(10.0, 10.0), pos2(90.0, 90.0), 0.0));
        assert!(edge_visible(canvas(), pos2(-20.0, 0.0), pos2(120.0, 0.0), 0.0));
        assert!(edge_visible(canvas(), pos2(-10.0, 10.0), pos2(10.0, -10.0), 0.0));
    }

    #[test]
    fn edge_padding_widens_the_visible_band() {
        assert!(!edge_visible(canvas(), pos2(-20.0, -3.0), pos2(120.0, -3.0), 1.0));
        assert!(edge_visible(canvas(), pos2(-20.0, -3.0), pos2(120.0, -3.0), 4.0));
    }

    #[test]
    fn zero_length_edge_is_visible_only_inside() {
        assert!(edge_visible(canvas(), pos2(40.0, 40.0), pos2(40.0, 40.0), 0.0));
        assert!(!edge_visible(canvas(), pos2(140.0, 40.0), pos2(140.0, 40.0), 0.0));
    }
}
