use eframe::egui::{Pos2, Vec2};

use super::config::ZoomConfig;

/// Maps world space to screen space: `screen = world * zoom + pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub pan: Vec2,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Unit zoom, pulled into the configured range when the range excludes it.
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            zoom: 1.0_f32.clamp(config.min, config.max),
            ..Self::default()
        }
    }

    pub fn to_screen(&self, world: Vec2) -> Pos2 {
        (world * self.zoom + self.pan).to_pos2()
    }

    pub fn to_world(&self, screen: Pos2) -> Vec2 {
        (screen.to_vec2() - self.pan) / self.zoom
    }

    /// Puts the world origin at `screen`.
    pub fn center_on(&mut self, screen: Pos2) {
        self.pan = screen.to_vec2();
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Additive zoom, clamped so the factor never leaves the configured range.
    pub fn zoom_by(&mut self, notches: f32, config: ZoomConfig) {
        if !notches.is_finite() {
            return;
        }
        self.zoom = (self.zoom + notches * config.step).clamp(config.min, config.max);
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn world_screen_round_trip() {
        let viewports = [
            Viewport::default(),
            Viewport {
                pan: vec2(700.0, 450.0),
                zoom: 0.2,
            },
            Viewport {
                pan: vec2(-35.5, 12.25),
                zoom: 5.0,
            },
            Viewport {
                pan: vec2(1.0, -1.0),
                zoom: 1.3,
            },
        ];
        let points = [
            vec2(0.0, 0.0),
            vec2(800.0, -800.0),
            vec2(-0.125, 13.5),
            vec2(123.456, 789.012),
        ];

        for viewport in viewports {
            for point in points {
                assert_close(viewport.to_world(viewport.to_screen(point)), point);
            }
        }
    }

    #[test]
    fn to_screen_applies_zoom_then_pan() {
        let viewport = Viewport {
            pan: vec2(10.0, 20.0),
            zoom: 2.0,
        };
        assert_eq!(viewport.to_screen(vec2(3.0, -4.0)), pos2(16.0, 12.0));
        assert_eq!(viewport.to_world(pos2(16.0, 12.0)), vec2(3.0, -4.0));
    }

    #[test]
    fn zoom_stays_pinned_at_bounds() {
        let config = ZoomConfig::default();
        let mut viewport = Viewport::default();

        for _ in 0..200 {
            viewport.zoom_by(3.0, config);
            assert!(viewport.zoom <= config.max);
        }
        assert_eq!(viewport.zoom, config.max);

        for _ in 0..200 {
            viewport.zoom_by(-3.0, config);
            assert!(viewport.zoom >= config.min);
        }
        assert_eq!(viewport.zoom, config.min);
    }

    #[test]
    fn initial_zoom_respects_range_that_excludes_one() {
        let zoomed_in = ZoomConfig {
            min: 2.0,
            max: 5.0,
            ..ZoomConfig::default()
        };
        assert_eq!(Viewport::new(zoomed_in).zoom, 2.0);

        let zoomed_out = ZoomConfig {
            min: 0.2,
            max: 0.5,
            ..ZoomConfig::default()
        };
        assert_eq!(Viewport::new(zoomed_out).zoom, 0.5);

        assert_eq!(Viewport::new(ZoomConfig::default()), Viewport::default());
    }

    #[test]
    fn non_finite_wheel_delta_is_ignored() {
        let mut viewport = Viewport::default();
        viewport.zoom_by(f32::NAN, ZoomConfig::default());
        assert_eq!(viewport.zoom, 1.0);
    }

    #[test]
    fn center_on_maps_origin_to_point() {
        let mut viewport = Viewport::default();
        viewport.center_on(pos2(700.0, 450.0));
        assert_eq!(viewport.to_screen(Vec2::ZERO), pos2(700.0, 450.0));
    }
}
