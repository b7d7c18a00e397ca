use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub spring_strength: f32,
    pub damping: f32,
    pub max_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            spring_strength: 0.01,
            damping: 0.98,
            max_speed: 2.0,
        }
    }
}

impl SpringConfig {
    /// Rejects constants for which the anchor spring would not settle.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.spring_strength.is_finite() && self.spring_strength > 0.0) {
            return Err(ConfigError::SpringStrength(self.spring_strength));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        if (1.0 - self.spring_strength).abs() * self.damping >= 1.0 {
            return Err(ConfigError::Unstable {
                spring_strength: self.spring_strength,
                damping: self.damping,
            });
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(ConfigError::MaxSpeed(self.max_speed));
        }
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            min: 0.2,
            max: 5.0,
        }
    }
}

impl ZoomConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max)
        {
            return Err(ConfigError::ZoomRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::ZoomStep(self.step));
        }
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Screen-space radius, shared by drawing and hit-testing.
    pub node_radius: f32,
    pub label_chars: usize,
    pub label_font_size: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_radius: 12.0,
            label_chars: 20,
            label_font_size: 14.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    pub spring: SpringConfig,
    pub zoom: ZoomConfig,
    pub render: RenderConfig,
    pub target_fps: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            zoom: ZoomConfig::default(),
            render: RenderConfig::default(),
            target_fps: 165.0,
        }
    }
}

impl ViewerConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        self.spring.validate()?;
        self.zoom.validate()?;
        if !(self.render.node_radius.is_finite() && self.render.node_radius > 0.0) {
            return Err(ConfigError::NodeRadius(self.render.node_radius));
        }
        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(ConfigError::FrameRate(self.target_fps));
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("spring strength must be positive, got {0}")]
    SpringStrength(f32),
    #[error("damping must lie strictly between 0 and 1, got {0}")]
    Damping(f32),
    #[error(
        "spring strength {spring_strength} with damping {damping} never settles: |1 - strength| * damping must stay below 1"
    )]
    Unstable { spring_strength: f32, damping: f32 },
    #[error("max speed must be positive, got {0}")]
    MaxSpeed(f32),
    #[error("zoom range [{min}, {max}] must be positive and ordered")]
    ZoomRange { min: f32, max: f32 },
    #[error("zoom step must be positive, got {0}")]
    ZoomStep(f32),
    #[error("node radius must be positive, got {0}")]
    NodeRadius(f32),
    #[error("target frame rate must be positive, got {0}")]
    FrameRate(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ViewerConfig::default().validate(), Ok(ViewerConfig::default()));
    }

    #[test]
    fn damping_outside_unit_interval_is_rejected() {
        for damping in [0.0, 1.0, 1.2, -0.5, f32::NAN] {
            let config = SpringConfig {
                damping,
                ..SpringConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Damping(_))),
                "damping {damping} should be rejected"
            );
        }
    }

    #[test]
    fn overly_stiff_spring_is_rejected() {
        let config = SpringConfig {
            spring_strength: 2.5,
            damping: 0.9,
            max_speed: 2.0,
        };
        assert!(matches!(config.validate(), Err(ConfigError::Unstable { .. })));
    }

    #[test]
    fn zoom_range_must_be_positive_and_ordered() {
        let inverted = ZoomConfig {
            min: 4.0,
            max: 1.0,
            ..ZoomConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(ConfigError::ZoomRange { .. })));

        let zero = ZoomConfig {
            min: 0.0,
            ..ZoomConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::ZoomRange { .. })));
    }

    #[test]
    fn frame_rate_must_be_positive() {
        let config = ViewerConfig {
            target_fps: 0.0,
            ..ViewerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FrameRate(0.0)));
    }
}
