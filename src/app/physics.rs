use std::time::Duration;

use super::config::SpringConfig;
use super::scene::NodeState;

const MAX_STEPS_PER_FRAME: usize = 8;

/// Advances every node except `dragged` by one fixed step toward its anchor.
/// Returns whether anything is still moving.
pub(in crate::app) fn step_springs(
    nodes: &mut [NodeState],
    dragged: Option<usize>,
    config: SpringConfig,
) -> bool {
    let max_speed = config.max_speed;
    let mut any_motion = false;

    for (index, node) in nodes.iter_mut().enumerate() {
        if Some(index) == dragged {
            continue;
        }

        let force = (node.rest - node.position) * config.spring_strength;
        // Damping acts on the post-force velocity.
        let mut velocity = (node.velocity + force) * config.damping;
        velocity.x = velocity.x.clamp(-max_speed, max_speed);
        velocity.y = velocity.y.clamp(-max_speed, max_speed);

        node.velocity = velocity;
        node.position += velocity;

        if velocity.length_sq() > 1e-8 || (node.rest - node.position).length_sq() > 1e-4 {
            any_motion = true;
        }
    }

    any_motion
}

/// Converts elapsed wall time into whole integrator steps at the target rate.
#[derive(Clone, Copy, Debug)]
pub(in crate::app) struct StepClock {
    step_secs: f32,
    accumulator_secs: f32,
}

impl StepClock {
    pub(in crate::app) fn new(target_fps: f32) -> Self {
        Self {
            step_secs: 1.0 / target_fps,
            accumulator_secs: 0.0,
        }
    }

    pub(in crate::app) fn step_interval(&self) -> Duration {
        Duration::from_secs_f32(self.step_secs)
    }

    pub(in crate::app) fn advance(&mut self, elapsed_secs: f32) -> usize {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.accumulator_secs += elapsed_secs;
        }

        // Small slack so an exact frame interval is not lost to rounding.
        let steps = ((self.accumulator_secs + self.step_secs * 1e-3) / self.step_secs).floor();
        let steps = steps.max(0.0) as usize;

        if steps > MAX_STEPS_PER_FRAME {
            self.accumulator_secs = 0.0;
            return MAX_STEPS_PER_FRAME;
        }

        self.accumulator_secs = (self.accumulator_secs - steps as f32 * self.step_secs).max(0.0);
        steps
    }
}
