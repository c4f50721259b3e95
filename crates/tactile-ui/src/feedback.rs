//! Scale cues and their tuning.

use tactile_core::math::Vec2;
use tactile_scene::Action;

/// The animation cues a button plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A finger landed on, or came back onto, the button.
    Focus,
    /// The finger left the button or was lifted.
    LoseFocus,
    /// Periodic attention pulse.
    Highlight,
}

/// What happens to a running cue when a new one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CuePolicy {
    /// Cues run side by side; the newest one wins the scale each frame.
    #[default]
    Overlap,
    /// The running cue is stopped before the new one starts.
    Replace,
}

/// Two-step scale tween, expressed as factors of the button's base scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePulse {
    pub first: Vec2,
    pub second: Vec2,
    /// Duration of each step, in seconds.
    pub step_duration: f32,
}

impl ScalePulse {
    pub const fn uniform(first: f32, second: f32, step_duration: f32) -> Self {
        Self {
            first: Vec2::splat(first),
            second: Vec2::splat(second),
            step_duration,
        }
    }

    /// Build the tween for a node resting at `base` scale.
    pub fn action(&self, base: f32) -> Action {
        Action::sequence([
            Action::scale_to(self.step_duration, self.first * base),
            Action::scale_to(self.step_duration, self.second * base),
        ])
    }

    /// Total running time of the pulse.
    pub fn duration(&self) -> f32 {
        self.step_duration * 2.0
    }
}

/// Feedback tuning for a [`Button`](crate::Button).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackConfig {
    pub focus: ScalePulse,
    pub lose_focus: ScalePulse,
    pub highlight: ScalePulse,
    /// Seconds between highlight pulses.
    pub highlight_period: f32,
    /// Delay before the first highlight pulse.
    pub highlight_delay: f32,
    /// Seconds per cooldown tick.
    pub cool_down_interval: f32,
    /// Squared distance a finger may drift and still tap when move grace is off.
    pub move_tolerance_squared: f32,
}

impl FeedbackConfig {
    pub fn pulse(&self, cue: Cue) -> &ScalePulse {
        match cue {
            Cue::Focus => &self.focus,
            Cue::LoseFocus => &self.lose_focus,
            Cue::Highlight => &self.highlight,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            focus: ScalePulse::uniform(0.93, 0.95, 0.1),
            lose_focus: ScalePulse::uniform(1.05, 1.0, 0.1),
            highlight: ScalePulse {
                first: Vec2::new(1.05, 1.25),
                second: Vec2::ONE,
                step_duration: 1.0,
            },
            highlight_period: 2.0,
            highlight_delay: 0.01,
            cool_down_interval: 1.0,
            move_tolerance_squared: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_scene::{Node, Scene};

    #[test]
    fn test_pulse_is_relative_to_base() {
        let mut scene = Scene::new();
        let node = scene.graph.add_node(Node::new("n").with_scale(2.0));
        let pulse = ScalePulse::uniform(0.5, 0.75, 0.25);

        scene.actions.run(node, pulse.action(2.0));
        scene.update(0.25);
        assert_eq!(scene.graph.node(node).unwrap().scale, Vec2::splat(1.0));
        scene.update(0.25);
        assert_eq!(scene.graph.node(node).unwrap().scale, Vec2::splat(1.5));
        assert!(!scene.actions.is_running(node));
    }

    #[test]
    fn test_default_highlight_is_non_uniform() {
        let config = FeedbackConfig::default();
        assert_eq!(config.pulse(Cue::Highlight).first, Vec2::new(1.05, 1.25));
        assert_eq!(config.pulse(Cue::Highlight).duration(), 2.0);
        assert_eq!(config.pulse(Cue::Focus).first, Vec2::splat(0.93));
    }
}
