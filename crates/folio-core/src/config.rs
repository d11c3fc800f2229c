//! Modal configuration.

use crate::motion::MotionPreference;
use crate::transition::{EasingFunction, Transition, TransitionTiming};
use serde::{Deserialize, Serialize};

/// Tunables for the case-study modal. Every field has a default, so any
/// subset may be given in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Entry transition timing
    pub enter: TransitionTiming,
    /// Exit transition timing
    pub exit: TransitionTiming,
    /// Gallery placeholder labels
    pub gallery: Vec<String>,
    /// Motion preference applied to both transitions
    pub motion: MotionPreference,
    /// Close on Escape
    pub close_on_escape: bool,
    /// Close on backdrop click
    pub close_on_backdrop: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            enter: TransitionTiming::new(300, EasingFunction::EaseOutCubic),
            exit: TransitionTiming::new(200, EasingFunction::EaseInQuad),
            gallery: vec![
                "Image 1".to_string(),
                "Image 2".to_string(),
                "Image 3".to_string(),
            ],
            motion: MotionPreference::Full,
            close_on_escape: true,
            close_on_backdrop: true,
        }
    }
}

impl ModalConfig {
    /// Set the motion preference.
    #[must_use]
    pub const fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }

    /// Entry transition with the motion preference applied.
    #[must_use]
    pub fn enter_transition(&self) -> Transition {
        Transition::modal_enter(TransitionTiming::new(
            self.motion.duration_ms(self.enter.duration_ms),
            self.enter.easing,
        ))
    }

    /// Exit transition with the motion preference applied.
    #[must_use]
    pub fn exit_transition(&self) -> Transition {
        Transition::modal_exit(TransitionTiming::new(
            self.motion.duration_ms(self.exit.duration_ms),
            self.exit.easing,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ModalConfig::default();
        assert_eq!(config.enter.duration_ms, 300);
        assert_eq!(config.exit.duration_ms, 200);
        assert_eq!(config.exit.easing, EasingFunction::EaseInQuad);
        assert_eq!(config.gallery, ["Image 1", "Image 2", "Image 3"]);
        assert!(config.close_on_escape);
        assert!(config.close_on_backdrop);
    }

    #[test]
    fn test_config_reduced_motion_is_instant() {
        let config = ModalConfig::default().with_motion(MotionPreference::Reduced);
        assert!(config.enter_transition().is_instant());
        assert!(config.exit_transition().is_instant());
    }

    #[test]
    fn test_config_full_motion_keeps_durations() {
        let config = ModalConfig::default();
        assert_eq!(config.enter_transition().duration_ms, 300);
        assert_eq!(config.exit_transition().duration_ms, 200);
    }

    #[test]
    fn test_config_partial_json() {
        let config: ModalConfig =
            serde_json::from_str(r#"{"exit": {"duration_ms": 120}, "motion": "reduced"}"#)
                .unwrap();
        assert_eq!(config.exit.duration_ms, 120);
        assert_eq!(config.exit.easing, EasingFunction::EaseOutCubic);
        assert_eq!(config.motion, MotionPreference::Reduced);
        assert_eq!(config.enter.duration_ms, 300);
    }
}
