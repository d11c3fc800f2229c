//! Visual transitions: easing and the declarative descriptions handed to a
//! [`TransitionEngine`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing
// =============================================================================

/// Easing functions for smooth animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Quadratic ease in
    EaseInQuad,
    /// Quadratic ease out
    EaseOutQuad,
    /// Quadratic ease in-out
    EaseInOutQuad,
    /// Cubic ease in
    EaseInCubic,
    /// Cubic ease out
    EaseOutCubic,
    /// Cubic ease in-out
    EaseInOutCubic,
}

impl EasingFunction {
    /// Equivalent CSS `transition-timing-function`.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "cubic-bezier(0.11, 0, 0.5, 0)",
            Self::EaseOutQuad => "cubic-bezier(0.5, 1, 0.89, 1)",
            Self::EaseInOutQuad => "cubic-bezier(0.45, 0, 0.55, 1)",
            Self::EaseInCubic => "cubic-bezier(0.32, 0, 0.67, 0)",
            Self::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Self::EaseInOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

// =============================================================================
// Transition descriptions
// =============================================================================

/// Identifies one started transition. Completion is only honoured for the
/// ticket currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionTicket(pub u64);

/// Animated parts of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalPart {
    /// The content panel
    Container,
    /// The dimmed backdrop
    Backdrop,
}

/// Animatable property set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Uniform scale factor
    pub scale: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl VisualState {
    /// Fully shown, natural size.
    pub const SHOWN: Self = Self {
        scale: 1.0,
        opacity: 1.0,
    };

    /// Create a visual state.
    #[must_use]
    pub const fn new(scale: f32, opacity: f32) -> Self {
        Self { scale, opacity }
    }
}

/// One part animated from one property set to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Which part moves
    pub part: ModalPart,
    /// Property set at the start
    pub from: VisualState,
    /// Property set at the end
    pub to: VisualState,
}

/// Duration and easing of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub easing: EasingFunction,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: EasingFunction::EaseOutCubic,
        }
    }
}

impl TransitionTiming {
    /// Create a timing.
    #[must_use]
    pub const fn new(duration_ms: u32, easing: EasingFunction) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

/// Scale of the content panel while hidden.
const PANEL_HIDDEN_SCALE: f32 = 0.95;

/// A declarative set of tracks sharing one duration and easing.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Animated parts
    pub tracks: Vec<Track>,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Easing curve
    pub easing: EasingFunction,
}

impl Transition {
    /// Panel grows in and fades up while the backdrop fades in.
    #[must_use]
    pub fn modal_enter(timing: TransitionTiming) -> Self {
        Self {
            tracks: vec![
                Track {
                    part: ModalPart::Container,
                    from: VisualState::new(PANEL_HIDDEN_SCALE, 0.0),
                    to: VisualState::SHOWN,
                },
                Track {
                    part: ModalPart::Backdrop,
                    from: VisualState::new(1.0, 0.0),
                    to: VisualState::SHOWN,
                },
            ],
            duration_ms: timing.duration_ms,
            easing: timing.easing,
        }
    }

    /// Reverse of [`Transition::modal_enter`].
    #[must_use]
    pub fn modal_exit(timing: TransitionTiming) -> Self {
        Self {
            tracks: vec![
                Track {
                    part: ModalPart::Container,
                    from: VisualState::SHOWN,
                    to: VisualState::new(PANEL_HIDDEN_SCALE, 0.0),
                },
                Track {
                    part: ModalPart::Backdrop,
                    from: VisualState::SHOWN,
                    to: VisualState::new(1.0, 0.0),
                },
            ],
            duration_ms: timing.duration_ms,
            easing: timing.easing,
        }
    }

    /// Zero-length transitions complete without waiting on the engine.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Track for a part, if the part moves.
    #[must_use]
    pub fn track(&self, part: ModalPart) -> Option<&Track> {
        self.tracks.iter().find(|t| t.part == part)
    }

    /// Property set a part rests at once the transition has finished.
    #[must_use]
    pub fn final_state(&self, part: ModalPart) -> Option<VisualState> {
        self.track(part).map(|t| t.to)
    }
}

/// Runs transitions and reports completion.
///
/// Implementations must eventually deliver exactly one completion for
/// every `ticket` they are given, after the visual change has finished, or
/// hand the ticket back through [`TransitionEngine::take_stalled`].
/// Delivery happens outside of `start` (from a timer or animation frame
/// callback) by calling back into the controller with the ticket.
pub trait TransitionEngine {
    /// Begin a transition.
    fn start(&mut self, transition: &Transition, ticket: TransitionTicket);

    /// Jump straight to the end state of a transition. Used for zero-length
    /// transitions, which never reach [`TransitionEngine::start`].
    fn apply_final(&mut self, transition: &Transition);

    /// Ticket of a started transition whose completion could not be
    /// scheduled. The controller finishes it on the next event.
    fn take_stalled(&mut self) -> Option<TransitionTicket> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // EasingFunction Tests
    // =========================================================================

    #[test]
    fn test_easing_css() {
        assert_eq!(EasingFunction::Linear.css(), "linear");
        assert_eq!(
            EasingFunction::EaseOutCubic.css(),
            "cubic-bezier(0.33, 1, 0.68, 1)"
        );
        assert_eq!(EasingFunction::default(), EasingFunction::Linear);
    }

    #[test]
    fn test_easing_serde_snake_case() {
        let json = serde_json::to_string(&EasingFunction::EaseOutCubic).unwrap();
        assert_eq!(json, "\"ease_out_cubic\"");
    }

    // =========================================================================
    // Transition Tests
    // =========================================================================

    #[test]
    fn test_modal_enter_tracks() {
        let enter = Transition::modal_enter(TransitionTiming::default());
        assert_eq!(enter.duration_ms, 300);
        assert_eq!(enter.easing, EasingFunction::EaseOutCubic);

        let panel = enter.track(ModalPart::Container).unwrap();
        assert_eq!(panel.from, VisualState::new(0.95, 0.0));
        assert_eq!(panel.to, VisualState::SHOWN);

        let backdrop = enter.track(ModalPart::Backdrop).unwrap();
        assert_eq!(backdrop.from.opacity, 0.0);
        assert_eq!(backdrop.to.opacity, 1.0);
    }

    #[test]
    fn test_modal_exit_reverses_enter() {
        let timing = TransitionTiming::new(200, EasingFunction::EaseInQuad);
        let enter = Transition::modal_enter(timing);
        let exit = Transition::modal_exit(timing);
        for (a, b) in enter.tracks.iter().zip(&exit.tracks) {
            assert_eq!(a.part, b.part);
            assert_eq!(a.from, b.to);
            assert_eq!(a.to, b.from);
        }
    }

    #[test]
    fn test_transition_final_state() {
        let exit = Transition::modal_exit(TransitionTiming::new(200, EasingFunction::Linear));
        assert_eq!(
            exit.final_state(ModalPart::Container),
            Some(VisualState::new(0.95, 0.0))
        );
        assert_eq!(exit.final_state(ModalPart::Backdrop).map(|s| s.opacity), Some(0.0));
    }

    #[test]
    fn test_transition_instant() {
        let enter = Transition::modal_enter(TransitionTiming::new(0, EasingFunction::Linear));
        assert!(enter.is_instant());
        assert_eq!(
            enter.final_state(ModalPart::Backdrop),
            Some(VisualState::SHOWN)
        );
    }
}
