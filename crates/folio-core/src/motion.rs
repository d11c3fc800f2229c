//! Reduced-motion support.

use serde::{Deserialize, Serialize};

/// Media query matched when the user asks for less motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// User motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    /// Play transitions at their configured durations
    #[default]
    Full,
    /// Skip transitions entirely
    Reduced,
}

impl MotionPreference {
    /// Preference from the result of matching [`REDUCED_MOTION_QUERY`].
    #[must_use]
    pub const fn from_query_match(matches: bool) -> Self {
        if matches {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    /// The stricter of two preferences. A page asking for reduced motion
    /// overrides a configured `Full`, but never relaxes a configured `Reduced`.
    #[must_use]
    pub const fn restrict(self, other: Self) -> Self {
        match (self, other) {
            (Self::Full, Self::Full) => Self::Full,
            _ => Self::Reduced,
        }
    }

    /// Motion-aware duration.
    #[must_use]
    pub const fn duration_ms(self, duration_ms: u32) -> u32 {
        match self {
            Self::Full => duration_ms,
            Self::Reduced => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_default_full() {
        assert_eq!(MotionPreference::default(), MotionPreference::Full);
    }

    #[test]
    fn test_motion_duration() {
        assert_eq!(MotionPreference::Full.duration_ms(300), 300);
        assert_eq!(MotionPreference::Reduced.duration_ms(300), 0);
    }

    #[test]
    fn test_motion_from_query() {
        assert_eq!(
            MotionPreference::from_query_match(true),
            MotionPreference::Reduced
        );
        assert_eq!(
            MotionPreference::from_query_match(false),
            MotionPreference::Full
        );
    }

    #[test]
    fn test_motion_restrict_never_relaxes() {
        use MotionPreference::{Full, Reduced};
        assert_eq!(Full.restrict(Full), Full);
        assert_eq!(Full.restrict(Reduced), Reduced);
        assert_eq!(Reduced.restrict(Full), Reduced);
        assert_eq!(Reduced.restrict(Reduced), Reduced);
    }
}
