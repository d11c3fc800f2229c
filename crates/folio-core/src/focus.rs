//! Keyboard focus trapping for overlays.

use crate::document::ElementId;
use crate::event::Modifiers;

/// Focus direction for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Move focus forward (Tab)
    Forward,
    /// Move focus backward (Shift+Tab)
    Backward,
}

impl FocusDirection {
    /// Direction of a Tab press given its modifiers.
    #[must_use]
    pub const fn from_tab(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Result of offering a Tab press to the trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// The trap moved focus; the host must suppress its default handling.
    Moved(ElementId),
    /// Native tab order stays inside the trap; let the host handle it.
    PassThrough,
}

/// Ordered set of elements keyboard focus is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTrap {
    elements: Vec<ElementId>,
}

impl FocusTrap {
    /// Create a trap over elements in tab order.
    #[must_use]
    pub fn new(elements: Vec<ElementId>) -> Self {
        Self { elements }
    }

    /// Trapped elements in tab order.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    /// First element in tab order.
    #[must_use]
    pub fn first(&self) -> Option<ElementId> {
        self.elements.first().copied()
    }

    /// Last element in tab order.
    #[must_use]
    pub fn last(&self) -> Option<ElementId> {
        self.elements.last().copied()
    }

    /// Number of trapped elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if nothing is focusable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check if an element belongs to the trap.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains(&element)
    }

    /// Decide where a Tab press from `current` should land.
    ///
    /// Focus wraps at either end. Focus sitting outside the trap is pulled
    /// back to the near end for the direction of travel.
    #[must_use]
    pub fn handle_tab(&self, current: Option<ElementId>, direction: FocusDirection) -> TabOutcome {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return TabOutcome::PassThrough;
        };

        let Some(current) = current.filter(|c| self.contains(*c)) else {
            return TabOutcome::Moved(match direction {
                FocusDirection::Forward => first,
                FocusDirection::Backward => last,
            });
        };

        match direction {
            FocusDirection::Forward if current == last => TabOutcome::Moved(first),
            FocusDirection::Backward if current == first => TabOutcome::Moved(last),
            _ => TabOutcome::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[u64]) -> Vec<ElementId> {
        raw.iter().copied().map(ElementId).collect()
    }

    // =========================================================================
    // FocusDirection Tests
    // =========================================================================

    #[test]
    fn test_direction_from_tab() {
        assert_eq!(
            FocusDirection::from_tab(Modifiers::NONE),
            FocusDirection::Forward
        );
        assert_eq!(
            FocusDirection::from_tab(Modifiers::SHIFT),
            FocusDirection::Backward
        );
    }

    // =========================================================================
    // FocusTrap Tests
    // =========================================================================

    #[test]
    fn test_trap_new() {
        let trap = FocusTrap::new(ids(&[10, 11, 12]));
        assert_eq!(trap.len(), 3);
        assert_eq!(trap.first(), Some(ElementId(10)));
        assert_eq!(trap.last(), Some(ElementId(12)));
        assert!(trap.contains(ElementId(11)));
        assert!(!trap.contains(ElementId(1)));
    }

    #[test]
    fn test_trap_forward_wraps_from_last() {
        let trap = FocusTrap::new(ids(&[10, 11, 12]));
        assert_eq!(
            trap.handle_tab(Some(ElementId(12)), FocusDirection::Forward),
            TabOutcome::Moved(ElementId(10))
        );
    }

    #[test]
    fn test_trap_backward_wraps_from_first() {
        let trap = FocusTrap::new(ids(&[10, 11, 12]));
        assert_eq!(
            trap.handle_tab(Some(ElementId(10)), FocusDirection::Backward),
            TabOutcome::Moved(ElementId(12))
        );
    }

    #[test]
    fn test_trap_middle_passes_through() {
        let trap = FocusTrap::new(ids(&[10, 11, 12]));
        assert_eq!(
            trap.handle_tab(Some(ElementId(11)), FocusDirection::Forward),
            TabOutcome::PassThrough
        );
        assert_eq!(
            trap.handle_tab(Some(ElementId(11)), FocusDirection::Backward),
            TabOutcome::PassThrough
        );
        assert_eq!(
            trap.handle_tab(Some(ElementId(10)), FocusDirection::Forward),
            TabOutcome::PassThrough
        );
    }

    #[test]
    fn test_trap_outside_focus_pulled_in() {
        let trap = FocusTrap::new(ids(&[10, 11, 12]));
        assert_eq!(
            trap.handle_tab(Some(ElementId(1)), FocusDirection::Forward),
            TabOutcome::Moved(ElementId(10))
        );
        assert_eq!(
            trap.handle_tab(None, FocusDirection::Backward),
            TabOutcome::Moved(ElementId(12))
        );
    }

    #[test]
    fn test_trap_single_element_stays() {
        let trap = FocusTrap::new(ids(&[7]));
        assert_eq!(
            trap.handle_tab(Some(ElementId(7)), FocusDirection::Forward),
            TabOutcome::Moved(ElementId(7))
        );
        assert_eq!(
            trap.handle_tab(Some(ElementId(7)), FocusDirection::Backward),
            TabOutcome::Moved(ElementId(7))
        );
    }

    #[test]
    fn test_trap_empty_passes_through() {
        let trap = FocusTrap::default();
        assert!(trap.is_empty());
        assert_eq!(
            trap.handle_tab(None, FocusDirection::Forward),
            TabOutcome::PassThrough
        );
    }

    proptest! {
        #[test]
        fn prop_tab_on_last_lands_on_first(count in 1usize..32) {
            let trap = FocusTrap::new((0..count as u64).map(ElementId).collect());
            let last = trap.last().unwrap();
            prop_assert_eq!(
                trap.handle_tab(Some(last), FocusDirection::Forward),
                TabOutcome::Moved(trap.first().unwrap())
            );
        }

        #[test]
        fn prop_shift_tab_on_first_lands_on_last(count in 1usize..32) {
            let trap = FocusTrap::new((0..count as u64).map(ElementId).collect());
            let first = trap.first().unwrap();
            prop_assert_eq!(
                trap.handle_tab(Some(first), FocusDirection::Backward),
                TabOutcome::Moved(trap.last().unwrap())
            );
        }

        #[test]
        fn prop_tab_never_leaves_trap(count in 1usize..32, pos in 0usize..32, back in any::<bool>()) {
            let trap = FocusTrap::new((100..100 + count as u64).map(ElementId).collect());
            let current = trap.elements()[pos % count];
            let direction = if back { FocusDirection::Backward } else { FocusDirection::Forward };
            if let TabOutcome::Moved(next) = trap.handle_tab(Some(current), direction) {
                prop_assert!(trap.contains(next));
            }
        }
    }
}
