//! The page seam: everything the modal controller reads from or writes to
//! the host document.
//!
//! The browser binding implements [`Document`] on top of `web-sys`; tests
//! implement it over an in-memory tree.

use serde::{Deserialize, Serialize};

/// Opaque handle to an element of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Text-bearing parts of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `.modal__title`
    Title,
    /// `.modal__problem`
    Problem,
    /// `.modal__solution`
    Solution,
    /// `.modal__outcomes`, rendered as list items
    Outcomes,
    /// `.modal__gallery`, rendered as placeholder tiles
    Gallery,
}

/// Where a click landed relative to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    /// The dimmed area around the content panel
    Backdrop,
    /// The explicit close control
    CloseButton,
    /// Inside the content panel
    Panel,
    /// A control carrying a case-study id
    Trigger(String),
    /// Anywhere else on the page
    Outside,
}

/// Host document operations used by the modal controller.
pub trait Document {
    /// Write plain text into a slot.
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Replace a slot's children with one item per entry, in order.
    fn set_items(&mut self, slot: Slot, items: &[String]);

    /// Show or hide the overlay (open marker class and `aria-hidden`).
    fn set_overlay_visible(&mut self, visible: bool);

    /// Engage or release the page scroll-lock.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Interactive elements inside the overlay, in document order.
    fn focusable_descendants(&self) -> Vec<ElementId>;

    /// Move keyboard focus.
    fn focus(&mut self, element: ElementId);

    /// The element that currently has focus.
    fn active_element(&self) -> Option<ElementId>;

    /// Whether an element is still attached to the document.
    fn contains(&self, element: ElementId) -> bool;

    /// Classify a click target.
    fn region(&self, element: ElementId) -> Region;
}
