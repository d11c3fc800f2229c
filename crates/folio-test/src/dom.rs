//! In-memory page model.

use folio_core::{Document, ElementId, Region, Slot};
use std::collections::HashMap;

/// What a fake element stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// `.modal__backdrop`
    Backdrop,
    /// `.modal__close`
    CloseButton,
    /// `.modal__container`
    Panel,
    /// A focusable control inside the panel
    PanelControl,
    /// A `[data-case-study]` control
    Trigger(String),
    /// Any other page control
    Outside,
}

#[derive(Debug, Clone)]
struct FakeElement {
    kind: ElementKind,
    attached: bool,
}

/// Page with a case-study overlay, held in memory.
///
/// A fresh document has a backdrop, a panel and a close button. The close
/// button is the only focusable element inside the overlay until more are
/// added with [`FakeDocument::add_panel_control`].
#[derive(Debug, Clone)]
pub struct FakeDocument {
    elements: Vec<FakeElement>,
    texts: HashMap<Slot, String>,
    items: HashMap<Slot, Vec<String>>,
    overlay_visible: bool,
    scroll_locked: bool,
    focused: Option<ElementId>,
    focus_history: Vec<ElementId>,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocument {
    /// Backdrop.
    pub const BACKDROP: ElementId = ElementId(0);
    /// Content panel.
    pub const PANEL: ElementId = ElementId(1);
    /// Close button.
    pub const CLOSE_BUTTON: ElementId = ElementId(2);

    /// Create the bare overlay.
    pub fn new() -> Self {
        let mut document = Self {
            elements: Vec::new(),
            texts: HashMap::new(),
            items: HashMap::new(),
            overlay_visible: false,
            scroll_locked: false,
            focused: None,
            focus_history: Vec::new(),
        };
        document.push(ElementKind::Backdrop);
        document.push(ElementKind::Panel);
        document.push(ElementKind::CloseButton);
        document
    }

    // === Building ===

    /// Add a control carrying `data-case-study="<id>"`.
    pub fn add_trigger(&mut self, case_study: impl Into<String>) -> ElementId {
        self.push(ElementKind::Trigger(case_study.into()))
    }

    /// Add a focusable control inside the panel, after the existing ones.
    pub fn add_panel_control(&mut self) -> ElementId {
        self.push(ElementKind::PanelControl)
    }

    /// Add a control outside the overlay.
    pub fn add_outside(&mut self) -> ElementId {
        self.push(ElementKind::Outside)
    }

    /// Remove an element from the page. Its id stays reserved.
    pub fn detach(&mut self, element: ElementId) {
        if let Some(el) = self.get_mut(element) {
            el.attached = false;
        }
        if self.focused == Some(element) {
            self.focused = None;
        }
    }

    /// Focus an element without going through the controller.
    pub fn set_focus(&mut self, element: Option<ElementId>) {
        self.focused = element;
    }

    // === Inspection ===

    /// Kind of an element.
    pub fn kind(&self, element: ElementId) -> Option<&ElementKind> {
        self.get(element).map(|el| &el.kind)
    }

    /// First trigger for a case study.
    pub fn trigger(&self, case_study: &str) -> Option<ElementId> {
        self.ids().find(|&id| {
            matches!(self.kind(id), Some(ElementKind::Trigger(t)) if t == case_study)
        })
    }

    /// Text last written to a slot.
    pub fn text(&self, slot: Slot) -> &str {
        self.texts.get(&slot).map_or("", String::as_str)
    }

    /// Items last written to a slot.
    pub fn items(&self, slot: Slot) -> &[String] {
        self.items.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the open marker class is set.
    pub const fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Value `aria-hidden` would carry.
    pub const fn aria_hidden(&self) -> bool {
        !self.overlay_visible
    }

    /// Whether page scrolling is locked.
    pub const fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Currently focused element.
    pub const fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Every element focused so far, oldest first.
    pub fn focus_history(&self) -> &[ElementId] {
        &self.focus_history
    }

    // === Internal ===

    fn push(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len() as u64);
        self.elements.push(FakeElement {
            kind,
            attached: true,
        });
        id
    }

    fn get(&self, element: ElementId) -> Option<&FakeElement> {
        usize::try_from(element.0)
            .ok()
            .and_then(|index| self.elements.get(index))
    }

    fn get_mut(&mut self, element: ElementId) -> Option<&mut FakeElement> {
        usize::try_from(element.0)
            .ok()
            .and_then(|index| self.elements.get_mut(index))
    }

    fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len() as u64).map(ElementId)
    }
}

impl Document for FakeDocument {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_items(&mut self, slot: Slot, items: &[String]) {
        self.items.insert(slot, items.to_vec());
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn focusable_descendants(&self) -> Vec<ElementId> {
        self.ids()
            .filter(|&id| {
                self.get(id).is_some_and(|el| {
                    el.attached
                        && matches!(el.kind, ElementKind::CloseButton | ElementKind::PanelControl)
                })
            })
            .collect()
    }

    fn focus(&mut self, element: ElementId) {
        if !self.contains(element) {
            tracing::trace!(element = element.0, "focus on detached element ignored");
            return;
        }
        self.focused = Some(element);
        self.focus_history.push(element);
    }

    fn active_element(&self) -> Option<ElementId> {
        self.focused
    }

    fn contains(&self, element: ElementId) -> bool {
        self.get(element).is_some_and(|el| el.attached)
    }

    fn region(&self, element: ElementId) -> Region {
        match self.get(element) {
            Some(FakeElement {
                attached: true,
                kind,
            }) => match kind {
                ElementKind::Backdrop => Region::Backdrop,
                ElementKind::CloseButton => Region::CloseButton,
                ElementKind::Panel | ElementKind::PanelControl => Region::Panel,
                ElementKind::Trigger(id) => Region::Trigger(id.clone()),
                ElementKind::Outside => Region::Outside,
            },
            _ => Region::Outside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_document_layout() {
        let doc = FakeDocument::new();
        assert_eq!(doc.kind(FakeDocument::BACKDROP), Some(&ElementKind::Backdrop));
        assert_eq!(doc.kind(FakeDocument::PANEL), Some(&ElementKind::Panel));
        assert_eq!(
            doc.kind(FakeDocument::CLOSE_BUTTON),
            Some(&ElementKind::CloseButton)
        );
        assert_eq!(doc.focusable_descendants(), vec![FakeDocument::CLOSE_BUTTON]);
        assert!(doc.aria_hidden());
        assert!(!doc.scroll_locked());
    }

    #[test]
    fn test_fake_document_focusables_in_order() {
        let mut doc = FakeDocument::new();
        doc.add_trigger("skybank");
        let a = doc.add_panel_control();
        doc.add_outside();
        let b = doc.add_panel_control();
        assert_eq!(
            doc.focusable_descendants(),
            vec![FakeDocument::CLOSE_BUTTON, a, b]
        );
    }

    #[test]
    fn test_fake_document_regions() {
        let mut doc = FakeDocument::new();
        let trigger = doc.add_trigger("pulse");
        let outside = doc.add_outside();
        let control = doc.add_panel_control();
        assert_eq!(doc.region(FakeDocument::BACKDROP), Region::Backdrop);
        assert_eq!(doc.region(FakeDocument::CLOSE_BUTTON), Region::CloseButton);
        assert_eq!(doc.region(control), Region::Panel);
        assert_eq!(doc.region(trigger), Region::Trigger("pulse".to_string()));
        assert_eq!(doc.region(outside), Region::Outside);
        assert_eq!(doc.region(ElementId(99)), Region::Outside);
        assert_eq!(doc.trigger("pulse"), Some(trigger));
        assert_eq!(doc.trigger("nope"), None);
    }

    #[test]
    fn test_fake_document_detach() {
        let mut doc = FakeDocument::new();
        let trigger = doc.add_trigger("skybank");
        doc.focus(trigger);
        doc.detach(trigger);
        assert!(!doc.contains(trigger));
        assert_eq!(doc.focused(), None);
        assert_eq!(doc.region(trigger), Region::Outside);

        doc.focus(trigger);
        assert_eq!(doc.focused(), None);
        assert_eq!(doc.focus_history(), &[trigger]);
    }

    #[test]
    fn test_fake_document_detached_control_not_focusable() {
        let mut doc = FakeDocument::new();
        doc.detach(FakeDocument::CLOSE_BUTTON);
        assert!(doc.focusable_descendants().is_empty());
    }

    #[test]
    fn test_fake_document_slots() {
        let mut doc = FakeDocument::new();
        assert_eq!(doc.text(Slot::Title), "");
        assert!(doc.items(Slot::Outcomes).is_empty());
        doc.set_text(Slot::Title, "SkyBank Mobile");
        doc.set_items(Slot::Outcomes, &["a".to_string(), "b".to_string()]);
        assert_eq!(doc.text(Slot::Title), "SkyBank Mobile");
        assert_eq!(doc.items(Slot::Outcomes), ["a", "b"]);
    }
}
