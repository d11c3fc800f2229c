//! Test harness for the case-study modal.

use crate::dom::FakeDocument;
use crate::transitions::ManualTransitions;
use folio_core::{CaseStudyCatalog, ElementId, Event, Key, ModalConfig, Modifiers, Slot};
use folio_widgets::{EventResponse, ModalController, ModalMessage, ModalPhase};

/// Drives a [`ModalController`] over a [`FakeDocument`] the way a user would.
pub struct Harness {
    modal: ModalController<FakeDocument, ManualTransitions>,
    messages: Vec<ModalMessage>,
    last_response: EventResponse,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Harness over the built-in catalog with one trigger per case study.
    pub fn new() -> Self {
        Self::with_catalog(CaseStudyCatalog::builtin(), ModalConfig::default())
    }

    /// Harness over the built-in catalog with a custom config.
    pub fn with_config(config: ModalConfig) -> Self {
        Self::with_catalog(CaseStudyCatalog::builtin(), config)
    }

    /// Harness over a given catalog with one trigger per case study.
    pub fn with_catalog(catalog: CaseStudyCatalog, config: ModalConfig) -> Self {
        let mut document = FakeDocument::new();
        for id in catalog.ids() {
            document.add_trigger(id);
        }
        Self::from_parts(document, catalog, config)
    }

    /// Harness over a prepared document.
    pub fn from_parts(
        document: FakeDocument,
        catalog: CaseStudyCatalog,
        config: ModalConfig,
    ) -> Self {
        Self {
            modal: ModalController::with_catalog(
                document,
                ManualTransitions::new(),
                catalog,
                config,
            ),
            messages: Vec::new(),
            last_response: EventResponse::default(),
        }
    }

    // === Event Simulation ===

    /// Click an element.
    pub fn click(&mut self, element: ElementId) -> &mut Self {
        self.dispatch(Event::click(element))
    }

    /// Click the first trigger for a case study.
    ///
    /// # Panics
    ///
    /// Panics if the page has no trigger for `case_study`.
    pub fn click_trigger(&mut self, case_study: &str) -> &mut Self {
        let trigger = self.trigger(case_study);
        self.click(trigger)
    }

    /// Click the backdrop.
    pub fn click_backdrop(&mut self) -> &mut Self {
        self.click(FakeDocument::BACKDROP)
    }

    /// Click the close button.
    pub fn click_close(&mut self) -> &mut Self {
        self.click(FakeDocument::CLOSE_BUTTON)
    }

    /// Press a key with no modifiers.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.dispatch(Event::key(key))
    }

    /// Press a key with modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) -> &mut Self {
        self.dispatch(Event::KeyDown { key, modifiers })
    }

    /// Press Tab.
    pub fn press_tab(&mut self) -> &mut Self {
        self.press_key(Key::Tab)
    }

    /// Press Shift+Tab.
    pub fn press_shift_tab(&mut self) -> &mut Self {
        self.dispatch(Event::shift_key(Key::Tab))
    }

    /// Open programmatically.
    pub fn open(&mut self, case_study: &str) -> &mut Self {
        if let Some(opened) = self.modal.open(case_study) {
            self.messages.push(ModalMessage::Opened(opened));
        }
        self
    }

    /// Close programmatically.
    pub fn close(&mut self) -> &mut Self {
        if let Some(closed) = self.modal.close() {
            self.messages.push(ModalMessage::Closed(closed));
        }
        self
    }

    /// Let every pending transition run to its end, in start order.
    pub fn complete_transitions(&mut self) -> &mut Self {
        loop {
            let pending = self.modal.engine_mut().drain_pending();
            if pending.is_empty() {
                return self;
            }
            for ticket in pending {
                self.dispatch(Event::TransitionEnd { ticket });
            }
        }
    }

    // === Queries ===

    /// Controller under test.
    pub const fn modal(&self) -> &ModalController<FakeDocument, ManualTransitions> {
        &self.modal
    }

    /// Controller under test, mutably.
    pub fn modal_mut(&mut self) -> &mut ModalController<FakeDocument, ManualTransitions> {
        &mut self.modal
    }

    /// Page model.
    pub fn document(&self) -> &FakeDocument {
        self.modal.document()
    }

    /// Page model, mutably.
    pub fn document_mut(&mut self) -> &mut FakeDocument {
        self.modal.document_mut()
    }

    /// First trigger for a case study.
    ///
    /// # Panics
    ///
    /// Panics if the page has no trigger for `case_study`.
    pub fn trigger(&self, case_study: &str) -> ElementId {
        self.document()
            .trigger(case_study)
            .unwrap_or_else(|| panic!("no trigger for '{case_study}'"))
    }

    /// Messages emitted so far, oldest first.
    pub fn messages(&self) -> &[ModalMessage] {
        &self.messages
    }

    /// Take the messages emitted so far.
    pub fn take_messages(&mut self) -> Vec<ModalMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Response to the last dispatched event.
    pub const fn last_response(&self) -> &EventResponse {
        &self.last_response
    }

    /// Currently focused element.
    pub fn focused(&self) -> Option<ElementId> {
        self.document().focused()
    }

    /// Current phase.
    pub fn phase(&self) -> ModalPhase {
        self.modal.phase()
    }

    // === Assertions ===

    /// Assert the overlay is fully open on a case study.
    ///
    /// # Panics
    ///
    /// Panics if the modal is not [`ModalPhase::Open`] on `case_study`.
    pub fn assert_open(&self, case_study: &str) -> &Self {
        assert_eq!(self.phase(), ModalPhase::Open, "expected modal to be open");
        assert_eq!(self.modal.active_case_study(), Some(case_study));
        assert!(self.document().overlay_visible(), "overlay should be visible");
        assert!(!self.document().aria_hidden(), "overlay should not be aria-hidden");
        self
    }

    /// Assert the overlay is closed and hidden.
    ///
    /// # Panics
    ///
    /// Panics if the modal is not [`ModalPhase::Closed`].
    pub fn assert_closed(&self) -> &Self {
        assert_eq!(self.phase(), ModalPhase::Closed, "expected modal to be closed");
        assert!(self.modal.active_case_study().is_none());
        assert!(!self.document().overlay_visible(), "overlay should be hidden");
        assert!(self.document().aria_hidden(), "overlay should be aria-hidden");
        assert!(!self.document().scroll_locked(), "scroll should be released");
        self
    }

    /// Assert which element has focus.
    ///
    /// # Panics
    ///
    /// Panics if focus is elsewhere.
    pub fn assert_focused(&self, element: ElementId) -> &Self {
        assert_eq!(
            self.focused(),
            Some(element),
            "expected {element:?} to have focus"
        );
        self
    }

    /// Assert the text of a slot.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, slot: Slot, expected: &str) -> &Self {
        let actual = self.document().text(slot);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for {slot:?}"
        );
        self
    }

    // === Internal ===

    fn dispatch(&mut self, event: Event) -> &mut Self {
        if let Some(message) = self.modal.recover_stalled() {
            self.messages.push(message);
        }
        let response = self.modal.handle_event(&event);
        if let Some(message) = &response.message {
            self.messages.push(message.clone());
        }
        self.last_response = response;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_has_trigger_per_study() {
        let harness = Harness::new();
        for id in ["skybank", "pulse", "eternal", "injoy"] {
            assert!(harness.document().trigger(id).is_some());
        }
    }

    #[test]
    fn test_harness_click_trigger_records_message() {
        let mut harness = Harness::new();
        harness.click_trigger("pulse");
        assert!(harness.last_response().prevent_default);
        assert!(matches!(
            harness.messages(),
            [ModalMessage::Opened(opened)] if opened.case_study == "pulse"
        ));
    }

    #[test]
    fn test_harness_complete_transitions_opens() {
        let mut harness = Harness::new();
        harness.click_trigger("eternal").complete_transitions();
        harness.assert_open("eternal");
        assert!(harness.modal().engine().pending().is_empty());
    }

    #[test]
    fn test_harness_take_messages() {
        let mut harness = Harness::new();
        harness.open("injoy").complete_transitions().close().complete_transitions();
        assert_eq!(harness.take_messages().len(), 2);
        assert!(harness.messages().is_empty());
        harness.assert_closed();
    }

    #[test]
    #[should_panic(expected = "no trigger")]
    fn test_harness_missing_trigger_panics() {
        let harness = Harness::new();
        harness.trigger("does-not-exist");
    }
}
