//! Case-study modal controller.
//!
//! The controller owns the overlay for its whole life: it fills the overlay
//! from the [`CaseStudyCatalog`], traps keyboard focus while the overlay is
//! up, runs entry and exit transitions through a [`TransitionEngine`], and
//! hands focus back to the control that opened it.
//!
//! ```text
//! Closed --open--> Opening --done--> Open --close--> Closing --done--> Closed
//!                     |                                  |
//!                     +--close--> Closing      Opening <--open--+
//! ```

use folio_core::{
    CaseStudy, CaseStudyCatalog, Document, ElementId, Event, FocusDirection, FocusTrap, Key,
    ModalConfig, Region, Slot, TabOutcome, TransitionEngine, TransitionTicket,
};
use serde::Serialize;

/// Lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Hidden, nothing trapped
    Closed,
    /// Entry transition running; the focus trap is already installed
    Opening {
        /// Ticket of the entry transition
        ticket: TransitionTicket,
    },
    /// Fully shown
    Open,
    /// Exit transition running; the focus trap stays active until it ends
    Closing {
        /// Ticket of the exit transition
        ticket: TransitionTicket,
        /// What asked for the close
        reason: CloseReason,
    },
}

/// Reason the modal was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Closed via escape key
    Escape,
    /// Closed via backdrop click
    Backdrop,
    /// Closed via close button
    CloseButton,
    /// Closed programmatically
    Programmatic,
}

/// Message emitted when the modal starts showing a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalOpened {
    /// Id of the case study now displayed
    pub case_study: String,
}

/// Message emitted once the modal is fully hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModalClosed {
    /// Reason for closure
    pub reason: CloseReason,
}

/// Messages produced by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModalMessage {
    /// See [`ModalOpened`]
    Opened(ModalOpened),
    /// See [`ModalClosed`]
    Closed(ModalClosed),
}

/// What the host should do after delivering an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the host's default action (e.g. native tab navigation)
    pub prevent_default: bool,
    /// Message produced while handling the event
    pub message: Option<ModalMessage>,
}

impl EventResponse {
    const fn pass_through() -> Self {
        Self {
            prevent_default: false,
            message: None,
        }
    }

    const fn consumed(message: Option<ModalMessage>) -> Self {
        Self {
            prevent_default: true,
            message,
        }
    }
}

/// Case-study modal controller.
pub struct ModalController<D, E> {
    document: D,
    engine: E,
    catalog: CaseStudyCatalog,
    config: ModalConfig,
    phase: ModalPhase,
    active: Option<String>,
    trigger: Option<ElementId>,
    trap: FocusTrap,
    next_ticket: u64,
}

impl<D: Document, E: TransitionEngine> ModalController<D, E> {
    /// Create a closed controller with the built-in catalog and default config.
    pub fn new(document: D, engine: E) -> Self {
        Self::with_catalog(
            document,
            engine,
            CaseStudyCatalog::builtin(),
            ModalConfig::default(),
        )
    }

    /// Create a closed controller.
    pub fn with_catalog(
        document: D,
        engine: E,
        catalog: CaseStudyCatalog,
        config: ModalConfig,
    ) -> Self {
        Self {
            document,
            engine,
            catalog,
            config,
            phase: ModalPhase::Closed,
            active: None,
            trigger: None,
            trap: FocusTrap::default(),
            next_ticket: 0,
        }
    }

    // === Queries ===

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the overlay is visible with focus trapped (any phase but
    /// [`ModalPhase::Closed`]).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Id of the case study on display.
    #[must_use]
    pub fn active_case_study(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Control focus returns to on close.
    #[must_use]
    pub const fn trigger(&self) -> Option<ElementId> {
        self.trigger
    }

    /// Focusable elements inside the overlay, in tab order.
    #[must_use]
    pub fn focusable_elements(&self) -> &[ElementId] {
        self.trap.elements()
    }

    /// Case studies this controller can show.
    #[must_use]
    pub const fn catalog(&self) -> &CaseStudyCatalog {
        &self.catalog
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Host document.
    pub const fn document(&self) -> &D {
        &self.document
    }

    /// Host document, mutably.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Transition engine.
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Transition engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // === Operations ===

    /// Show a case study without remembering a trigger.
    ///
    /// Returns `None` when the id is unknown or the same study is already
    /// opening.
    pub fn open(&mut self, case_study: &str) -> Option<ModalOpened> {
        self.open_study(case_study, None)
    }

    /// Show a case study on behalf of the control `trigger`; focus returns
    /// to it on close.
    pub fn open_from(&mut self, case_study: &str, trigger: ElementId) -> Option<ModalOpened> {
        self.open_study(case_study, Some(trigger))
    }

    /// Begin closing programmatically.
    ///
    /// Returns the closed message only when the exit transition is instant.
    pub fn close(&mut self) -> Option<ModalClosed> {
        self.close_with(CloseReason::Programmatic)
    }

    /// Begin closing for a given reason. Repeated calls while closing are
    /// coalesced into the exit transition already running.
    pub fn close_with(&mut self, reason: CloseReason) -> Option<ModalClosed> {
        match self.phase {
            ModalPhase::Closed => None,
            ModalPhase::Closing { ticket, .. } => {
                tracing::trace!(ticket = ticket.0, "close coalesced into running exit");
                None
            }
            ModalPhase::Opening { .. } | ModalPhase::Open => {
                let transition = self.config.exit_transition();
                if transition.is_instant() {
                    self.engine.apply_final(&transition);
                    return Some(self.finish_close(reason));
                }
                let ticket = self.issue_ticket();
                self.set_phase(ModalPhase::Closing { ticket, reason });
                self.engine.start(&transition, ticket);
                None
            }
        }
    }

    /// Completion callback from the transition engine. Tickets of superseded
    /// transitions are ignored.
    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> Option<ModalMessage> {
        match self.phase {
            ModalPhase::Opening { ticket: current } if current == ticket => {
                self.set_phase(ModalPhase::Open);
                None
            }
            ModalPhase::Closing {
                ticket: current,
                reason,
            } if current == ticket => Some(ModalMessage::Closed(self.finish_close(reason))),
            _ => {
                tracing::trace!(ticket = ticket.0, "stale transition completion ignored");
                None
            }
        }
    }

    /// Finish a transition whose completion the engine could not schedule.
    pub fn recover_stalled(&mut self) -> Option<ModalMessage> {
        let ticket = self.engine.take_stalled()?;
        tracing::debug!(ticket = ticket.0, "finishing stalled transition");
        self.finish_transition(ticket)
    }

    /// Deliver an input event.
    pub fn handle_event(&mut self, event: &Event) -> EventResponse {
        match *event {
            Event::TransitionEnd { ticket } => EventResponse {
                prevent_default: false,
                message: self.finish_transition(ticket),
            },
            Event::Click { target } => self.handle_click(target),
            Event::KeyDown { key, modifiers } => {
                if !self.is_open() || modifiers.ctrl || modifiers.alt || modifiers.meta {
                    return EventResponse::pass_through();
                }
                match key {
                    Key::Escape if self.config.close_on_escape => EventResponse::consumed(
                        self.close_with(CloseReason::Escape)
                            .map(ModalMessage::Closed),
                    ),
                    Key::Tab => {
                        let current = self.document.active_element();
                        match self
                            .trap
                            .handle_tab(current, FocusDirection::from_tab(modifiers))
                        {
                            TabOutcome::Moved(next) => {
                                self.document.focus(next);
                                EventResponse::consumed(None)
                            }
                            TabOutcome::PassThrough => EventResponse::pass_through(),
                        }
                    }
                    _ => EventResponse::pass_through(),
                }
            }
        }
    }

    fn handle_click(&mut self, target: ElementId) -> EventResponse {
        match self.document.region(target) {
            Region::Trigger(id) => match self.open_from(&id, target) {
                Some(opened) => EventResponse::consumed(Some(ModalMessage::Opened(opened))),
                None => EventResponse::pass_through(),
            },
            Region::Backdrop if self.is_open() && self.config.close_on_backdrop => {
                EventResponse::consumed(
                    self.close_with(CloseReason::Backdrop)
                        .map(ModalMessage::Closed),
                )
            }
            Region::CloseButton if self.is_open() => EventResponse::consumed(
                self.close_with(CloseReason::CloseButton)
                    .map(ModalMessage::Closed),
            ),
            _ => EventResponse::pass_through(),
        }
    }

    // === Internals ===

    fn open_study(&mut self, id: &str, trigger: Option<ElementId>) -> Option<ModalOpened> {
        let Some(study) = self.catalog.get(id) else {
            tracing::debug!(case_study = id, "open ignored: unknown case study");
            return None;
        };

        if matches!(self.phase, ModalPhase::Opening { .. })
            && self.active.as_deref() == Some(id)
        {
            tracing::trace!(case_study = id, "open ignored: already opening");
            return None;
        }

        Self::render(&mut self.document, study, &self.config.gallery);
        self.active = Some(id.to_string());
        if trigger.is_some() {
            self.trigger = trigger;
        }

        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing { .. } => {
                self.document.set_overlay_visible(true);
                self.document.set_scroll_locked(true);
                self.install_trap();
                self.begin_enter();
            }
            ModalPhase::Opening { .. } | ModalPhase::Open => self.install_trap(),
        }

        Some(ModalOpened {
            case_study: id.to_string(),
        })
    }

    fn render(document: &mut D, study: &CaseStudy, gallery: &[String]) {
        document.set_text(Slot::Title, &study.title);
        document.set_text(Slot::Problem, &study.problem);
        document.set_text(Slot::Solution, &study.solution);
        document.set_items(Slot::Outcomes, &study.outcomes);
        document.set_items(Slot::Gallery, gallery);
    }

    fn install_trap(&mut self) {
        self.trap = FocusTrap::new(self.document.focusable_descendants());
        if let Some(first) = self.trap.first() {
            self.document.focus(first);
        }
    }

    fn begin_enter(&mut self) {
        let transition = self.config.enter_transition();
        if transition.is_instant() {
            self.engine.apply_final(&transition);
            self.set_phase(ModalPhase::Open);
            return;
        }
        let ticket = self.issue_ticket();
        self.set_phase(ModalPhase::Opening { ticket });
        self.engine.start(&transition, ticket);
    }

    fn finish_close(&mut self, reason: CloseReason) -> ModalClosed {
        self.document.set_overlay_visible(false);
        self.document.set_scroll_locked(false);

        if let Some(trigger) = self.trigger.take() {
            if self.document.contains(trigger) {
                self.document.focus(trigger);
            } else {
                tracing::debug!(
                    trigger = trigger.0,
                    "focus not restored: trigger left the document"
                );
            }
        }

        self.trap = FocusTrap::default();
        self.active = None;
        self.set_phase(ModalPhase::Closed);
        ModalClosed { reason }
    }

    fn issue_ticket(&mut self) -> TransitionTicket {
        self.next_ticket += 1;
        TransitionTicket(self.next_ticket)
    }

    fn set_phase(&mut self, phase: ModalPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "modal phase");
        self.phase = phase;
    }
}
