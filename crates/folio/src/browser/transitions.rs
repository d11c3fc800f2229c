//! CSS-driven [`TransitionEngine`].

use super::markup;
use folio_core::{ModalPart, Transition, TransitionEngine, TransitionTicket};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// Completion callback.
pub type OnComplete = Rc<dyn Fn(TransitionTicket)>;

/// Runs transitions as inline CSS transitions and reports completion from a
/// `setTimeout` once the duration has elapsed.
///
/// If the timer cannot be scheduled the end styles are applied at once and
/// the ticket is handed out through [`TransitionEngine::take_stalled`].
pub struct CssTransitions {
    window: Window,
    container: HtmlElement,
    backdrop: HtmlElement,
    on_complete: OnComplete,
    stalled: Option<TransitionTicket>,
}

impl CssTransitions {
    /// Create an engine animating the overlay's container and backdrop.
    pub fn new(
        window: Window,
        container: HtmlElement,
        backdrop: HtmlElement,
        on_complete: OnComplete,
    ) -> Self {
        Self {
            window,
            container,
            backdrop,
            on_complete,
            stalled: None,
        }
    }

    const fn element(&self, part: ModalPart) -> &HtmlElement {
        match part {
            ModalPart::Container => &self.container,
            ModalPart::Backdrop => &self.backdrop,
        }
    }

    fn set_final(&self, transition: &Transition) {
        for track in &transition.tracks {
            let style = self.element(track.part).style();
            let result = style
                .set_property("transition", "none")
                .and_then(|()| style.set_property("transform", &markup::transform_value(track.to)))
                .and_then(|()| style.set_property("opacity", &markup::opacity_value(track.to)));
            if let Err(err) = result {
                tracing::warn!(?err, part = ?track.part, "could not apply final style");
            }
        }
    }
}

impl TransitionEngine for CssTransitions {
    fn start(&mut self, transition: &Transition, ticket: TransitionTicket) {
        let timing = markup::transition_value(transition.duration_ms, transition.easing);

        for track in &transition.tracks {
            let element = self.element(track.part);
            let style = element.style();
            let result = style
                .set_property("transition", "none")
                .and_then(|()| style.set_property("transform", &markup::transform_value(track.from)))
                .and_then(|()| style.set_property("opacity", &markup::opacity_value(track.from)));
            // Read layout so the start values apply before the transition does.
            let _ = element.offset_width();
            let result = result
                .and_then(|()| style.set_property("transition", &timing))
                .and_then(|()| style.set_property("transform", &markup::transform_value(track.to)))
                .and_then(|()| style.set_property("opacity", &markup::opacity_value(track.to)));
            if let Err(err) = result {
                tracing::warn!(?err, part = ?track.part, "could not apply transition style");
            }
        }

        let on_complete = Rc::clone(&self.on_complete);
        let callback = Closure::once_into_js(move || on_complete(ticket));
        let timeout = i32::try_from(transition.duration_ms).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout,
            )
        {
            tracing::warn!(?err, ticket = ticket.0, "could not schedule transition end");
            self.set_final(transition);
            self.stalled = Some(ticket);
        }
    }

    fn apply_final(&mut self, transition: &Transition) {
        self.set_final(transition);
    }

    fn take_stalled(&mut self) -> Option<TransitionTicket> {
        self.stalled.take()
    }
}
