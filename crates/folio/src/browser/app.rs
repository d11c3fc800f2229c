//! WASM entry point.

use super::document::WebDocument;
use super::error::MountError;
use super::events::keyboard_event_to_folio;
use super::transitions::CssTransitions;
use folio_core::{
    CaseStudyCatalog, Event, ModalConfig, ModalPart, MotionPreference, TransitionTicket,
    REDUCED_MOTION_QUERY,
};
use folio_widgets::{EventResponse, ModalController, ModalMessage};
use folio_yaml::SiteManifest;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent, MouseEvent, Window};

type Controller = ModalController<WebDocument, CssTransitions>;

struct Shared {
    modal: RefCell<Controller>,
    listener: RefCell<Option<js_sys::Function>>,
}

impl Shared {
    fn dispatch(&self, event: &Event) -> EventResponse {
        let recovered = self.modal.borrow_mut().recover_stalled();
        if let Some(message) = &recovered {
            self.emit(message);
        }
        let response = self.modal.borrow_mut().handle_event(event);
        if let Some(message) = &response.message {
            self.emit(message);
        }
        response
    }

    fn finish(&self, ticket: TransitionTicket) {
        let message = self.modal.borrow_mut().finish_transition(ticket);
        if let Some(message) = message {
            self.emit(&message);
        }
    }

    fn emit(&self, message: &ModalMessage) {
        let Some(listener) = self.listener.borrow().clone() else {
            return;
        };
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Err(err) = listener.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                    tracing::warn!(?err, "modal message listener threw");
                }
            }
            Err(err) => tracing::warn!(%err, "could not serialize modal message"),
        }
    }
}

/// Case-study modal bound to the page's `#case-study-modal` overlay.
#[wasm_bindgen]
pub struct CaseStudyModal {
    shared: Rc<Shared>,
    document: web_sys::Document,
    keydown_callback: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    click_callbacks: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
}

#[wasm_bindgen]
impl CaseStudyModal {
    /// Bind the built-in case studies to the page.
    pub fn mount() -> Result<CaseStudyModal, JsValue> {
        Self::mount_with(CaseStudyCatalog::builtin(), ModalConfig::default())
    }

    /// Bind the case studies and settings of a YAML site manifest.
    pub fn mount_with_manifest(yaml: &str) -> Result<CaseStudyModal, JsValue> {
        let manifest = SiteManifest::from_yaml(yaml).map_err(|err| {
            tracing::warn!(%err, "case-study manifest rejected");
            JsValue::from_str(&err.to_string())
        })?;
        Self::mount_with(manifest.catalog(), manifest.modal)
    }

    /// Show a case study. Returns whether the id was accepted.
    pub fn open(&self, case_study: &str) -> bool {
        let opened = self.shared.modal.borrow_mut().open(case_study);
        opened.map_or(false, |opened| {
            self.shared.emit(&ModalMessage::Opened(opened));
            true
        })
    }

    /// Begin closing.
    pub fn close(&self) {
        let closed = self.shared.modal.borrow_mut().close();
        if let Some(closed) = closed {
            self.shared.emit(&ModalMessage::Closed(closed));
        }
    }

    /// Whether the overlay is up (including while it animates).
    pub fn is_open(&self) -> bool {
        self.shared.modal.borrow().is_open()
    }

    /// Id of the case study on display.
    pub fn active_case_study(&self) -> Option<String> {
        self.shared
            .modal
            .borrow()
            .active_case_study()
            .map(str::to_string)
    }

    /// Register a handler that receives message JSON, e.g.
    /// `{"type":"closed","reason":"escape"}`.
    pub fn on_message(&self, callback: js_sys::Function) {
        *self.shared.listener.borrow_mut() = Some(callback);
    }
}

impl CaseStudyModal {
    fn mount_with(catalog: CaseStudyCatalog, config: ModalConfig) -> Result<Self, JsValue> {
        console_error_panic_hook::set_once();
        Self::try_mount(catalog, config).map_err(|err| {
            tracing::warn!(%err, "case-study modal mount failed");
            JsValue::from(err)
        })
    }

    fn try_mount(catalog: CaseStudyCatalog, config: ModalConfig) -> Result<Self, MountError> {
        let window = window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let web_document = WebDocument::mount(&document)?;

        let motion = config.motion.restrict(motion_preference(&window));
        let config = config.with_motion(motion);
        let container = web_document.part(ModalPart::Container).clone();
        let backdrop = web_document.part(ModalPart::Backdrop).clone();

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            let engine = CssTransitions::new(
                window.clone(),
                container,
                backdrop,
                Rc::new(move |ticket| {
                    if let Some(shared) = weak.upgrade() {
                        shared.finish(ticket);
                    }
                }),
            );
            Shared {
                modal: RefCell::new(ModalController::with_catalog(
                    web_document,
                    engine,
                    catalog,
                    config,
                )),
                listener: RefCell::new(None),
            }
        });

        let mut app = Self {
            shared,
            document,
            keydown_callback: None,
            click_callbacks: Vec::new(),
        };
        app.listen_keydown()?;
        app.listen_clicks()?;
        Ok(app)
    }

    fn listen_keydown(&mut self) -> Result<(), MountError> {
        let shared = Rc::clone(&self.shared);
        let cb = Closure::new(move |e: KeyboardEvent| {
            let response = shared.dispatch(&keyboard_event_to_folio(&e));
            if response.prevent_default {
                e.prevent_default();
            }
        });
        self.document
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())
            .map_err(|err| MountError::Dom(format!("{err:?}")))?;
        self.keydown_callback = Some(cb);
        Ok(())
    }

    fn listen_clicks(&mut self) -> Result<(), MountError> {
        let targets = {
            let modal = self.shared.modal.borrow();
            let page = modal.document();
            let mut targets = page.triggers();
            targets.push(page.close_button().clone());
            targets.push(Element::clone(page.part(ModalPart::Backdrop)));
            targets
        };
        for element in targets {
            self.listen_click(element)?;
        }
        Ok(())
    }

    fn listen_click(&mut self, element: Element) -> Result<(), MountError> {
        let target = self.shared.modal.borrow().document().pin(&element);
        let shared = Rc::clone(&self.shared);
        let cb = Closure::new(move |e: MouseEvent| {
            let response = shared.dispatch(&Event::click(target));
            if response.prevent_default {
                e.prevent_default();
            }
        });
        element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|err| MountError::Dom(format!("{err:?}")))?;
        self.click_callbacks.push((element, cb));
        Ok(())
    }
}

impl Drop for CaseStudyModal {
    fn drop(&mut self) {
        if let Some(cb) = self.keydown_callback.take() {
            let _ = self
                .document
                .remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
        }
        for (element, cb) in self.click_callbacks.drain(..) {
            let _ =
                element.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
    }
}

fn motion_preference(window: &Window) -> MotionPreference {
    let matches = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    MotionPreference::from_query_match(matches)
}
