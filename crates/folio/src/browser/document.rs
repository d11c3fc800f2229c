//! [`Document`] over the live page.

use super::error::MountError;
use super::markup;
use folio_core::{Document, ElementId, ModalPart, Region, Slot};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node, NodeList};

/// The case-study overlay of a loaded page.
///
/// Elements are handed to the controller as [`ElementId`]s. An id is the
/// element's position in a registry that grows the first time the element
/// is seen. Ids are never reused. Entries for elements that have left the
/// page are released by [`WebDocument::prune`] unless they were pinned.
pub struct WebDocument {
    document: web_sys::Document,
    body: Option<HtmlElement>,
    root: Element,
    container: HtmlElement,
    backdrop: HtmlElement,
    close_button: Element,
    title: Element,
    problem: Element,
    solution: Element,
    outcomes: Element,
    gallery: Element,
    registry: RefCell<Vec<Option<Entry>>>,
}

struct Entry {
    element: Element,
    pinned: bool,
}

impl WebDocument {
    /// Find the overlay and its parts.
    pub fn mount(document: &web_sys::Document) -> Result<Self, MountError> {
        let root = document
            .get_element_by_id(markup::ROOT_ID)
            .ok_or_else(|| MountError::MissingRoot(markup::ROOT_ID.to_string()))?;

        Ok(Self {
            document: document.clone(),
            body: document.body(),
            container: find_html(&root, markup::part_selector(ModalPart::Container))?,
            backdrop: find_html(&root, markup::part_selector(ModalPart::Backdrop))?,
            close_button: find(&root, markup::CLOSE_BUTTON)?,
            title: find(&root, markup::slot_selector(Slot::Title))?,
            problem: find(&root, markup::slot_selector(Slot::Problem))?,
            solution: find(&root, markup::slot_selector(Slot::Solution))?,
            outcomes: find(&root, markup::slot_selector(Slot::Outcomes))?,
            gallery: find(&root, markup::slot_selector(Slot::Gallery))?,
            root,
            registry: RefCell::new(Vec::new()),
        })
    }

    /// Overlay root.
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Animated part.
    pub const fn part(&self, part: ModalPart) -> &HtmlElement {
        match part {
            ModalPart::Container => &self.container,
            ModalPart::Backdrop => &self.backdrop,
        }
    }

    /// Close control.
    pub const fn close_button(&self) -> &Element {
        &self.close_button
    }

    /// Every `[data-case-study]` control on the page.
    pub fn triggers(&self) -> Vec<Element> {
        self.document
            .query_selector_all(markup::TRIGGER)
            .map(elements)
            .unwrap_or_default()
    }

    /// Id of an element, registering it on first sight.
    pub fn id_of(&self, element: &Element) -> ElementId {
        self.register(element, false)
    }

    /// Id of an element that stays registered while detached, such as a
    /// control with a listener attached.
    pub fn pin(&self, element: &Element) -> ElementId {
        self.register(element, true)
    }

    /// Element behind an id.
    pub fn element(&self, id: ElementId) -> Option<Element> {
        let index = usize::try_from(id.0).ok()?;
        self.registry
            .borrow()
            .get(index)?
            .as_ref()
            .map(|entry| entry.element.clone())
    }

    /// Release unpinned elements that are no longer in the page. Their ids
    /// stay retired.
    pub fn prune(&self) {
        let mut released = 0_usize;
        for slot in self.registry.borrow_mut().iter_mut() {
            if slot
                .as_ref()
                .is_some_and(|entry| !entry.pinned && !entry.element.is_connected())
            {
                *slot = None;
                released += 1;
            }
        }
        if released > 0 {
            tracing::trace!(released, "released detached elements");
        }
    }

    fn register(&self, element: &Element, pinned: bool) -> ElementId {
        let node: &Node = element;
        let mut registry = self.registry.borrow_mut();
        let known = registry.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|entry| entry.element.is_same_node(Some(node)))
        });
        let index = if let Some(index) = known {
            if let Some(entry) = registry[index].as_mut() {
                entry.pinned |= pinned;
            }
            index
        } else {
            registry.push(Some(Entry {
                element: element.clone(),
                pinned,
            }));
            registry.len() - 1
        };
        ElementId(index as u64)
    }

    fn slot(&self, slot: Slot) -> &Element {
        match slot {
            Slot::Title => &self.title,
            Slot::Problem => &self.problem,
            Slot::Solution => &self.solution,
            Slot::Outcomes => &self.outcomes,
            Slot::Gallery => &self.gallery,
        }
    }
}

impl Document for WebDocument {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.slot(slot).set_text_content(Some(text));
    }

    fn set_items(&mut self, slot: Slot, items: &[String]) {
        let parent = self.slot(slot);
        parent.set_text_content(None);
        let (tag, class) = markup::item_markup(slot);
        for item in items {
            let child = match self.document.create_element(tag) {
                Ok(child) => child,
                Err(err) => {
                    tracing::warn!(?err, tag, "could not create list item");
                    return;
                }
            };
            if let Some(class) = class {
                child.set_class_name(class);
            }
            child.set_text_content(Some(item));
            if let Err(err) = parent.append_child(&child) {
                tracing::warn!(?err, "could not append list item");
            }
        }
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        if let Err(err) = self
            .root
            .class_list()
            .toggle_with_force(markup::OPEN_CLASS, visible)
        {
            tracing::warn!(?err, "could not toggle open class");
        }
        if let Err(err) = self
            .root
            .set_attribute("aria-hidden", markup::aria_hidden_value(visible))
        {
            tracing::warn!(?err, "could not set aria-hidden");
        }
        if !visible {
            self.prune();
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        if let Err(err) = body
            .style()
            .set_property("overflow", markup::overflow_value(locked))
        {
            tracing::warn!(?err, "could not toggle scroll-lock");
        }
    }

    fn focusable_descendants(&self) -> Vec<ElementId> {
        self.prune();
        self.root
            .query_selector_all(markup::FOCUSABLE)
            .map(elements)
            .unwrap_or_default()
            .iter()
            .map(|el| self.id_of(el))
            .collect()
    }

    fn focus(&mut self, element: ElementId) {
        let Some(el) = self
            .element(element)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        if let Err(err) = el.focus() {
            tracing::debug!(?err, element = element.0, "focus failed");
        }
    }

    fn active_element(&self) -> Option<ElementId> {
        self.document
            .active_element()
            .map(|el| self.id_of(&el))
    }

    fn contains(&self, element: ElementId) -> bool {
        self.element(element).is_some_and(|el| el.is_connected())
    }

    fn region(&self, element: ElementId) -> Region {
        let Some(el) = self.element(element) else {
            return Region::Outside;
        };
        if same(&el, &self.close_button) || contains_node(&self.close_button, &el) {
            return Region::CloseButton;
        }
        if same(&el, &self.backdrop) {
            return Region::Backdrop;
        }
        if let Some(id) = trigger_id(&el) {
            return Region::Trigger(id);
        }
        if contains_node(&self.container, &el) {
            return Region::Panel;
        }
        Region::Outside
    }
}

fn find(root: &Element, selector: &'static str) -> Result<Element, MountError> {
    root.query_selector(selector)
        .map_err(|err| MountError::Dom(format!("{err:?}")))?
        .ok_or(MountError::MissingPart(selector))
}

fn find_html(root: &Element, selector: &'static str) -> Result<HtmlElement, MountError> {
    find(root, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtml(selector))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn same(a: &Node, b: &Node) -> bool {
    a.is_same_node(Some(b))
}

fn contains_node(ancestor: &Node, node: &Node) -> bool {
    ancestor.contains(Some(node))
}

fn trigger_id(element: &Element) -> Option<String> {
    element
        .closest(markup::TRIGGER)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()?
        .dataset()
        .get(markup::TRIGGER_DATA_KEY)
}
