//! Overlay markup contract: selectors, class names, and inline style values.

use folio_core::{EasingFunction, ModalPart, Slot, VisualState};

/// Id of the overlay root.
pub const ROOT_ID: &str = "case-study-modal";
/// Content panel.
pub const CONTAINER: &str = ".modal__container";
/// Dimmed backdrop.
pub const BACKDROP: &str = ".modal__backdrop";
/// Close control.
pub const CLOSE_BUTTON: &str = ".modal__close";
/// Controls that open a case study.
pub const TRIGGER: &str = "[data-case-study]";
/// `dataset` key holding the case-study id (`data-case-study`).
pub const TRIGGER_DATA_KEY: &str = "caseStudy";
/// Elements the focus trap cycles through.
pub const FOCUSABLE: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;
/// Class set on the root while the overlay is up.
pub const OPEN_CLASS: &str = "is-open";
/// Class of each gallery placeholder.
pub const GALLERY_ITEM_CLASS: &str = "modal__gallery-item";

/// Selector of a text slot.
#[must_use]
pub const fn slot_selector(slot: Slot) -> &'static str {
    match slot {
        Slot::Title => ".modal__title",
        Slot::Problem => ".modal__problem",
        Slot::Solution => ".modal__solution",
        Slot::Outcomes => ".modal__outcomes",
        Slot::Gallery => ".modal__gallery",
    }
}

/// Selector of an animated part.
#[must_use]
pub const fn part_selector(part: ModalPart) -> &'static str {
    match part {
        ModalPart::Container => CONTAINER,
        ModalPart::Backdrop => BACKDROP,
    }
}

/// Tag and class of the children written into a list slot.
#[must_use]
pub const fn item_markup(slot: Slot) -> (&'static str, Option<&'static str>) {
    match slot {
        Slot::Gallery => ("div", Some(GALLERY_ITEM_CLASS)),
        _ => ("li", None),
    }
}

/// Inline `transform` for a visual state.
#[must_use]
pub fn transform_value(state: VisualState) -> String {
    format!("scale({})", state.scale)
}

/// Inline `opacity` for a visual state.
#[must_use]
pub fn opacity_value(state: VisualState) -> String {
    format!("{}", state.opacity)
}

/// Inline `transition` for a duration and easing.
#[must_use]
pub fn transition_value(duration_ms: u32, easing: EasingFunction) -> String {
    let timing = easing.css();
    format!("transform {duration_ms}ms {timing}, opacity {duration_ms}ms {timing}")
}

/// `aria-hidden` value for an overlay visibility.
#[must_use]
pub const fn aria_hidden_value(visible: bool) -> &'static str {
    if visible {
        "false"
    } else {
        "true"
    }
}

/// `document.body.style.overflow` value for a scroll-lock state.
#[must_use]
pub const fn overflow_value(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_slot_selectors() {
        assert_eq!(slot_selector(Slot::Title), ".modal__title");
        assert_eq!(slot_selector(Slot::Outcomes), ".modal__outcomes");
        assert_eq!(slot_selector(Slot::Gallery), ".modal__gallery");
        assert_eq!(part_selector(ModalPart::Backdrop), BACKDROP);
    }

    #[test]
    fn test_markup_item_tags() {
        assert_eq!(item_markup(Slot::Outcomes), ("li", None));
        assert_eq!(
            item_markup(Slot::Gallery),
            ("div", Some("modal__gallery-item"))
        );
    }

    #[test]
    fn test_markup_style_values() {
        assert_eq!(transform_value(VisualState::new(0.95, 0.0)), "scale(0.95)");
        assert_eq!(transform_value(VisualState::SHOWN), "scale(1)");
        assert_eq!(opacity_value(VisualState::new(1.0, 0.0)), "0");
        assert_eq!(
            transition_value(200, EasingFunction::EaseInQuad),
            "transform 200ms cubic-bezier(0.11, 0, 0.5, 0), opacity 200ms cubic-bezier(0.11, 0, 0.5, 0)"
        );
    }

    #[test]
    fn test_markup_state_attributes() {
        assert_eq!(aria_hidden_value(true), "false");
        assert_eq!(aria_hidden_value(false), "true");
        assert_eq!(overflow_value(true), "hidden");
        assert_eq!(overflow_value(false), "");
    }

    #[test]
    fn test_markup_focusable_selector() {
        assert!(FOCUSABLE.contains(r#"[tabindex]:not([tabindex="-1"])"#));
        assert!(FOCUSABLE.starts_with("button, [href]"));
    }
}
