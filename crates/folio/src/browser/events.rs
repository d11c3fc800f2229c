//! Browser event handling - converts web events to folio Events.

use folio_core::{Event, Key, Modifiers};
use web_sys::KeyboardEvent;

/// Convert a web_sys KeyboardEvent to a folio Event.
pub fn keyboard_event_to_folio(event: &KeyboardEvent) -> Event {
    Event::KeyDown {
        key: Key::from_dom_key(&event.key()),
        modifiers: modifiers(event),
    }
}

fn modifiers(event: &KeyboardEvent) -> Modifiers {
    Modifiers {
        shift: event.shift_key(),
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    }
}
