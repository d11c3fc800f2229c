//! Input events delivered to the modal controller.

use crate::document::ElementId;
use crate::transition::TransitionTicket;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
        /// Modifier keys held during the press
        modifiers: Modifiers,
    },
    /// Primary-button click on an element
    Click {
        /// Element that received the click
        target: ElementId,
    },
    /// A visual transition finished
    TransitionEnd {
        /// Ticket handed to the engine when the transition started
        ticket: TransitionTicket,
    },
}

impl Event {
    /// Key press without modifiers.
    #[must_use]
    pub const fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Key press with shift held.
    #[must_use]
    pub const fn shift_key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }

    /// Click on an element.
    #[must_use]
    pub const fn click(target: ElementId) -> Self {
        Self::Click { target }
    }
}

/// Keyboard keys the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Enter key
    Enter,
    /// Space bar
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Printable character
    Character(char),
    /// Anything else
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Modifier key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Shift held
    pub shift: bool,
    /// Control held
    pub ctrl: bool,
    /// Alt / Option held
    pub alt: bool,
    /// Meta / Command held
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom_named() {
        assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("Tab"), Key::Tab);
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::Down);
    }

    #[test]
    fn test_key_from_dom_character() {
        assert_eq!(Key::from_dom_key("a"), Key::Character('a'));
        assert_eq!(Key::from_dom_key("é"), Key::Character('é'));
    }

    #[test]
    fn test_key_from_dom_other() {
        assert_eq!(Key::from_dom_key("F5"), Key::Other);
        assert_eq!(Key::from_dom_key(""), Key::Other);
    }

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            Event::shift_key(Key::Tab),
            Event::KeyDown {
                key: Key::Tab,
                modifiers: Modifiers::SHIFT
            }
        );
        assert_eq!(
            Event::click(ElementId(3)),
            Event::Click {
                target: ElementId(3)
            }
        );
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&Event::key(Key::Escape)).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Event::key(Key::Escape));
    }
}
