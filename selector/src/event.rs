//! Element-targeted input events.
//!
//! [`FocusState::process_events`](crate::FocusState::process_events) turns
//! raw crossterm input into these. Keys go to whatever holds focus, mouse
//! input goes to whatever lies under the pointer.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton as CtButton};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press. `target` is the focused element, if any.
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// A mouse press. `target` is the deepest clickable element hit, so a
    /// press on plain text lands on its nearest clickable ancestor.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer movement. `target` is the deepest element hit.
    MouseMove {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    Focus { target: String },
    /// `target` lost focus; `new_target` is where it went.
    Blur {
        target: String,
        new_target: Option<String>,
    },
    Resize { width: u16, height: u16 },
}

/// The keys a selector cares about. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Up,
    Down,
    Home,
    End,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Whether a handler acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Ignored,
    Consumed,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Other,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtButton> for MouseButton {
    fn from(button: CtButton) -> Self {
        match button {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}
