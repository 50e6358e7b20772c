//! Selector widget - a dropdown with single or multiple selection.
//!
//! The selector is controlled: the host owns the options and the current
//! [`Selection`] and hands them in as [`Props`] on every event and render.
//! The widget keeps only its open/closed state and highlighted row, and
//! reports a new selection through the change callback passed to
//! [`Selector::handle_event`].
//!
//! # Example
//!
//! ```
//! use selector::{Event, Key, KeyListeners, Modifiers, Props, SelectOption, Selection, Selector};
//!
//! let options = vec![SelectOption::new("A", 1), SelectOption::new("B", 2)];
//! let mut value = Selection::single();
//! let listeners = KeyListeners::new();
//!
//! let mut select = Selector::new("letter");
//! select.mount(&listeners);
//!
//! let enter = Event::Key {
//!     target: Some("letter".into()),
//!     key: Key::Enter,
//!     modifiers: Modifiers::new(),
//! };
//! let mut changed = None;
//! select.handle_event(&enter, &Props::new(&options, &value), |v| changed = Some(v));
//! select.handle_event(&enter, &Props::new(&options, &value), |v| changed = Some(v));
//! if let Some(next) = changed {
//!     value = next;
//! }
//! assert_eq!(value, Selection::Single(Some(SelectOption::new("A", 1))));
//! ```

mod events;
mod part;
mod render;
mod state;

pub use part::{collides, Part};
pub use state::ViewState;

use crate::listener::{KeyListeners, ListenerGuard};
use crate::option::SelectOption;
use crate::selection::Selection;

const DEFAULT_PLACEHOLDER: &str = "Choose an Option";

/// Inputs a selector reads on every event and render.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    pub options: &'a [SelectOption],
    pub value: &'a Selection,
}

impl<'a> Props<'a> {
    pub fn new(options: &'a [SelectOption], value: &'a Selection) -> Self {
        Self { options, value }
    }
}

/// A dropdown selector.
#[derive(Debug)]
pub struct Selector {
    id: String,
    placeholder: String,
    width: Option<u16>,
    disabled: bool,
    view: ViewState,
    listener: Option<ListenerGuard>,
}

impl Selector {
    /// Create a selector whose container element has id `id`.
    ///
    /// Inner elements get ids of the form `{id}-clear`, `{id}-opt-{i}` and
    /// so on, so no other selector in the same tree may use an id that
    /// extends this one (see [`collides`]).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            width: None,
            disabled: false,
            view: ViewState::default(),
            listener: None,
        }
    }

    /// Set the text shown while nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Fix the width in columns. Without one the selector fills its parent.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Mark the selector as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn is_open(&self) -> bool {
        self.view.is_open()
    }

    pub fn highlighted(&self) -> usize {
        self.view.highlighted()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Start listening for key events. Re-mounting replaces the old listener.
    pub fn mount(&mut self, listeners: &KeyListeners) {
        self.listener = None;
        for other in listeners.ids() {
            if collides(&self.id, &other) {
                log::warn!("Selector::mount id={} overlaps part ids of {}", self.id, other);
            }
        }
        self.listener = Some(listeners.attach(self.id.clone()));
    }

    /// Stop listening for key events.
    pub fn unmount(&mut self) {
        self.listener = None;
        self.view.close();
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    pub fn open(&mut self) {
        if !self.view.is_open() {
            log::debug!("Selector::open id={}", self.id);
        }
        self.view.open();
    }

    pub fn close(&mut self) {
        if self.view.is_open() {
            log::debug!("Selector::close id={}", self.id);
        }
        self.view.close();
    }

    pub fn toggle(&mut self) {
        if self.view.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Pick `option`. Returns true if `on_change` was called.
    pub fn select_option(
        &self,
        option: &SelectOption,
        props: &Props<'_>,
        mut on_change: impl FnMut(Selection),
    ) -> bool {
        match props.value.select(option) {
            Some(next) => {
                log::debug!("Selector::select id={} option={:?}", self.id, option.label);
                on_change(next);
                true
            }
            None => false,
        }
    }

    /// Remove `option` from the selection. Returns true if `on_change` was called.
    pub fn remove_option(
        &self,
        option: &SelectOption,
        props: &Props<'_>,
        mut on_change: impl FnMut(Selection),
    ) -> bool {
        match props.value.remove(option) {
            Some(next) => {
                log::debug!("Selector::remove id={} option={:?}", self.id, option.label);
                on_change(next);
                true
            }
            None => false,
        }
    }

    /// Clear the selection. Returns true if `on_change` was called.
    pub fn clear_selection(&self, props: &Props<'_>, mut on_change: impl FnMut(Selection)) -> bool {
        match props.value.clear() {
            Some(next) => {
                log::debug!("Selector::clear id={}", self.id);
                on_change(next);
                true
            }
            None => false,
        }
    }

    pub fn is_option_selected(&self, option: &SelectOption, props: &Props<'_>) -> bool {
        props.value.contains(option)
    }
}
