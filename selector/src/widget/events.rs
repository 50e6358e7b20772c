//! Event handling for the Selector widget.

use crate::event::{Event, EventResult, Key, Modifiers, MouseButton};
use crate::selection::Selection;

use super::{Part, Props, Selector};

impl Selector {
    /// Handle one event. `on_change` is invoked at most once, and only when
    /// the selection actually changes.
    pub fn handle_event(
        &mut self,
        event: &Event,
        props: &Props<'_>,
        on_change: impl FnMut(Selection),
    ) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }

        match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => self.on_key(target.as_deref(), *key, *modifiers, props, on_change),
            Event::Click { target, button, .. } => {
                self.on_click(target.as_deref(), *button, props, on_change)
            }
            Event::MouseMove { target, .. } => self.on_hover(target.as_deref(), props),
            Event::Blur { target, .. } => self.on_blur(target),
            Event::Focus { .. } | Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn part(&self, target: Option<&str>) -> Option<Part> {
        target.and_then(|id| Part::parse(&self.id, id))
    }

    fn on_key(
        &mut self,
        target: Option<&str>,
        key: Key,
        modifiers: Modifiers,
        props: &Props<'_>,
        on_change: impl FnMut(Selection),
    ) -> EventResult {
        // Only the container itself listens; nested buttons keep their keys.
        if !self.is_mounted() || target != Some(self.id.as_str()) {
            return EventResult::Ignored;
        }
        // Ignore keys with ctrl/alt modifiers
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let len = props.options.len();

        if !self.is_open() {
            // Closed state - open on Enter, Space, or either arrow
            return match key {
                Key::Enter | Key::Char(' ') | Key::Up | Key::Down => {
                    self.open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        // Open state - navigate and select
        self.view.clamp(len);
        match key {
            Key::Enter | Key::Char(' ') => {
                if let Some(option) = props.options.get(self.highlighted()) {
                    self.select_option(option, props, on_change);
                }
                self.close();
                EventResult::Consumed
            }
            Key::Up => {
                self.view.move_by(-1, len);
                EventResult::Consumed
            }
            Key::Down => {
                self.view.move_by(1, len);
                EventResult::Consumed
            }
            Key::Home => {
                self.view.first();
                EventResult::Consumed
            }
            Key::End => {
                self.view.last(len);
                EventResult::Consumed
            }
            Key::Escape => {
                self.close();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_click(
        &mut self,
        target: Option<&str>,
        button: MouseButton,
        props: &Props<'_>,
        on_change: impl FnMut(Selection),
    ) -> EventResult {
        if button != MouseButton::Left {
            return EventResult::Ignored;
        }
        let Some(part) = self.part(target) else {
            return EventResult::Ignored;
        };

        match part {
            Part::Option(index) => {
                // Row clicks select and close; they never reach the toggle.
                if let Some(option) = props.options.get(index) {
                    self.select_option(option, props, on_change);
                }
                self.close();
            }
            Part::Badge(index) | Part::Remove(index) => {
                if let Some(option) = props.value.options().get(index) {
                    self.remove_option(option, props, on_change);
                }
            }
            Part::Clear => {
                self.clear_selection(props, on_change);
            }
            Part::Container
            | Part::Header
            | Part::Value
            | Part::Placeholder
            | Part::Divider
            | Part::Caret
            | Part::Options => self.toggle(),
        }
        EventResult::Consumed
    }

    fn on_hover(&mut self, target: Option<&str>, props: &Props<'_>) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        // Hover moves the same highlight the arrow keys do.
        match self.part(target) {
            Some(Part::Option(index)) if index < props.options.len() => {
                self.view.set(index, props.options.len());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_blur(&mut self, target: &str) -> EventResult {
        if Part::parse(&self.id, target).is_none() {
            return EventResult::Ignored;
        }
        // Close dropdown when focus leaves anything inside the selector
        self.close();
        EventResult::Consumed
    }
}
