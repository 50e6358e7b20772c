use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::hit::{hit_test, hit_test_any, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to `id`, returning the Blur/Focus events this causes.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur {
                target: old,
                new_target: Some(id.to_string()),
            });
        }
        self.focused = Some(id.to_string());
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// Clear focus, returning the Blur event if something was focused.
    pub fn blur(&mut self) -> Vec<Event> {
        match self.focused.take() {
            Some(old) => vec![Event::Blur {
                target: old,
                new_target: None,
            }],
            None => Vec::new(),
        }
    }

    /// Focus the next focusable element (Tab navigation).
    pub fn focus_next(&mut self, root: &Element) -> Vec<Event> {
        self.cycle(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Vec<Event> {
        self.cycle(root, -1)
    }

    fn cycle(&mut self, root: &Element, step: isize) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }
        let len = focusable.len() as isize;
        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));
        let next = match current {
            Some(i) => (i as isize + step).rem_euclid(len),
            None if step > 0 => 0,
            None => len - 1,
        };
        let id = focusable[next as usize].clone();
        self.focus(&id)
    }

    /// Drop focus silently if the focused element is no longer in the tree.
    pub fn retain(&mut self, root: &Element) {
        let gone = self
            .focused
            .as_deref()
            .is_some_and(|id| find_element(root, id).is_none_or(|el| !el.visible));
        if gone {
            log::debug!("FocusState: dropping stale focus {:?}", self.focused);
            self.focused = None;
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Keys go to the focused element; Tab/BackTab move focus. A left press
    /// moves focus to the focusable element under the pointer (or clears it)
    /// before the click itself is emitted.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => events.extend(self.focus_next(root)),
                        Key::BackTab => events.extend(self.focus_prev(root)),
                        _ => events.push(Event::Key {
                            target: self.focused.clone(),
                            key,
                            modifiers,
                        }),
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    let (x, y) = (mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(button) => {
                            let button: MouseButton = button.into();
                            if button == MouseButton::Left {
                                match hit_test_focusable(layout, root, x, y) {
                                    Some(id) => events.extend(self.focus(&id)),
                                    None => events.extend(self.blur()),
                                }
                            }
                            events.push(Event::Click {
                                target: hit_test(layout, root, x, y),
                                x,
                                y,
                                button,
                            });
                        }
                        MouseEventKind::Moved => events.push(Event::MouseMove {
                            target: hit_test_any(layout, root, x, y),
                            x,
                            y,
                        }),
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }

        events
    }
}

/// Collect all focusable element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if !element.visible {
        return;
    }
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
