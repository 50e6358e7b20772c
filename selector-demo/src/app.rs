//! The demo host: owns the options and the selection, and feeds terminal
//! events to one selector.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use selector::{
    Element, Event, FocusState, KeyListeners, Props, SelectOption, Selection, Selector, Terminal,
    Theme,
};

use crate::config::DemoConfig;
use crate::error::DemoError;

const SELECT_ID: &str = "demo-select";

pub struct App {
    options: Vec<SelectOption>,
    value: Selection,
    select: Selector,
    listeners: KeyListeners,
    focus: FocusState,
    theme: Theme,
}

impl App {
    pub fn new(config: DemoConfig) -> Result<Self, DemoError> {
        let theme = config.theme()?;

        let mut select = Selector::new(SELECT_ID);
        if let Some(placeholder) = config.placeholder {
            select = select.placeholder(placeholder);
        }
        if let Some(width) = config.width {
            select = select.width(width);
        }
        if config.disabled {
            select = select.disabled();
        }

        let value = if config.multiple {
            Selection::multiple()
        } else {
            Selection::single()
        };

        Ok(Self {
            options: config.options,
            value,
            select,
            listeners: KeyListeners::new(),
            focus: FocusState::new(),
            theme,
        })
    }

    /// Run until the user quits. The terminal is restored on return.
    pub async fn run(mut self) -> Result<(), DemoError> {
        let mut terminal = Terminal::new()?;
        let mut events = EventStream::new();

        self.select.mount(&self.listeners);
        self.focus.focus(SELECT_ID);

        let mut root = self.view();
        terminal.render(&root, &self.theme)?;

        while let Some(raw) = events.next().await {
            let raw = raw?;
            if self.is_quit(&raw) {
                log::info!("Quit requested");
                break;
            }

            let routed = self.focus.process_events(&[raw], &root, terminal.layout());
            for event in &routed {
                self.dispatch(event);
            }

            root = self.view();
            self.focus.retain(&root);
            terminal.render(&root, &self.theme)?;
        }

        self.select.unmount();
        Ok(())
    }

    fn is_quit(&self, raw: &CrosstermEvent) -> bool {
        let CrosstermEvent::Key(key) = raw else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::Char('q') => !self.select.is_open(),
            _ => false,
        }
    }

    fn dispatch(&mut self, event: &Event) {
        // Keys only reach selectors that are listening.
        if let Event::Key {
            target: Some(target),
            ..
        } = event
        {
            if !self.listeners.is_attached(target) {
                return;
            }
        }

        let mut changed = None;
        let props = Props::new(&self.options, &self.value);
        self.select
            .handle_event(event, &props, |next| changed = Some(next));

        if let Some(next) = changed {
            log::info!("Selection changed to {}", describe(&next));
            self.value = next;
        }
    }

    fn view(&self) -> Element {
        let props = Props::new(&self.options, &self.value);
        Element::col()
            .id("root")
            .gap(1)
            .child(Element::text("Selector demo").id("title"))
            .child(self.select.render(&props))
            .child(Element::text(format!("Value: {}", describe(&self.value))).id("status"))
            .child(
                Element::text("Tab: focus  Enter/Space: open  Esc: close  q: quit").id("help"),
            )
    }
}

fn describe(value: &Selection) -> String {
    match value {
        Selection::Single(None) => "none".to_string(),
        Selection::Single(Some(option)) => format!("{} ({})", option.label, option.value),
        Selection::Multiple(options) => {
            let items: Vec<String> = options
                .iter()
                .map(|o| format!("{} ({})", o.label, o.value))
                .collect();
            format!("[{}]", items.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Selection::single()), "none");
        assert_eq!(
            describe(&Selection::Single(Some(SelectOption::new("B", 2)))),
            "B (2)"
        );
        assert_eq!(
            describe(&Selection::Multiple(vec![
                SelectOption::new("A", 1),
                SelectOption::new("C", "c"),
            ])),
            "[A (1), C (c)]"
        );
        assert_eq!(describe(&Selection::multiple()), "[]");
    }

    #[test]
    fn test_dispatch_updates_owned_selection() {
        let mut app = App::new(DemoConfig::default()).unwrap();
        app.select.mount(&app.listeners);

        let enter = Event::Key {
            target: Some(SELECT_ID.to_string()),
            key: selector::Key::Enter,
            modifiers: selector::Modifiers::new(),
        };
        app.dispatch(&enter);
        app.dispatch(&enter);
        assert_eq!(app.value, Selection::Single(Some(SelectOption::new("A", 1))));
    }

    #[test]
    fn test_detached_listener_blocks_keys() {
        let mut app = App::new(DemoConfig::default()).unwrap();
        let enter = Event::Key {
            target: Some(SELECT_ID.to_string()),
            key: selector::Key::Enter,
            modifiers: selector::Modifiers::new(),
        };
        app.dispatch(&enter);
        assert!(!app.select.is_open());
    }
}
