//! Rendering for the Selector widget.

use crate::element::{Element, Size};
use crate::selection::Selection;
use crate::theme::Region;

use super::{Part, Props, Selector};

const MARKER: &str = "×";
const DIVIDER: &str = "│";

impl Selector {
    /// Build the element tree for the current props and view state.
    ///
    /// The option list is always present in the tree; it is only visible
    /// while the selector is open.
    pub fn render(&self, props: &Props<'_>) -> Element {
        let id = self.id.as_str();
        let interactive = !self.disabled;

        log::debug!(
            "Selector::render id={} open={} options_count={} selected={}",
            id,
            self.is_open(),
            props.options.len(),
            props.value.options().len()
        );

        let header = Element::row()
            .id(Part::Header.id(id))
            .gap(1)
            .child(self.value_area(props))
            .child(
                Element::text(MARKER)
                    .id(Part::Clear.id(id))
                    .region(Region::ClearMarker)
                    .clickable(interactive)
                    .focusable(interactive)
                    .visible(!props.value.is_empty()),
            )
            .child(
                Element::text(DIVIDER)
                    .id(Part::Divider.id(id))
                    .region(Region::Divider),
            )
            .child(
                Element::text(if self.is_open() { "▲" } else { "▼" })
                    .id(Part::Caret.id(id))
                    .region(Region::Caret),
            );

        Element::col()
            .id(id)
            .region(Region::Container)
            .width(self.width.map(Size::Fixed).unwrap_or(Size::Fill))
            .focusable(interactive)
            .clickable(interactive)
            .disabled(self.disabled)
            .child(header)
            .child(self.option_list(props))
    }

    fn value_area(&self, props: &Props<'_>) -> Element {
        let id = self.id.as_str();
        let area = Element::row()
            .id(Part::Value.id(id))
            .region(Region::Value)
            .gap(1)
            .grow(true);

        // An empty multiple list shows the placeholder, same as single `None`.
        if props.value.is_empty() {
            return area.child(
                Element::text(&self.placeholder)
                    .id(Part::Placeholder.id(id))
                    .region(Region::Placeholder),
            );
        }

        match props.value {
            Selection::Single(Some(option)) => area.child(Element::text(&option.label)),
            Selection::Single(None) => area,
            Selection::Multiple(options) => {
                area.children(options.iter().enumerate().map(|(i, option)| {
                    Element::row()
                        .id(Part::Badge(i).id(id))
                        .region(Region::Badge)
                        .gap(1)
                        .clickable(!self.disabled)
                        .focusable(!self.disabled)
                        .child(Element::text(&option.label))
                        .child(
                            Element::text(MARKER)
                                .id(Part::Remove(i).id(id))
                                .region(Region::RemoveMarker)
                                .clickable(!self.disabled),
                        )
                }))
            }
        }
    }

    fn option_list(&self, props: &Props<'_>) -> Element {
        let id = self.id.as_str();
        let highlighted = self.highlighted();

        Element::col()
            .id(Part::Options.id(id))
            .region(Region::OptionList)
            .visible(self.is_open())
            .children(props.options.iter().enumerate().map(|(i, option)| {
                Element::text(&option.label)
                    .id(Part::Option(i).id(id))
                    .region(Region::OptionRow)
                    .clickable(!self.disabled)
                    .selected(props.value.contains(option))
                    .highlighted(i == highlighted)
            }))
    }
}
