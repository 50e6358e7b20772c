//! Mapping a pointer position to an element id.
//!
//! All lookups return the deepest matching element. Later siblings are
//! checked first since they paint over earlier ones.

use crate::element::Element;
use crate::layout::LayoutResult;

/// Deepest enabled, clickable element under `(x, y)`.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.clickable && !el.disabled)
}

/// Deepest element of any kind under `(x, y)`.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, &|_| true)
}

/// Deepest enabled, focusable element under `(x, y)`.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.focusable && !el.disabled)
}

fn deepest(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    if !element.visible || !layout.get(&element.id)?.contains(x, y) {
        return None;
    }

    element
        .child_elements()
        .iter()
        .rev()
        .find_map(|child| deepest(layout, child, x, y, accept))
        .or_else(|| accept(element).then(|| element.id.clone()))
}
