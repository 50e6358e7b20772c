//! Measuring and placing an element tree.
//!
//! The model is a small subset of flexbox: rows place children left to
//! right, columns top to bottom, both separated by `gap`. Text is one line
//! tall and as wide as its display width. In a row the first `grow` child
//! absorbs the width left over by its siblings.

use std::collections::HashMap;

use crate::element::{Content, Direction, Element, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Largest rect inside both.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

/// Computed rects keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Lay out `root` inside `available`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if !root.visible {
        return result;
    }
    let (width, height) = measure(root, available.width);
    let rect = Rect::new(
        available.x,
        available.y,
        width.min(available.width),
        height.min(available.height),
    );
    place(root, rect, &mut result);
    result
}

/// Intrinsic size of an element given the width its parent offers.
pub fn measure(element: &Element, available_width: u16) -> (u16, u16) {
    if !element.visible {
        return (0, 0);
    }

    let (content_width, height) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text), 1),
        Content::Children(children) => {
            let visible: Vec<&Element> = children.iter().filter(|c| c.visible).collect();
            let gaps = element
                .gap
                .saturating_mul(visible.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Row => visible.iter().fold((gaps, 0), |(w, h), child| {
                    let (cw, ch) = measure(child, available_width);
                    (w.saturating_add(cw), h.max(ch))
                }),
                Direction::Column => visible.iter().fold((0, gaps), |(w, h), child| {
                    let (cw, ch) = measure(child, available_width);
                    (w.max(cw), h.saturating_add(ch))
                }),
            }
        }
    };

    let width = match element.width {
        Size::Auto => content_width,
        Size::Fixed(n) => n,
        Size::Fill => available_width,
    };
    (width, height)
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };
    let visible: Vec<&Element> = children.iter().filter(|c| c.visible).collect();

    match element.direction {
        Direction::Row => {
            let sizes: Vec<(u16, u16)> = visible.iter().map(|c| measure(c, rect.width)).collect();
            let gaps = element
                .gap
                .saturating_mul(visible.len().saturating_sub(1) as u16);
            let used = sizes
                .iter()
                .fold(gaps, |acc, (w, _)| acc.saturating_add(*w));
            let spare = rect.width.saturating_sub(used);
            let grow_index = visible.iter().position(|c| c.grow);

            let mut x = rect.x;
            for (i, (child, (w, _))) in visible.iter().zip(sizes).enumerate() {
                let w = if Some(i) == grow_index { w.saturating_add(spare) } else { w };
                let w = w.min(rect.right().saturating_sub(x));
                place(child, Rect::new(x, rect.y, w, rect.height), result);
                x = x.saturating_add(w).saturating_add(element.gap);
            }
        }
        Direction::Column => {
            let mut y = rect.y;
            for child in visible {
                let (w, h) = measure(child, rect.width);
                // Auto-width children stretch across the column.
                let w = if child.width == Size::Auto { rect.width } else { w.min(rect.width) };
                let h = h.min(rect.bottom().saturating_sub(y));
                place(child, Rect::new(rect.x, y, w, h), result);
                y = y.saturating_add(h).saturating_add(element.gap);
            }
        }
    }
}

fn display_width(text: &str) -> u16 {
    use unicode_width::UnicodeWidthStr;
    text.width().min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Rect::new(5, 5, 5, 5));
        assert!(a.intersect(&Rect::new(20, 20, 1, 1)).is_empty());
    }

    #[test]
    fn test_wide_text_measures_by_display_width() {
        assert_eq!(measure(&Element::text("日本"), 80), (4, 1));
    }
}
