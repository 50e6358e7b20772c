//! Painting an element tree into a cell buffer.

use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::theme::{Rgb, Style, Theme};

/// Colors and attributes handed down to children.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    fg: Rgb,
    bg: Rgb,
    bold: bool,
    dim: bool,
    underline: bool,
}

impl Default for Inherited {
    fn default() -> Self {
        Self {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
            underline: false,
        }
    }
}

impl Inherited {
    fn apply(self, style: &Style) -> Self {
        Self {
            fg: style.foreground.map(|c| c.to_rgb()).unwrap_or(self.fg),
            bg: style.background.map(|c| c.to_rgb()).unwrap_or(self.bg),
            bold: self.bold || style.bold,
            dim: self.dim || style.dim,
            underline: self.underline || style.underline,
        }
    }
}

/// Paint `root` using rects from `layout` and colors from `theme`.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, theme: &Theme, buf: &mut Buffer) {
    let clip = Rect::from_size(buf.width(), buf.height());
    render_element(root, layout, theme, buf, clip, Inherited::default());
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    theme: &Theme,
    buf: &mut Buffer,
    clip: Rect,
    inherited: Inherited,
) {
    if !element.visible {
        return;
    }
    let Some(rect) = layout.get(&element.id) else {
        return;
    };
    let area = rect.intersect(&clip);

    let style = theme.resolve(
        element.region,
        element.selected,
        element.highlighted,
        element.disabled,
    );
    let current = inherited.apply(&style);

    if style.background.is_some() {
        fill(buf, area, current.bg);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => draw_text(buf, area, text, current),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, theme, buf, area, current);
            }
        }
    }
}

fn fill(buf: &mut Buffer, area: Rect, bg: Rgb) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, area: Rect, text: &str, style: Inherited) {
    if area.is_empty() {
        return;
    }
    let y = area.y;
    let mut x = area.x;

    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > area.right() {
            break;
        }
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = style.fg;
            cell.bg = style.bg;
            cell.bold = style.bold;
            cell.dim = style.dim;
            cell.underline = style.underline;
            cell.wide_continuation = false;
        }
        for extra in 1..width {
            if let Some(cell) = buf.get_mut(x + extra, y) {
                cell.char = ' ';
                cell.bg = style.bg;
                cell.wide_continuation = true;
            }
        }
        x += width;
    }
}
