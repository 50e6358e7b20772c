use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::theme::{Rgb, Theme};

/// A raw-mode, alternate-screen terminal with mouse capture.
///
/// Frames are painted into a back buffer and only the cells that changed
/// since the previous frame are written out. The terminal is restored when
/// this value drops.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Lay out, paint and flush one frame. Returns the layout for hit testing.
    pub fn render(&mut self, root: &Element, theme: &Theme) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            log::debug!("Terminal resized to {}x{}", width, height);
            self.current = Buffer::new(width, height);
            // A cleared screen matches an all-default buffer.
            self.previous = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, theme, &mut self.current);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut pen: Option<Cell> = None;
        let mut next_x: Option<(u16, u16)> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            if next_x != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if pen.is_none_or(|p| p.fg != cell.fg) {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
            }
            if pen.is_none_or(|p| p.bg != cell.bg) {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
            }
            if pen.is_none_or(|p| (p.bold, p.dim, p.underline) != (cell.bold, cell.dim, cell.underline)) {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                queue!(self.stdout, SetAttribute(Attribute::NoUnderline))?;
                if cell.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
            }
            pen = Some(*cell);

            write!(self.stdout, "{}", cell.char)?;

            let width = unicode_width::UnicodeWidthChar::width(cell.char).unwrap_or(1).max(1) as u16;
            next_x = Some((x.saturating_add(width), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
