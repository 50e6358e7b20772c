//! Style regions and the theme that colors them.

use std::collections::HashMap;

use thiserror::Error;

/// Named style slots the widget renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Unstyled; inherits from the parent.
    #[default]
    None,
    Container,
    Value,
    Placeholder,
    Badge,
    RemoveMarker,
    ClearMarker,
    Divider,
    Caret,
    OptionList,
    OptionRow,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Container,
        Region::Value,
        Region::Placeholder,
        Region::Badge,
        Region::RemoveMarker,
        Region::ClearMarker,
        Region::Divider,
        Region::Caret,
        Region::OptionList,
        Region::OptionRow,
    ];

    /// Configuration key for this region, e.g. `"badge"` or `"option"`.
    pub fn key(self) -> &'static str {
        match self {
            Region::None => "none",
            Region::Container => "container",
            Region::Value => "value",
            Region::Placeholder => "placeholder",
            Region::Badge => "badge",
            Region::RemoveMarker => "remove",
            Region::ClearMarker => "clear",
            Region::Divider => "divider",
            Region::Caret => "caret",
            Region::OptionList => "options",
            Region::OptionRow => "option",
        }
    }

    pub fn from_key(key: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    /// Parse `#rrggbb` or `oklch(l c h)` (commas optional).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError::Hex(input.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| ColorParseError::Hex(input.to_string()))
            };
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        if let Some(body) = s.strip_prefix("oklch(").and_then(|b| b.strip_suffix(')')) {
            let parts: Vec<f32> = body
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|p| !p.is_empty())
                .map(|p| p.parse::<f32>())
                .collect::<Result<_, _>>()
                .map_err(|_| ColorParseError::Oklch(input.to_string()))?;
            return match parts.as_slice() {
                [l, c, h] => Ok(Self::oklch(*l, *c, *h)),
                _ => Err(ColorParseError::Oklch(input.to_string())),
            };
        }

        Err(ColorParseError::Unknown(input.to_string()))
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{Clamp, IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.clamp().into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex color '{0}', expected #rrggbb")]
    Hex(String),
    #[error("invalid oklch color '{0}', expected oklch(l c h)")]
    Oklch(String),
    #[error("unrecognized color '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            bold: false,
            dim: false,
            underline: false,
        }
    }

    pub const fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Maps regions and row states to concrete styles.
#[derive(Debug, Clone)]
pub struct Theme {
    regions: HashMap<Region, Style>,
    pub selected: Style,
    pub highlighted: Style,
    pub disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let text = Color::oklch(0.92, 0.0, 0.0);
        let muted = Color::oklch(0.6, 0.0, 0.0);
        let surface = Color::oklch(0.22, 0.01, 280.0);
        let accent = Color::rgb(0xA2, 0x77, 0xFF);

        let regions = HashMap::from([
            (Region::Container, Style::new().foreground(text).background(surface)),
            (Region::Placeholder, Style::new().foreground(muted).dim()),
            (
                Region::Badge,
                Style::new().background(Color::oklch(0.32, 0.02, 280.0)),
            ),
            (Region::RemoveMarker, Style::new().foreground(muted)),
            (Region::ClearMarker, Style::new().foreground(muted)),
            (Region::Divider, Style::new().foreground(muted).dim()),
            (Region::Caret, Style::new().foreground(muted)),
            (
                Region::OptionList,
                Style::new().background(Color::oklch(0.18, 0.01, 280.0)),
            ),
        ]);

        Self {
            regions,
            selected: Style::new()
                .foreground(Color::rgb(0x11, 0x11, 0x18))
                .background(Color::rgb(0x6E, 0x54, 0x94)),
            highlighted: Style::new()
                .foreground(Color::rgb(0x11, 0x11, 0x18))
                .background(accent)
                .bold(),
            disabled: Style::new().foreground(muted).dim(),
        }
    }
}

impl Theme {
    /// Theme with no region styles at all.
    pub fn plain() -> Self {
        Self {
            regions: HashMap::new(),
            selected: Style::new(),
            highlighted: Style::new(),
            disabled: Style::new(),
        }
    }

    pub fn region(&self, region: Region) -> Style {
        self.regions.get(&region).copied().unwrap_or_default()
    }

    pub fn set_region(&mut self, region: Region, style: Style) {
        self.regions.insert(region, style);
    }

    /// Resolve the style of an element. Highlighted wins over selected,
    /// both layer over the region style.
    pub fn resolve(&self, region: Region, selected: bool, highlighted: bool, disabled: bool) -> Style {
        let mut style = self.region(region);
        if selected {
            style = layer(style, self.selected);
        }
        if highlighted {
            style = layer(style, self.highlighted);
        }
        if disabled {
            style = layer(style, self.disabled);
        }
        style
    }
}

fn layer(base: Style, over: Style) -> Style {
    Style {
        foreground: over.foreground.or(base.foreground),
        background: over.background.or(base.background),
        bold: base.bold || over.bold,
        dim: base.dim || over.dim,
        underline: base.underline || over.underline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#a277ff"), Ok(Color::rgb(0xA2, 0x77, 0xFF)));
        assert!(matches!(Color::parse("#12345"), Err(ColorParseError::Hex(_))));
        assert!(matches!(Color::parse("#zzzzzz"), Err(ColorParseError::Hex(_))));
    }

    #[test]
    fn test_parse_oklch() {
        assert_eq!(Color::parse("oklch(0.5, 0.1, 250)"), Ok(Color::oklch(0.5, 0.1, 250.0)));
        assert_eq!(Color::parse("oklch(0.5 0.1 250)"), Ok(Color::oklch(0.5, 0.1, 250.0)));
        assert!(matches!(Color::parse("oklch(0.5)"), Err(ColorParseError::Oklch(_))));
        assert!(matches!(Color::parse("red"), Err(ColorParseError::Unknown(_))));
    }

    #[test]
    fn test_oklch_extremes() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }

    #[test]
    fn test_highlighted_wins_over_selected() {
        let theme = Theme::default();
        let style = theme.resolve(Region::OptionRow, true, true, false);
        assert_eq!(style.background, theme.highlighted.background);
        let style = theme.resolve(Region::OptionRow, true, false, false);
        assert_eq!(style.background, theme.selected.background);
    }

    #[test]
    fn test_region_keys_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_key(region.key()), Some(region));
        }
        assert_eq!(Region::from_key("nope"), None);
    }
}
