//! Demo configuration, read from a TOML file.
//!
//! ```toml
//! multiple = true
//! placeholder = "Pick letters"
//! width = 40
//! options = [
//!     { label = "A", value = 1 },
//!     { label = "B", value = "b" },
//! ]
//!
//! [theme.highlighted]
//! bg = "oklch(0.7 0.15 300)"
//! bold = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use selector::{Color, ColorParseError, Region, SelectOption, Style, Theme};
use serde::Deserialize;
use thiserror::Error;

use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid theme color: {0}")]
    Color(#[from] ColorParseError),

    #[error("Unknown theme key '{0}'")]
    UnknownThemeKey(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Start in multiple selection mode.
    pub multiple: bool,
    pub placeholder: Option<String>,
    pub width: Option<u16>,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
    /// Style overrides keyed by region key, or `selected`, `highlighted`
    /// and `disabled` for the row state layers.
    pub theme: HashMap<String, StyleConfig>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            placeholder: None,
            width: None,
            disabled: false,
            options: vec![
                SelectOption::new("A", 1),
                SelectOption::new("B", 2),
                SelectOption::new("C", 3),
            ],
            theme: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl StyleConfig {
    pub fn to_style(&self) -> Result<Style, ColorParseError> {
        Ok(Style {
            foreground: self.fg.as_deref().map(Color::parse).transpose()?,
            background: self.bg.as_deref().map(Color::parse).transpose()?,
            bold: self.bold,
            dim: self.dim,
            underline: self.underline,
        })
    }
}

impl DemoConfig {
    /// Load from `path`, or from the platform config file when `None`.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match paths::config_file() {
                Some(path) => (path, false),
                None => {
                    log::debug!("No config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        match fs::read_to_string(&path) {
            Ok(text) => {
                log::info!("Loading config from {}", path.display());
                Self::parse(&text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the theme: defaults with this config's overrides applied.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let mut theme = Theme::default();
        for (key, style) in &self.theme {
            let style = style.to_style()?;
            match key.as_str() {
                "selected" => theme.selected = style,
                "highlighted" => theme.highlighted = style,
                "disabled" => theme.disabled = style,
                other => {
                    let region = Region::from_key(other)
                        .ok_or_else(|| ConfigError::UnknownThemeKey(other.to_string()))?;
                    theme.set_region(region, style);
                }
            }
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selector::OptionValue;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DemoConfig::parse("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.options.len(), 3);
        assert!(!config.multiple);
    }

    #[test]
    fn test_parse_options_with_mixed_values() {
        let config = DemoConfig::parse(
            r#"
            multiple = true
            placeholder = "Pick"
            width = 24
            options = [
                { label = "One", value = 1 },
                { label = "Two", value = "two" },
            ]
            "#,
        )
        .unwrap();

        assert!(config.multiple);
        assert_eq!(config.placeholder.as_deref(), Some("Pick"));
        assert_eq!(config.width, Some(24));
        assert_eq!(config.options[0].value, OptionValue::Number(1));
        assert_eq!(config.options[1].value, OptionValue::Text("two".into()));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = DemoConfig::parse("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_theme_overrides() {
        let config = DemoConfig::parse(
            r##"
            [theme.caret]
            fg = "#ff0000"

            [theme.highlighted]
            bg = "oklch(0.7 0.15 300)"
            bold = true
            "##,
        )
        .unwrap();

        let theme = config.theme().unwrap();
        assert_eq!(
            theme.region(Region::Caret).foreground,
            Some(Color::rgb(0xFF, 0, 0))
        );
        assert_eq!(theme.highlighted.background, Some(Color::oklch(0.7, 0.15, 300.0)));
        assert!(theme.highlighted.bold);
    }

    #[test]
    fn test_bad_theme_entries() {
        let config = DemoConfig::parse("[theme.caret]\nfg = \"red\"").unwrap();
        assert!(matches!(config.theme(), Err(ConfigError::Color(_))));

        let config = DemoConfig::parse("[theme.sidebar]\nbold = true").unwrap();
        assert!(matches!(
            config.theme(),
            Err(ConfigError::UnknownThemeKey(key)) if key == "sidebar"
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let err = DemoConfig::load(Some(Path::new("/nonexistent/selector.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
