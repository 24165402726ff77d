//! Theme system for the splitter demo
//!
//! Provides YAML-based themes with compile-time embedded defaults and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/panesplit/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::model::layout::HandleState;

// Embed theme YAML files at compile time
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "light", "dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    BUILTIN_THEMES
        .iter()
        .find(|theme| theme.id == id)
        .ok_or_else(|| format!("Unknown theme: {}", id))
        .and_then(|theme| Theme::from_yaml(theme.yaml))
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("{}: {}", s, e))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub name: String,
    pub background: String,
    pub panel: PanelThemeData,
    pub splitter: SplitterThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    pub border: String,
    /// Accent colors cycled across panels without an explicit color
    #[serde(default)]
    pub accents: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplitterThemeData {
    pub track: String,
    pub bar: String,
    pub hover: String,
    pub active: String,
}

/// Panel colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
    pub accents: Vec<Color>,
}

/// Handle colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterTheme {
    /// Background of the handle's hit area
    pub track: Color,
    /// Visible bar when idle
    pub bar: Color,
    /// Bar color when hovered
    pub hover: Color,
    /// Bar color when actively being dragged
    pub active: Color,
}

impl SplitterTheme {
    pub fn bar_color(&self, state: HandleState) -> Color {
        match state {
            HandleState::Idle => self.bar,
            HandleState::Hovered => self.hover,
            HandleState::Active => self.active,
        }
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub panel: PanelTheme,
    pub splitter: SplitterTheme,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))?;
        Self::from_data(&data)
    }

    fn from_data(data: &ThemeData) -> Result<Self, String> {
        Ok(Theme {
            name: data.name.clone(),
            background: Color::from_hex(&data.background)?,
            panel: PanelTheme {
                background: Color::from_hex(&data.panel.background)?,
                border: Color::from_hex(&data.panel.border)?,
                accents: data
                    .panel
                    .accents
                    .iter()
                    .map(|s| Color::from_hex(s))
                    .collect::<Result<_, _>>()?,
            },
            splitter: SplitterTheme {
                track: Color::from_hex(&data.splitter.track)?,
                bar: Color::from_hex(&data.splitter.bar)?,
                hover: Color::from_hex(&data.splitter.hover)?,
                active: Color::from_hex(&data.splitter.active)?,
            },
        })
    }

    /// Accent color for the panel at `index`, if the theme defines any
    pub fn accent(&self, index: usize) -> Option<Color> {
        if self.panel.accents.is_empty() {
            None
        } else {
            Some(self.panel.accents[index % self.panel.accents.len()])
        }
    }

    /// Default light theme (YAML-backed with Rust fallback)
    pub fn default_light() -> Self {
        match Theme::from_yaml(LIGHT_YAML) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::error!("Built-in light theme failed to load: {}", e);
                Theme {
                    name: "Light".to_string(),
                    background: Color::rgb(0xF3, 0xF4, 0xF6),
                    panel: PanelTheme {
                        background: Color::rgb(0xFF, 0xFF, 0xFF),
                        border: Color::rgb(0xE5, 0xE7, 0xEB),
                        accents: Vec::new(),
                    },
                    splitter: SplitterTheme {
                        track: Color::rgb(0xF3, 0xF4, 0xF6),
                        bar: Color::rgb(0x9C, 0xA3, 0xAF),
                        hover: Color::rgb(0x93, 0xC5, 0xFD),
                        active: Color::rgb(0x60, 0xA5, 0xFA),
                    },
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#60A5FA"), Ok(Color::rgb(0x60, 0xA5, 0xFA)));
        assert_eq!(
            Color::from_hex("#60A5FA80").map(|c| c.a),
            Ok(0x80)
        );
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_to_argb() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb_u32(), 0xFF123456);
    }

    #[test]
    fn test_bar_color_per_state() {
        let theme = Theme::default_light();
        assert_eq!(theme.splitter.bar_color(HandleState::Idle), theme.splitter.bar);
        assert_eq!(
            theme.splitter.bar_color(HandleState::Active),
            theme.splitter.active
        );
    }
}
