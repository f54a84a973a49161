//! Paint palettes for rulers.
//!
//! Styles decide what a cell contains; a theme decides which colors it is
//! painted with. Built-in themes: Light, Dark, Dracula and One Dark Pro.
//!
//! # Examples
//!
//! ```
//! use sliding_ruler::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula ticks: {:?}", dracula.colors.tick);
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::error::{Result, RulerError};

pub const DEFAULT_THEME: &str = "Dark";

/// Colors used when painting a ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerColors {
    pub background: Color32,
    pub panel_background: Color32,

    // Ticks and labels inside the bounds
    pub tick: Color32,
    pub text: Color32,

    // Ticks and labels outside the bounds
    pub tick_dim: Color32,
    pub text_dim: Color32,

    /// Center cursor drawn by the host control.
    pub cursor: Color32,
    pub selection: Color32,
}

/// A named palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: RulerColors,
}

/// Registry of palettes with a current selection.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// All theme names, sorted.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The selected theme, or the built-in dark theme if the selection is gone.
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| fallback_theme())
    }

    pub fn set_current_theme(&mut self, name: &str) -> Result<()> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(RulerError::UnknownTheme(name.to_string()))
        }
    }

    /// Copies a theme's colors onto egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.cursor;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.active.bg_fill = colors.selection;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn fallback_theme() -> &'static Theme {
    static FALLBACK: once_cell::sync::Lazy<Theme> = once_cell::sync::Lazy::new(dark_theme);
    &FALLBACK
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: RulerColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            tick: Color32::from_rgb(0, 0, 0),
            text: Color32::from_rgb(0, 0, 0),
            tick_dim: Color32::from_rgb(190, 190, 190),
            text_dim: Color32::from_rgb(160, 160, 160),
            cursor: Color32::from_rgb(200, 40, 40),
            selection: Color32::from_rgb(180, 200, 255),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: RulerColors {
            background: Color32::from_rgb(16, 16, 16),
            panel_background: Color32::from_rgb(39, 39, 39),
            tick: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(255, 255, 255),
            tick_dim: Color32::from_rgb(90, 90, 90),
            text_dim: Color32::from_rgb(120, 120, 120),
            cursor: Color32::from_rgb(231, 76, 60),
            selection: Color32::from_rgb(50, 80, 120),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: RulerColors {
            background: hex_to_color32("#21222c"),
            panel_background: hex_to_color32("#282a36"),
            tick: hex_to_color32("#f8f8f2"),
            text: hex_to_color32("#f8f8f2"),
            tick_dim: hex_to_color32("#44475a"),
            text_dim: hex_to_color32("#6272a4"),
            cursor: hex_to_color32("#ff79c6"),
            selection: hex_to_color32("#44475a"),
        },
    }
}

/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: RulerColors {
            background: hex_to_color32("#21252b"),
            panel_background: hex_to_color32("#282c34"),
            tick: hex_to_color32("#abb2bf"),
            text: hex_to_color32("#abb2bf"),
            tick_dim: hex_to_color32("#4b5263"),
            text_dim: hex_to_color32("#5c6370"),
            cursor: hex_to_color32("#e06c75"),
            selection: hex_to_color32("#4b5263"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32. Malformed input
/// yields black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color32::BLACK;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
    Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
