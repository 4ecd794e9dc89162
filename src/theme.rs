//! Theme support module for the outline viewer GUI.
//!
//! Provides color schemes for the viewer with built-in themes (Light, Dark,
//! Dracula, One Dark Pro) and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use lectree::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula background: {:?}", dracula.colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors (active lecture, links, error surfaces)
    pub accent: Color32,
    pub accent_alt: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());
        themes.insert("One Dark Pro".to_string(), one_dark_pro_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        self.themes.get(&self.current_theme_name).unwrap()
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        // Override hyperlink
        visuals.hyperlink_color = colors.accent_alt;

        // Override error/warning colors
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme using egui defaults
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            accent: Color32::from_rgb(40, 100, 200),
            accent_alt: Color32::from_rgb(0, 160, 180),
            warning: Color32::from_rgb(230, 120, 20),
            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

/// Creates the Dark theme using egui defaults
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            accent: Color32::from_rgb(52, 152, 219),
            accent_alt: Color32::from_rgb(26, 188, 156),
            warning: Color32::from_rgb(243, 156, 18),
            error: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            // Background: #282a36, darker contrast: #21222c
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            // Foreground: #f8f8f2, Comment: #6272a4
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            // Current Line: #44475a
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            accent: hex_to_color32("#bd93f9"),     // Purple
            accent_alt: hex_to_color32("#8be9fd"), // Cyan
            warning: hex_to_color32("#ffb86c"),    // Orange
            error: hex_to_color32("#ff5555"),      // Red
        },
    }
}

/// Creates the One Dark Pro theme
///
/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            // Background: #282c34, slightly darker: #21252b
            background: hex_to_color32("#282c34"),
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),

            // Foreground: #abb2bf, Comment Grey: #5c6370
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            text_strong: hex_to_color32("#abb2bf"),

            // Gutter Grey: #4b5263
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),

            accent: hex_to_color32("#61afef"),     // Blue
            accent_alt: hex_to_color32("#56b6c2"), // Cyan
            warning: hex_to_color32("#d19a66"),    // Dark Yellow
            error: hex_to_color32("#e06c75"),      // Light Red
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
