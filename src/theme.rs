//! Theme support for the CIOES-SP shell.
//!
//! Two built-in themes (Light, Dark) share one palette layout covering the
//! shell chrome, the viewport canvas and the four message kinds.
//!
//! # Examples
//!
//! ```
//! use cioes::theme::ThemeManager;
//! use cioes::state::MessageKind;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! let warning = dark.colors.message(MessageKind::Warning);
//! assert_ne!(warning, dark.colors.message(MessageKind::Info));
//! ```

use egui::Color32;
use std::collections::HashMap;

use crate::state::MessageKind;

/// Name of the theme used when nothing is stored.
pub const DEFAULT_THEME: &str = "Light";

/// Color palette of a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub title_bar: Color32,
    pub ribbon_background: Color32,
    pub panel_background: Color32,
    pub panel_header: Color32,
    pub extreme_background: Color32,
    pub border: Color32,
    pub accent: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    pub title_text: Color32,

    // Interactive
    pub selection: Color32,
    pub hover: Color32,
    pub resize_handle: Color32,

    // Viewport canvas
    pub canvas_background: Color32,
    pub grid: Color32,
    pub axis_x: Color32,
    pub axis_y: Color32,
    pub axis_z: Color32,

    // Message kinds
    pub info: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub error: Color32,
}

impl ThemeColors {
    /// Icon colour for a message kind.
    pub fn message(&self, kind: MessageKind) -> Color32 {
        match kind {
            MessageKind::Info => self.info,
            MessageKind::Warning => self.warning,
            MessageKind::Success => self.success,
            MessageKind::Error => self.error,
        }
    }
}

/// A theme definition with metadata and palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.name != "Light"
    }
}

/// Registry of the available themes
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a ThemeManager holding the built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.weak_bg_fill = colors.panel_header;
        visuals.widgets.hovered.weak_bg_fill = colors.hover;
        visuals.widgets.active.weak_bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Office-style light chrome with a blue title bar".to_string(),
        colors: ThemeColors {
            title_bar: hex_to_color32("#2b579a"),
            ribbon_background: hex_to_color32("#f3f3f3"),
            panel_background: hex_to_color32("#fafafa"),
            panel_header: hex_to_color32("#e8e8e8"),
            extreme_background: hex_to_color32("#ffffff"),
            border: hex_to_color32("#d0d0d0"),
            accent: hex_to_color32("#2b579a"),

            text: hex_to_color32("#222222"),
            text_dim: hex_to_color32("#777777"),
            title_text: hex_to_color32("#ffffff"),

            selection: hex_to_color32("#cce4f7"),
            hover: hex_to_color32("#e5f1fb"),
            resize_handle: hex_to_color32("#c8c8c8"),

            canvas_background: hex_to_color32("#f7f9fc"),
            grid: hex_to_color32("#dde3ea"),
            axis_x: hex_to_color32("#d9534f"),
            axis_y: hex_to_color32("#5cb85c"),
            axis_z: hex_to_color32("#337ab7"),

            info: hex_to_color32("#17a2b8"),
            warning: hex_to_color32("#f0ad4e"),
            success: hex_to_color32("#28a745"),
            error: hex_to_color32("#dc3545"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark chrome for long analysis sessions".to_string(),
        colors: ThemeColors {
            title_bar: hex_to_color32("#1f2a3a"),
            ribbon_background: hex_to_color32("#2d2d30"),
            panel_background: hex_to_color32("#252526"),
            panel_header: hex_to_color32("#333337"),
            extreme_background: hex_to_color32("#1e1e1e"),
            border: hex_to_color32("#3f3f46"),
            accent: hex_to_color32("#3794ff"),

            text: hex_to_color32("#e0e0e0"),
            text_dim: hex_to_color32("#9d9d9d"),
            title_text: hex_to_color32("#ffffff"),

            selection: hex_to_color32("#094771"),
            hover: hex_to_color32("#2a2d2e"),
            resize_handle: hex_to_color32("#4a4a4f"),

            canvas_background: hex_to_color32("#1b1f24"),
            grid: hex_to_color32("#2c333b"),
            axis_x: hex_to_color32("#e06c75"),
            axis_y: hex_to_color32("#98c379"),
            axis_z: hex_to_color32("#61afef"),

            info: hex_to_color32("#56b6c2"),
            warning: hex_to_color32("#e5c07b"),
            success: hex_to_color32("#98c379"),
            error: hex_to_color32("#e06c75"),
        },
    }
}

/// Converts a hex color string (like "#2b579a") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}
