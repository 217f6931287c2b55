//! Theme and styling state management.
//!
//! This module encapsulates the theme registry and the currently selected
//! theme.

use crate::theme::{light_theme, Theme, ThemeColors, ThemeManager, DEFAULT_THEME};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Holding the theme registry
/// - Tracking the current theme, which always names a registered theme
#[derive(Debug, Clone)]
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Creates a theme state with `theme_name`, falling back to the default
    /// theme when the name is not registered.
    pub fn with_theme(theme_name: &str) -> Self {
        let mut state = Self::new();
        state.set_theme(theme_name);
        state
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The current theme.
    pub fn current(&self) -> Option<&Theme> {
        self.theme_manager.get_theme(&self.current_theme_name)
    }

    /// Palette of the current theme, cloned for one frame of rendering.
    pub fn colors(&self) -> ThemeColors {
        match self.current() {
            Some(theme) => theme.colors.clone(),
            None => light_theme().colors,
        }
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name. Unknown names are ignored and
    /// return `false`.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if !self.theme_manager.contains(theme_name) {
            log::warn!("unknown theme {:?}, keeping {:?}", theme_name, self.current_theme_name);
            return false;
        }
        self.current_theme_name = theme_name.to_string();
        true
    }

    /// Switches between the light and dark theme, returning the new name.
    pub fn toggle(&mut self) -> &str {
        let next = if self.current().is_some_and(Theme::is_dark) { "Light" } else { "Dark" };
        self.set_theme(next);
        &self.current_theme_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let state = ThemeState::with_theme("Solarized");
        assert_eq!(state.current_theme_name(), DEFAULT_THEME);
        assert!(state.current().is_some());
    }

    #[test]
    fn test_toggle() {
        let mut state = ThemeState::with_theme("Light");
        assert_eq!(state.toggle(), "Dark");
        assert_eq!(state.toggle(), "Light");
    }

    #[test]
    fn test_colors_follow_current_theme() {
        let mut state = ThemeState::with_theme("Light");
        let light = state.colors().canvas_background;
        state.toggle();
        assert_ne!(state.colors().canvas_background, light);
    }
}
