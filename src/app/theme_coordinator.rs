//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use crate::app::{AppState, SettingsCoordinator};
use crate::theme::DEFAULT_THEME;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference during application startup.
    ///
    /// Returns the stored theme name, or the default theme when none is stored.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        SettingsCoordinator::load_setting_or(storage, THEME_KEY, DEFAULT_THEME.to_string())
    }

    /// Saves the current theme preference.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        SettingsCoordinator::save_setting(storage, THEME_KEY, &theme_name);
    }

    /// Switches between light and dark and persists the choice.
    pub fn toggle_theme(state: &mut AppState, storage: Option<&mut dyn eframe::Storage>) {
        let name = state.theme.toggle().to_string();
        log::info!("theme switched to {}", name);
        if let Some(storage) = storage {
            Self::save_theme_to_storage(storage, &name);
        }
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        if let Some(theme) = state.theme.current() {
            let mut visuals = if theme.is_dark() {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };

            state.theme.theme_manager().apply_theme(theme, &mut visuals);
            ctx.set_visuals(visuals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_default_theme_without_storage() {
        assert_eq!(ThemeCoordinator::load_theme_from_storage(None), DEFAULT_THEME);
    }

    #[test]
    fn test_toggle_persists() {
        let mut storage = MockStorage::default();
        let mut state = AppState::with_theme("Light");

        ThemeCoordinator::toggle_theme(&mut state, Some(&mut storage));
        assert_eq!(state.theme.current_theme_name(), "Dark");
        assert_eq!(ThemeCoordinator::load_theme_from_storage(Some(&storage)), "Dark");
    }
}
