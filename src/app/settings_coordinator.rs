//! Generic settings persistence coordination.
//!
//! Settings other than panel geometry are stored as JSON strings in eframe's
//! persistent storage. Panel sizes use their own CSS-length format and go
//! through [`LayoutCoordinator`](crate::app::LayoutCoordinator) instead.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
///
/// Values that fail to deserialize are reported through `log` and treated
/// as absent.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, returning `None` if it is missing or invalid.
    ///
    /// # Examples
    /// ```ignore
    /// let theme: Option<String> = SettingsCoordinator::try_load_setting(storage, "theme_preference");
    /// ```
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring stored setting {}: {}", key, e);
                None
            }
        }
    }

    /// Loads a setting with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Saves a setting and flushes the store.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("could not store setting {}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
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
    fn test_save_and_load_string() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "theme_preference", "Dark");

        let loaded: Option<String> = SettingsCoordinator::try_load_setting(Some(&storage), "theme_preference");
        assert_eq!(loaded.as_deref(), Some("Dark"));
        assert_eq!(storage.data.get("theme_preference").map(String::as_str), Some("\"Dark\""));
    }

    #[test]
    fn test_missing_and_invalid_fall_back() {
        let mut storage = MockStorage::new();
        storage.set_string("broken", "{not json".to_string());

        let missing: u32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 7);
        let broken: u32 = SettingsCoordinator::load_setting_or(Some(&storage), "broken", 7);
        let no_storage: u32 = SettingsCoordinator::load_setting_or(None, "missing", 7);
        assert_eq!((missing, broken, no_storage), (7, 7, 7));
    }
}
