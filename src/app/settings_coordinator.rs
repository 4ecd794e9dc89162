//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! Settings are stored as JSON strings under their key.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
///
/// Provides type-safe loading and saving of any serializable setting to
/// eframe's persistent storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The default value to use if loading fails
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
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
    fn test_save_and_load_sidebar_width() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "sidebar_width", &320.0f32);

        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "sidebar_width", 0.0);
        assert_eq!(loaded, 320.0);
    }

    #[test]
    fn test_load_missing_key_returns_default() {
        let storage = MockStorage::new();

        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 240.0);
        assert_eq!(loaded, 240.0);
    }

    #[test]
    fn test_load_invalid_json_returns_default() {
        let mut storage = MockStorage::new();
        storage.set_string("broken", "{not json".to_string());

        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "broken", 240.0);
        assert_eq!(loaded, 240.0);
    }
}
