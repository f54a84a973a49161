//! Settings persistence coordination.
//!
//! Ruler preferences are stored as JSON strings in eframe's persistent
//! storage, under a single key.

use serde::{Deserialize, Serialize};
use sliding_ruler::RulerSettings;

pub const RULER_SETTINGS_KEY: &str = "ruler_settings";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the ruler settings, falling back to defaults.
    pub fn load_ruler_settings(storage: Option<&dyn eframe::Storage>) -> RulerSettings {
        Self::load_setting_or(storage, RULER_SETTINGS_KEY, RulerSettings::default())
    }

    /// Saves the ruler settings.
    pub fn save_ruler_settings(storage: &mut dyn eframe::Storage, settings: &RulerSettings) {
        Self::save_setting(storage, RULER_SETTINGS_KEY, settings);
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
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => tracing::warn!(key, %err, "failed to serialize setting"),
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring invalid stored setting");
                None
            }
        }
    }
}
