//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web. Holds configuration only; scores
//! are never stored.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `KeyboardEvent.code` of the single action key (jump / restart)
    pub activate_key: String,
    /// `KeyboardEvent.code` toggling demo mode
    pub demo_key: String,

    // === Sprites ===
    /// Image URL for the actor (rectangle fallback when unset or not loaded)
    pub actor_sprite: Option<String>,
    /// Image URL for obstacles
    pub obstacle_sprite: Option<String>,

    /// Balance values
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            activate_key: "Space".to_string(),
            demo_key: "KeyI".to_string(),
            actor_sprite: None,
            obstacle_sprite: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dino_runner_settings";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable label for the action key, for on-screen prompts
    pub fn activate_label(&self) -> &str {
        key_label(&self.activate_key)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let stored = storage
            .as_ref()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();

        match stored {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring stored settings: {}", e);
                    Self::default()
                }
            },
            None => {
                // Write defaults so there is something to edit
                log::info!("Using default settings");
                let settings = Self::default();
                settings.save();
                settings
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Could not save settings: {}", e),
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }
}

fn key_label(code: &str) -> &str {
    if let Some(letter) = code.strip_prefix("Key") {
        return letter;
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        return digit;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binding_is_space() {
        let settings = Settings::default();
        assert_eq!(settings.activate_key, "Space");
        assert_eq!(settings.activate_label(), "Space");
        assert!(settings.actor_sprite.is_none());
    }

    #[test]
    fn test_from_json_overrides_and_defaults() {
        let settings = Settings::from_json(
            r#"{ "activate_key": "KeyW", "actor_sprite": "assets/dino.png", "tuning": { "jump_impulse": 14.0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.activate_key, "KeyW");
        assert_eq!(settings.activate_label(), "W");
        assert_eq!(settings.actor_sprite.as_deref(), Some("assets/dino.png"));
        assert_eq!(settings.tuning.jump_impulse, 14.0);
        assert_eq!(settings.tuning.gravity, Tuning::default().gravity);
        assert_eq!(settings.demo_key, "KeyI");
    }

    #[test]
    fn test_from_json_rejects_invalid_tuning() {
        let result = Settings::from_json(r#"{ "tuning": { "spawn_interval_ms": 0.0 } }"#);
        assert!(matches!(result, Err(SettingsError::Invalid { field: "spawn_interval_ms", .. })));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Settings::from_json("not json"), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_json_survives_save_format() {
        let mut settings = Settings::default();
        settings.obstacle_sprite = Some("assets/cactus.png".into());
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
