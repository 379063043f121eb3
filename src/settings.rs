//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::sim::PhysicsConfig;

/// Debug overlay toggles, flipped by checkboxes next to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugOverlays {
    /// Actor collision rectangle
    pub hitbox: bool,
    /// Camera tracking rectangle
    pub camera_box: bool,
    /// Floor and platform collision blocks
    pub blocks: bool,
}

impl DebugOverlays {
    /// Checkbox element ids in the page
    pub const HITBOX_ID: &'static str = "hitbox";
    pub const CAMERA_BOX_ID: &'static str = "camerabox";
    pub const BLOCKS_ID: &'static str = "blocks";

    /// Update the toggle bound to a checkbox id; unknown ids are ignored
    pub fn set_by_id(&mut self, id: &str, enabled: bool) -> bool {
        match id {
            Self::HITBOX_ID => self.hitbox = enabled,
            Self::CAMERA_BOX_ID => self.camera_box = enabled,
            Self::BLOCKS_ID => self.blocks = enabled,
            _ => return false,
        }
        true
    }

    /// Toggle bound to a checkbox id, if the id is known
    pub fn by_id(&self, id: &str) -> Option<bool> {
        match id {
            Self::HITBOX_ID => Some(self.hitbox),
            Self::CAMERA_BOX_ID => Some(self.camera_box),
            Self::BLOCKS_ID => Some(self.blocks),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Debug ===
    pub overlays: DebugOverlays,

    // === Tuning ===
    pub physics: PhysicsConfig,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "warrior_platformer_settings";

    /// Environment variable naming the native settings file
    pub const PATH_ENV: &'static str = "PLATFORMER_SETTINGS";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from the file named by `PLATFORMER_SETTINGS`, falling back
    /// to defaults when unset, missing or unparseable
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::PATH_ENV) {
            Ok(path) => Self::load_from_path(std::path::Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_json(&content) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
