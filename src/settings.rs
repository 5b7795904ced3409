//! Game settings and preferences
//!
//! Persisted in LocalStorage, separate from anything gameplay related.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Triangle fan segments used for the token circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 16,
            QualityPreset::Medium => 32,
            QualityPreset::High => 64,
        }
    }

    /// Number of fading rings used to fake the glow blur
    pub fn glow_layers(&self) -> u32 {
        match self {
            QualityPreset::Low => 3,
            QualityPreset::Medium => 6,
            QualityPreset::High => 12,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Glow halo around the token
    pub glow: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            glow: true,
        }
    }
}

impl Settings {
    /// Apply a quality preset (Low also drops the glow)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        if preset == QualityPreset::Low {
            self.glow = false;
        }
    }

    /// Apply a `quality` URL parameter, returning the preset if it named one
    pub fn apply_quality_param(&mut self, value: Option<&str>) -> Option<QualityPreset> {
        let preset = QualityPreset::from_str(value?.trim())?;
        self.apply_preset(preset);
        Some(preset)
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "drag_maze_settings";

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
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
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

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(QualityPreset::from_str("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_low_preset_drops_glow() {
        let mut settings = Settings::default();
        settings.apply_preset(QualityPreset::Low);
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.glow);
    }

    #[test]
    fn test_quality_param() {
        let mut settings = Settings::default();
        assert_eq!(settings.apply_quality_param(Some(" low ")), Some(QualityPreset::Low));
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(!settings.glow);

        let before = settings.clone();
        assert_eq!(settings.apply_quality_param(Some("ultra")), None);
        assert_eq!(settings.apply_quality_param(None), None);
        assert_eq!(settings, before);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"glow": false}"#).unwrap();
        assert!(!settings.glow);
        assert_eq!(settings.quality, QualityPreset::Medium);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
    }
}
