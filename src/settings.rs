//! Game settings and preferences
//!
//! Persisted as a JSON file next to the binary (or wherever the host points).

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Music and sound effects enabled at startup
    pub sound_on: bool,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Balance overrides
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tuning = settings.tuning.sanitized();
        Ok(settings)
    }

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let settings = Settings::from_json("{}").unwrap();
        assert!(settings.sound_on);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_nested_tuning_override() {
        let settings =
            Settings::from_json(r#"{ "sound_on": false, "seed": 7, "tuning": { "orb_score_value": 5 } }"#)
                .unwrap();
        assert!(!settings.sound_on);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.orb_score_value, 5);
        assert_eq!(settings.tuning.orb_radius, 10.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load("/nonexistent/crazy-gravity/settings.json");
        assert!(settings.sound_on);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("crazy-gravity-settings-{}.json", std::process::id()));
        let settings = Settings {
            sound_on: false,
            seed: Some(42),
            tuning: Tuning::default(),
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path);
        assert!(!loaded.sound_on);
        assert_eq!(loaded.seed, Some(42));

        let _ = fs::remove_file(&path);
    }
}
