//! Player preferences
//!
//! Kept apart from the simulation; the menu's music switch lives here.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background soundtrack on/off
    pub music_on: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_on: true,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.5,
        }
    }
}

impl Settings {
    /// Flip music on/off, returning the new state
    pub fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        self.music_on
    }

    /// Label for the menu's music button
    pub fn music_label(&self) -> &'static str {
        if self.music_on { "Music ON" } else { "Music OFF" }
    }

    /// Parse settings, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings.clamped()
            }
            Err(err) => {
                log::warn!("Using default settings ({err})");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Volumes forced into [0, 1]
    fn clamped(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_music() {
        let mut settings = Settings::default();
        assert_eq!(settings.music_label(), "Music ON");
        assert!(!settings.toggle_music());
        assert_eq!(settings.music_label(), "Music OFF");
    }

    #[test]
    fn test_json_partial_and_clamped() {
        let settings = Settings::from_json(r#"{ "music_on": false, "sfx_volume": 3.0 }"#);
        assert!(!settings.music_on);
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.music_volume, 0.5);
    }

    #[test]
    fn test_bad_json_falls_back() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.toggle_music();
        assert_eq!(Settings::from_json(&settings.to_json()), settings);
    }
}
