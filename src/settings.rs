//! Module settings
//!
//! Stored as JSON next to the host's other configuration. A missing or broken
//! file never stops the module: it logs and falls back to defaults.

use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PUNCH_INTENSITY;
use crate::host::SoundEffect;

/// Tunables for one module instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interaction punch applied on every press (0.0 - 1.0)
    pub punch_intensity: f32,
    /// Sound played on every press
    pub press_sound: SoundEffect,
    /// Fixed RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
    /// Log the arrows and the answer on activation
    pub log_orientation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            punch_intensity: DEFAULT_PUNCH_INTENSITY,
            press_sound: SoundEffect::BigButtonPress,
            seed: None,
            log_orientation: true,
        }
    }
}

impl Settings {
    /// Settings with a fixed seed (replays, tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Punch intensity clamped to the range the host accepts
    pub fn effective_punch_intensity(&self) -> f32 {
        if self.punch_intensity.is_finite() {
            self.punch_intensity.clamp(0.0, 1.0)
        } else {
            DEFAULT_PUNCH_INTENSITY
        }
    }

    /// Orientation RNG for a new controller
    pub fn rng(&self) -> Pcg32 {
        match self.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON; failures are logged, not returned
    pub fn save_to(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("triangle-buttons-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.punch_intensity, 0.2);
        assert_eq!(s.press_sound, SoundEffect::BigButtonPress);
        assert_eq!(s.seed, None);
        assert!(s.log_orientation);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.punch_intensity, 0.2);
    }

    #[test]
    fn test_effective_punch_intensity() {
        let mut s = Settings::default();
        s.punch_intensity = 3.0;
        assert_eq!(s.effective_punch_intensity(), 1.0);
        s.punch_intensity = -1.0;
        assert_eq!(s.effective_punch_intensity(), 0.0);
        s.punch_intensity = f32::NAN;
        assert_eq!(s.effective_punch_intensity(), 0.2);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let s = Settings::seeded(99);
        let a: u32 = s.rng().random();
        let b: u32 = s.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut s = Settings::seeded(7);
        s.press_sound = SoundEffect::ButtonPress;
        s.save_to(&path);

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, s);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_or_malformed_falls_back() {
        let missing = temp_path("missing");
        let _ = std::fs::remove_file(&missing);
        assert_eq!(Settings::load_from(&missing), Settings::default());

        let broken = temp_path("broken");
        std::fs::write(&broken, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&broken), Settings::default());
        let _ = std::fs::remove_file(&broken);
    }
}
