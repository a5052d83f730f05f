//! Physics tuning values
//!
//! Every speed and acceleration the simulation uses lives here and is passed
//! explicitly into `WorldState::update`, so tests and drivers can vary them.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Physics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player horizontal speed (tiles/s)
    pub player_speed: f32,
    /// Downward acceleration applied to the player (tiles/s²)
    pub gravity: f32,
    /// Upward impulse subtracted from vertical speed on a jump (tiles/s)
    pub jump_speed: f32,
    /// Coin bob angular speed (radians/s)
    pub wobble_speed: f32,
    /// Coin bob amplitude (tiles)
    pub wobble_dist: f32,
    /// Speed of the `=` and `|` lava actors (tiles/s)
    pub lava_speed: f32,
    /// Fall speed of the `v` drip (tiles/s)
    pub drip_speed: f32,
    /// Monster patrol speed (tiles/s)
    pub monster_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 7.0,
            gravity: 30.0,
            jump_speed: 17.0,
            wobble_speed: 8.0,
            wobble_dist: 0.07,
            lava_speed: 2.0,
            drip_speed: 3.0,
            monster_speed: 3.0,
        }
    }
}

impl Tuning {
    /// Default file name looked up by the driver
    pub const FILE_NAME: &'static str = "tuning.json";

    /// Load tuning from a JSON file.
    ///
    /// Missing keys take their default value. A missing or unreadable file
    /// falls back to `Tuning::default()`.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No tuning at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Malformed tuning in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 10.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 10.0);
        assert_eq!(tuning.jump_speed, Tuning::default().jump_speed);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load(Path::new("/nonexistent/lava-dash/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }
}
