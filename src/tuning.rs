//! Data-driven game balance
//!
//! Everything a designer might want to nudge without touching simulation
//! code: hit forgiveness, scoring, particle feel. Loaded from a JSON
//! file when present, defaults otherwise.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Forgiveness radius added to a target's nominal radius (m).
    /// A gameplay parameter, not a physical constant.
    pub hit_margin: f32,
    /// Score awarded for a level-1 hit
    pub base_hit_score: u32,
    /// Score reduction per level above the first
    pub score_falloff: u32,
    /// Spawn a particle burst every Nth cursor step
    pub particle_cadence: usize,
    /// Particles per burst, inclusive bounds
    pub burst_min: u32,
    pub burst_max: u32,
    /// Hard cap on live particles
    pub max_particles: usize,
    /// Downward drift added to particle velocity each tick (px/tick²)
    pub particle_gravity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hit_margin: 3.75,
            base_hit_score: 100,
            score_falloff: 10,
            particle_cadence: 3,
            burst_min: 1,
            burst_max: 3,
            max_particles: MAX_PARTICLES,
            particle_gravity: 0.1,
        }
    }
}

impl Tuning {
    /// Points awarded for a hit at the given level
    pub fn hit_score(&self, level: u8) -> u32 {
        self.base_hit_score
            .saturating_sub(self.score_falloff * level.saturating_sub(1) as u32)
    }

    /// Load from a JSON file; any IO or parse problem falls back to the
    /// defaults with a log line, never an error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Bad tuning file {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the current values out as JSON.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save tuning to {}: {err}", path.display());
                } else {
                    log::info!("Tuning saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("Failed to serialize tuning: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_score_falloff() {
        let tuning = Tuning::default();
        assert_eq!(tuning.hit_score(1), 100);
        assert_eq!(tuning.hit_score(2), 90);
        assert_eq!(tuning.hit_score(3), 80);
    }

    #[test]
    fn test_hit_score_never_underflows() {
        let tuning = Tuning {
            score_falloff: 60,
            ..Tuning::default()
        };
        assert_eq!(tuning.hit_score(3), 0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        // serde(default) lets a tuning file override just one knob.
        let tuning: Tuning = serde_json::from_str(r#"{"hit_margin": 5.0}"#).unwrap();
        assert_eq!(tuning.hit_margin, 5.0);
        assert_eq!(tuning.base_hit_score, 100);
    }
}
