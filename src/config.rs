//! Heuristic tuning constants.
//!
//! Defaults are the hand-tuned values the engine ships with. A JSON file can
//! override any subset of them; missing fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a tuning file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read tuning file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// Day thresholds and weights used by the scorer and selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seeding is not considered before this day.
    pub seed_min_day: u32,
    /// From this day on, any available COMPLETE is played immediately.
    pub end_game_day: u32,
    /// Reference day for the remaining-sun estimate in complete scoring.
    pub final_day: u32,
    /// Grow gets a bonus once I hold at least this many seeds.
    pub surplus_seed_threshold: u32,
    pub surplus_seed_grow_bonus: f64,
    /// Lower clamp for the complete-scoring denominator.
    pub complete_denominator_floor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            seed_min_day: 2,
            end_game_day: 22,
            final_day: 23,
            surplus_seed_threshold: 2,
            surplus_seed_grow_bonus: 0.5,
            complete_denominator_floor: 0.2,
        }
    }
}

impl Tuning {
    /// Parses and validates a tuning JSON document.
    pub fn from_json(s: &str) -> Result<Tuning, ConfigError> {
        let tuning: Tuning = serde_json::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Loads a tuning file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Tuning, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Tuning::from_json(&text)
    }

    /// Checks values that would break the scoring arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.complete_denominator_floor > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "complete_denominator_floor",
                reason: "must be positive",
            });
        }
        if !self.surplus_seed_grow_bonus.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "surplus_seed_grow_bonus",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}
