//! Difficulty policies for the automated player.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Default chance that Easy ignores the search and plays a random move.
pub const EASY_RANDOM_CHANCE: f64 = 0.75;

/// Default chance that Medium ignores the search and plays a random move.
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.30;

/// How hard the automated player tries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random moves.
    Easy,
    /// Optimal play with occasional random moves.
    Medium,
    /// Always the optimal move; never loses.
    #[default]
    Unbeatable,
}

/// Random-move chances per difficulty.
///
/// Always satisfies `0 < medium < easy <= 1`, so Easy is more random than
/// Medium and neither plays like Unbeatable.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct DifficultyTuning {
    /// Chance that Easy plays a random legal move.
    easy_random_chance: f64,
    /// Chance that Medium plays a random legal move.
    medium_random_chance: f64,
}

impl DifficultyTuning {
    /// Creates a tuning from explicit chances.
    ///
    /// # Errors
    ///
    /// [`TuningError`] unless `0 < medium_random_chance < easy_random_chance <= 1`.
    /// NaN never satisfies the bounds.
    pub fn new(easy_random_chance: f64, medium_random_chance: f64) -> Result<Self, TuningError> {
        let ordered = 0.0 < medium_random_chance
            && medium_random_chance < easy_random_chance
            && easy_random_chance <= 1.0;
        if !ordered {
            return Err(TuningError {
                easy_random_chance,
                medium_random_chance,
            });
        }
        Ok(Self {
            easy_random_chance,
            medium_random_chance,
        })
    }

    /// Chance that `difficulty` plays a random move instead of the best one.
    pub fn random_chance(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy_random_chance,
            Difficulty::Medium => self.medium_random_chance,
            Difficulty::Unbeatable => 0.0,
        }
    }
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            easy_random_chance: EASY_RANDOM_CHANCE,
            medium_random_chance: MEDIUM_RANDOM_CHANCE,
        }
    }
}

/// Random-move chances that would not keep Easy below Medium below Unbeatable.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
#[display(
    "random-move chances must satisfy 0 < medium_random_chance < easy_random_chance <= 1, got easy_random_chance = {}, medium_random_chance = {}",
    easy_random_chance,
    medium_random_chance
)]
pub struct TuningError {
    /// Rejected Easy chance.
    pub easy_random_chance: f64,
    /// Rejected Medium chance.
    pub medium_random_chance: f64,
}
