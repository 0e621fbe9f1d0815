//! Engine configuration.

use crate::ai::{Difficulty, DifficultyTuning, EASY_RANDOM_CHANCE, MEDIUM_RANDOM_CHANCE};
use crate::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session against the automated player.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Difficulty of the automated player.
    #[serde(default)]
    difficulty: Difficulty,

    /// Side played by the automated player.
    #[serde(default = "default_automated_player")]
    automated_player: Player,

    /// Disables the automated player; both sides are played by callers.
    #[serde(default)]
    two_player: bool,

    /// Chance that Easy plays a random move.
    #[serde(default = "default_easy_random_chance")]
    easy_random_chance: f64,

    /// Chance that Medium plays a random move.
    #[serde(default = "default_medium_random_chance")]
    medium_random_chance: f64,

    /// Seed for the move-selection RNG; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_automated_player() -> Player {
    Player::O
}

fn default_easy_random_chance() -> f64 {
    EASY_RANDOM_CHANCE
}

fn default_medium_random_chance() -> f64 {
    MEDIUM_RANDOM_CHANCE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            automated_player: default_automated_player(),
            two_player: false,
            easy_random_chance: default_easy_random_chance(),
            medium_random_chance: default_medium_random_chance(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that `0 < medium_random_chance < easy_random_chance <= 1`, so
    /// Easy and Medium stay random and Easy is the weaker of the two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning().map(|_| ())
    }

    /// Side the engine plays, or `None` in two-player mode.
    pub fn automated_side(&self) -> Option<Player> {
        (!self.two_player).then_some(self.automated_player)
    }

    /// Random-move chances for the difficulty policies.
    pub fn tuning(&self) -> Result<DifficultyTuning, ConfigError> {
        DifficultyTuning::new(self.easy_random_chance, self.medium_random_chance)
            .map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Builds the move-selection RNG, seeded when a seed is configured.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.automated_side(), Some(Player::O));
        assert_eq!(*config.difficulty(), Difficulty::Unbeatable);
    }

    #[test]
    fn test_parses_all_fields() {
        let config = EngineConfig::from_toml(
            r#"
            difficulty = "medium"
            automated_player = "X"
            easy_random_chance = 0.9
            medium_random_chance = 0.1
            seed = 12
            "#,
        )
        .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(config.automated_side(), Some(Player::X));
        assert_eq!(config.tuning().unwrap(), DifficultyTuning::new(0.9, 0.1).unwrap());
        assert_eq!(*config.seed(), Some(12));
    }

    #[test]
    fn test_two_player_has_no_automated_side() {
        let config = EngineConfig::default().with_two_player(true);
        assert_eq!(config.automated_side(), None);
    }

    #[test]
    fn test_rejects_out_of_range_chance() {
        let err = EngineConfig::from_toml("easy_random_chance = 1.5").unwrap_err();
        assert!(err.message.contains("easy_random_chance"));
    }

    #[test]
    fn test_rejects_medium_above_easy() {
        let err =
            EngineConfig::from_toml("easy_random_chance = 0.2\nmedium_random_chance = 0.4").unwrap_err();
        assert!(err.message.contains("medium_random_chance"));
    }

    #[test]
    fn test_rejects_zero_medium_chance() {
        let err = EngineConfig::from_toml("medium_random_chance = 0.0\ndifficulty = \"medium\"")
            .unwrap_err();
        assert!(err.message.contains("0 < medium_random_chance"));
    }

    #[test]
    fn test_rejects_equal_chances() {
        assert!(
            EngineConfig::from_toml("easy_random_chance = 0.4\nmedium_random_chance = 0.4").is_err()
        );
    }

    #[test]
    fn test_rejects_both_chances_zero() {
        assert!(
            EngineConfig::from_toml("easy_random_chance = 0.0\nmedium_random_chance = 0.0").is_err()
        );
    }

    #[test]
    fn test_setters_are_checked_by_tuning() {
        let config = EngineConfig::default().with_medium_random_chance(0.0);
        assert!(config.tuning().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(EngineConfig::from_toml(r#"difficulty = "nightmare""#).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::RngCore;
        let config = EngineConfig::default().with_seed(Some(99));
        assert_eq!(config.rng().next_u64(), config.rng().next_u64());
    }
}
