//! A game against the automated player.
//!
//! The session chains the automated reply after a human move only when the
//! caller asks for it via [`Session::respond`], so a presentation layer can
//! render and pause between the two moves.

use crate::action::MoveError;
use crate::ai::{Difficulty, DifficultyTuning, SelectError};
use crate::config::{ConfigError, EngineConfig};
use crate::{Game, GameState, Player, Position};
use derive_more::{Display, From};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// Failure of the automated reply.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// No move could be selected.
    #[display("{}", _0)]
    Select(SelectError),
    /// The selected move was rejected by the rules.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {}

/// A game plus the automated player's settings and randomness.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    automated: Option<Player>,
    difficulty: Difficulty,
    tuning: DifficultyTuning,
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session from a validated configuration.
    #[instrument(skip(config))]
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, config.rng())
    }

    /// Creates a session that draws randomness from `rng`.
    pub fn with_rng(config: &EngineConfig, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        let tuning = config.tuning()?;
        info!(
            automated = ?config.automated_side(),
            difficulty = %config.difficulty(),
            "Session created"
        );
        Ok(Self {
            game: Game::new(),
            automated: config.automated_side(),
            difficulty: *config.difficulty(),
            tuning,
            rng,
        })
    }

    /// Read-only snapshot of the game.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Side played by the engine, if any.
    pub fn automated_player(&self) -> Option<Player> {
        self.automated
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty for subsequent replies.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// True when the game continues and the automated side is to move.
    pub fn automated_turn_pending(&self) -> bool {
        let state = self.game.state();
        !state.status().is_terminal() && Some(state.current_player()) == self.automated
    }

    /// Applies a human move at `(row, col)`.
    ///
    /// Rejected (returns `false`) when it is the automated side's turn or
    /// the rules reject the move.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        if self.automated_turn_pending() {
            warn!("Human move attempted on the automated player's turn");
            return false;
        }
        self.game.apply_move(row, col)
    }

    /// Plays the automated reply if one is pending.
    ///
    /// Returns the chosen position, or `None` when no reply was due.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn respond(&mut self) -> Result<Option<Position>, SessionError> {
        if !self.automated_turn_pending() {
            return Ok(None);
        }

        let pos = self
            .game
            .select_move(self.difficulty, &self.tuning, &mut self.rng)?;
        self.game.try_place(pos)?;
        debug!(%pos, "Automated reply applied");
        Ok(Some(pos))
    }

    /// Replaces the game with a fresh one, keeping the settings.
    pub fn reset(&mut self) {
        self.game.reset();
    }
}
