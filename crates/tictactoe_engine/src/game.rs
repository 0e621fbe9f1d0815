//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns its [`GameState`] exclusively. Callers read it through
//! [`Game::state`] and change it only by placing marks or resetting.

use super::action::{Move, MoveError};
use super::ai::{self, Difficulty, DifficultyTuning, SelectError};
use super::contracts::{Contract, MoveContract};
use super::rules::evaluate_status;
use super::types::{GameState, GameStatus};
use super::Position;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns `false` and leaves the state untouched when the cell is off
    /// the board, already occupied, or the game is over.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        match self.try_move(row, col) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                false
            }
        }
    }

    /// Places the current player's mark at `(row, col)`, reporting why a
    /// move was rejected.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for coordinates outside 0..3, otherwise as
    /// [`Game::try_place`].
    pub fn try_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.try_place(pos)
    }

    /// Places the current player's mark at `pos` and re-evaluates the status.
    ///
    /// The turn passes to the opponent only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended
    /// - [`MoveError::SquareOccupied`] if `pos` holds a mark
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn try_place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        let action = Move::new(self.state.current_player(), pos);
        MoveContract::pre(&self.state, &action)?;

        let mut next = self.state;
        next.place_mark(pos);
        let status = evaluate_status(next.board());
        next.set_status(status);
        if status == GameStatus::InProgress {
            next.pass_turn();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&self.state, &next)?;

        self.state = next;
        debug!(%action, "Move applied");
        if status.is_terminal() {
            info!(%status, "Game over");
        }
        Ok(status)
    }

    /// Chooses a move for the player to move under `difficulty`.
    ///
    /// The state is not changed; apply the result with [`Game::try_place`].
    ///
    /// # Errors
    ///
    /// [`SelectError::GameOver`] if the game has already ended.
    pub fn select_move<R: Rng>(
        &self,
        difficulty: Difficulty,
        tuning: &DifficultyTuning,
        rng: &mut R,
    ) -> Result<Position, SelectError> {
        ai::select_move(
            self.state.board(),
            self.state.current_player(),
            difficulty,
            tuning,
            rng,
        )
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("Game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_accepted_move_marks_and_flips() {
        let mut game = Game::new();
        assert!(game.apply_move(1, 1));
        assert_eq!(
            game.state().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.state().current_player(), Player::O);
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut game = Game::new();
        assert!(game.apply_move(0, 0));
        let snapshot = game.clone();

        assert!(!game.apply_move(0, 0));
        assert!(!game.apply_move(3, 0));
        assert!(!game.apply_move(0, 7));
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_try_move_reports_reason() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move(5, 1),
            Err(MoveError::OutOfBounds { row: 5, col: 1 })
        );
        game.try_move(2, 2).unwrap();
        assert_eq!(
            game.try_move(2, 2),
            Err(MoveError::SquareOccupied(Position::BottomRight))
        );
    }

    #[test]
    fn test_turn_frozen_after_win() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(game.apply_move(row, col));
        }
        assert_eq!(
            game.try_move(0, 2),
            Ok(GameStatus::Won {
                winner: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            })
        );
        assert_eq!(game.state().current_player(), Player::X);
        assert_eq!(game.try_move(2, 2), Err(MoveError::GameOver));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = Game::new();
        assert!(game.apply_move(0, 0));
        assert!(game.apply_move(2, 2));
        game.reset();
        assert_eq!(game, Game::new());
        assert_eq!(*game.state(), GameState::new());
    }
}
