//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, GameStatus, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects moves once the status is terminal.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if *state.status() == GameStatus::InProgress {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: game in progress and square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameInProgress::check(state)?;
        SquareIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is in progress
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to occupied
/// - All state invariants hold
pub struct MoveContract;

impl MoveContract {
    /// Board is monotonic: occupied squares never change and exactly one
    /// empty square became occupied.
    fn single_new_mark(before: &GameState, after: &GameState) -> bool {
        let changed: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
            .collect();

        match changed.as_slice() {
            [pos] => {
                before.board().get(*pos) == Square::Empty
                    && after.board().get(*pos) != Square::Empty
            }
            _ => false,
        }
    }
}

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut descriptions = Vec::new();

        if !Self::single_new_mark(before, after) {
            warn!("Board changed outside a single empty square");
            descriptions.push("Board squares are monotonic (never overwritten)".to_string());
        }

        if let Err(violations) = TicTacToeInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        assert!(game.apply_move(1, 1));

        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(game.state(), &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Draw);
        let action = Move::new(Player::X, Position::Center);
        assert_eq!(MoveContract::pre(&state, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        assert!(after.apply_move(0, 0));
        assert!(MoveContract::post(before.state(), after.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut game = Game::new();
        assert!(game.apply_move(1, 1));
        let before = *game.state();

        // O overwrites X's center, bypassing validation.
        let mut after = before;
        after.place_mark(Position::Center);

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
