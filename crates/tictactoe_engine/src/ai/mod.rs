//! Move selection for the automated player.
//!
//! [`select_move`] runs the minimax search and lets the difficulty policy
//! replace its answer with a random legal move some of the time. The
//! randomness source is always supplied by the caller.

mod difficulty;
mod minimax;

pub use difficulty::{
    Difficulty, DifficultyTuning, EASY_RANDOM_CHANCE, MEDIUM_RANDOM_CHANCE, TuningError,
};
pub use minimax::{Pruning, SearchOutcome, WIN_SCORE, search};

use crate::rules::evaluate_status;
use crate::{Board, Player, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Why no move could be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board is already won or full; there is nothing to choose.
    #[display("Cannot select a move: the game is over")]
    GameOver,
}

impl std::error::Error for SelectError {}

/// Chooses `player`'s move on `board` under `difficulty`.
///
/// Unbeatable always returns the search's best move and draws no random
/// numbers. Easy and Medium first roll against their random-move chance.
///
/// # Errors
///
/// [`SelectError::GameOver`] when `board` is already won or drawn.
#[instrument(skip(board, tuning, rng), fields(empty = board.empty_count()))]
pub fn select_move<R: Rng>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    tuning: &DifficultyTuning,
    rng: &mut R,
) -> Result<Position, SelectError> {
    if evaluate_status(board).is_terminal() {
        return Err(SelectError::GameOver);
    }

    let chance = tuning.random_chance(difficulty);
    if chance > 0.0 && rng.gen_bool(chance) {
        let legal = Position::valid_moves(board);
        let pos = legal.choose(rng).copied().ok_or(SelectError::GameOver)?;
        debug!(%pos, "Random move");
        return Ok(pos);
    }

    let outcome = search(board, player, Pruning::AlphaBeta).ok_or(SelectError::GameOver)?;
    debug!(pos = %outcome.best(), score = outcome.score(), "Searched move");
    Ok(*outcome.best())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_terminal_board_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let won: Board = "XXX OO. ...".parse().unwrap();
        let drawn: Board = "XOX XOO OXX".parse().unwrap();
        for board in [won, drawn] {
            assert_eq!(
                select_move(
                    &board,
                    Player::O,
                    Difficulty::Unbeatable,
                    &DifficultyTuning::default(),
                    &mut rng
                ),
                Err(SelectError::GameOver)
            );
        }
    }

    #[test]
    fn test_unbeatable_ignores_rng() {
        let board: Board = "X.. .O. ..X".parse().unwrap();
        let tuning = DifficultyTuning::default();
        let picks: Vec<_> = (0..5)
            .map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                select_move(&board, Player::O, Difficulty::Unbeatable, &tuning, &mut rng)
            })
            .collect();
        assert!(picks.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_always_random_stays_legal() {
        let board: Board = "XO. .X. O..".parse().unwrap();
        let tuning = DifficultyTuning::new(1.0, 0.5).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let pos = select_move(&board, Player::X, Difficulty::Easy, &tuning, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }
}
