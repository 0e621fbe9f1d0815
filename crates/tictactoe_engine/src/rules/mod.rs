//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game engine and the move search share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::GameStatus;
use super::types::Board;

/// Classifies a board as won, drawn, or still in progress.
///
/// Lines are checked rows first, then columns, then the main diagonal,
/// then the anti-diagonal; the first complete line is reported.
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        return GameStatus::Won { winner, line };
    }
    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(evaluate_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert_eq!(
            evaluate_status(&board),
            GameStatus::Won {
                winner: Player::X,
                line: [Position::TopLeft, Position::Center, Position::BottomRight],
            }
        );
    }
}
