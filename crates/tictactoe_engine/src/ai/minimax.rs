//! Minimax search with alpha-beta pruning.
//!
//! Every node explores a fresh copy of the board, so the caller's board is
//! never aliased. The side the search runs for is always the maximizer.

use crate::rules::evaluate_status;
use crate::{Board, GameStatus, Player, Position};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Base score of a win; faster wins and slower losses score better.
pub const WIN_SCORE: i32 = 10;

/// Whether the search may skip branches that cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pruning {
    /// Standard alpha-beta cutoffs.
    #[default]
    AlphaBeta,
    /// Visit every node; used as a reference for the pruned search.
    Exhaustive,
}

/// Result of searching one position.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SearchOutcome {
    /// Highest-scoring move; the first in row-major order among equals.
    best: Position,
    /// Score of `best`.
    score: i32,
    /// Nodes visited, root children included.
    nodes: u64,
    /// Exact score of every legal move, row-major.
    scores: Vec<(Position, i32)>,
}

/// Searches `board` for `player`'s best move.
///
/// Returns `None` when the board has no empty square. Each root move is
/// searched with a full window, so the reported scores are exact minimax
/// values in both pruning modes.
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn search(board: &Board, player: Player, pruning: Pruning) -> Option<SearchOutcome> {
    let mut searcher = Searcher {
        player,
        pruning,
        nodes: 0,
    };

    let mut scores = Vec::with_capacity(board.empty_count());
    let mut best: Option<(Position, i32)> = None;
    for pos in empty_squares(board) {
        searcher.nodes += 1;
        let child = board.with_mark(pos, player);
        let score = searcher.minimax(&child, 0, false, i32::MIN, i32::MAX);
        scores.push((pos, score));
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (best, score) = best?;
    debug!(%best, score, nodes = searcher.nodes, "Search complete");
    Some(SearchOutcome {
        best,
        score,
        nodes: searcher.nodes,
        scores,
    })
}

fn empty_squares(board: &Board) -> impl Iterator<Item = Position> + '_ {
    Position::ALL.into_iter().filter(|pos| board.is_empty(*pos))
}

struct Searcher {
    player: Player,
    pruning: Pruning,
    nodes: u64,
}

impl Searcher {
    /// Scores `board`, reached `depth` plies below the root's children.
    fn minimax(
        &mut self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        match evaluate_status(board) {
            GameStatus::Won { winner, .. } if winner == self.player => return WIN_SCORE - depth,
            GameStatus::Won { .. } => return depth - WIN_SCORE,
            GameStatus::Draw => return 0,
            GameStatus::InProgress => {}
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in empty_squares(board) {
            self.nodes += 1;
            let child = board.with_mark(pos, mover);
            let score = self.minimax(&child, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let outcome = search(&board("OO. XX. X.."), Player::O, Pruning::AlphaBeta).unwrap();
        assert_eq!(*outcome.best(), Position::TopRight);
        assert_eq!(*outcome.score(), WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let outcome = search(&board("XX. .O. ..."), Player::O, Pruning::AlphaBeta).unwrap();
        assert_eq!(*outcome.best(), Position::TopRight);
    }

    #[test]
    fn test_only_the_immediate_win_scores_full_marks() {
        let outcome = search(&board("OO. .X. X.X"), Player::O, Pruning::AlphaBeta).unwrap();
        let winners: Vec<_> = outcome
            .scores()
            .iter()
            .filter(|(_, score)| *score == WIN_SCORE)
            .collect();
        assert_eq!(winners, vec![&(Position::TopRight, WIN_SCORE)]);
    }

    #[test]
    fn test_forced_loss_scores_by_depth() {
        // X threatens both the top row and the left column.
        let outcome = search(&board("XX. .O. X.O"), Player::O, Pruning::AlphaBeta).unwrap();
        assert_eq!(*outcome.score(), 1 - WIN_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_and_picks_first_cell() {
        let outcome = search(&Board::new(), Player::X, Pruning::AlphaBeta).unwrap();
        assert_eq!(*outcome.score(), 0);
        assert_eq!(*outcome.best(), Position::TopLeft);
        assert_eq!(outcome.scores().len(), 9);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let pruned = search(&Board::new(), Player::X, Pruning::AlphaBeta).unwrap();
        let full = search(&Board::new(), Player::X, Pruning::Exhaustive).unwrap();
        assert_eq!(pruned.scores(), full.scores());
        assert!(pruned.nodes() < full.nodes());
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert!(search(&board("XOX XOO OXX"), Player::X, Pruning::AlphaBeta).is_none());
    }
}
