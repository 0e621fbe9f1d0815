//! Tic-tac-toe engine with a minimax opponent.
//!
//! # Architecture
//!
//! - **Game state & rules**: [`Game`] owns a [`GameState`] and is changed only
//!   through [`Game::apply_move`] / [`Game::try_place`] and [`Game::reset`].
//! - **Move selector**: [`select_move`] runs an alpha-beta minimax search and
//!   applies a [`Difficulty`] policy using a caller-supplied RNG.
//! - **Session**: [`Session`] pairs a game with the automated side, its
//!   difficulty and a seedable RNG, driven by an [`EngineConfig`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, Player, Session};
//!
//! let config = EngineConfig::default().with_seed(Some(7));
//! let mut session = Session::new(&config)?;
//! assert!(session.play(1, 1));
//! let reply = session.respond()?.expect("engine answers X");
//! assert!(reply.is_corner());
//! assert_eq!(session.state().current_player(), Player::X);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod config;
mod contracts;
mod game;
mod invariants;
mod position;
mod session;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use ai::{
    Difficulty, DifficultyTuning, EASY_RANDOM_CHANCE, MEDIUM_RANDOM_CHANCE, Pruning,
    SearchOutcome, SelectError, TuningError, WIN_SCORE, search, select_move,
};
pub use config::{ConfigError, EngineConfig};
pub use contracts::{Contract, LegalMove, MoveContract};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    StatusConsistentInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use session::{Session, SessionError};
pub use types::{Board, BoardParseError, GameState, GameStatus, Player, Square, WinningLine};
