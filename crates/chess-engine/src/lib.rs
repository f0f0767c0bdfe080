//! Chess rules engine for a two-player, click-to-move game.
//!
//! This crate provides:
//! - [`Board`] - an 8×8 grid value; every move produces a new board
//! - [`Rules`] - move legality, attack queries, check/checkmate/stalemate detection
//! - [`make_move`] - move application with castling, en passant and promotion side effects
//! - [`Game`] - the controller owning history with undo/redo, turn, selection and clock
//! - [`suggest_move`] - a uniformly random pseudo-legal move sampler
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus};
//! use chess_core::{Color, Move};
//!
//! let mut game = Game::new();
//! game.start();
//! for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.commit(Move::from_uci(text).unwrap()).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Checkmate { winner: Color::Black });
//! ```

mod board;
mod clock;
mod config;
mod game;
mod history;
pub mod rules;
mod suggest;

pub use board::Board;
pub use clock::{Clock, ClockTick};
pub use config::{GameConfig, DEFAULT_CLOCK_SECONDS};
pub use game::{Game, GameError, SelectOutcome, TickOutcome};
pub use history::History;
pub use rules::{make_move, GameStatus, RuleOptions, Rules};
pub use suggest::suggest_move;
