//! Move legality, check detection and move application.
//!
//! [`Rules`] bundles the [`RuleOptions`] in effect with the operations that
//! depend on them. Move application ([`make_move`]) does not depend on any
//! option and is a free function.

mod check;
mod legality;
mod movegen;
mod resolve;

pub use resolve::make_move;

use chess_core::Color;
use serde::{Deserialize, Serialize};

/// Switches between full path and check rules and a geometry-only legacy
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Require the squares between a rook, bishop or queen and its
    /// destination to be empty. When false, sliding pieces jump.
    pub block_sliding_paths: bool,
    /// Test each candidate response for check on the board after the
    /// response. When false, the board before the response is tested, so
    /// any pseudo-legal move counts as a response unless already in check.
    pub probe_scratch_board: bool,
}

impl RuleOptions {
    /// Sliding pieces jump and responses are probed on the pre-move board.
    pub const LEGACY: RuleOptions = RuleOptions {
        block_sliding_paths: false,
        probe_scratch_board: false,
    };
}

impl Default for RuleOptions {
    fn default() -> Self {
        RuleOptions {
            block_sliding_paths: true,
            probe_scratch_board: true,
        }
    }
}

/// State of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The game continues.
    InProgress,
    /// The side to move is in check with no response.
    Checkmate { winner: Color },
    /// The side to move is not in check and has no response.
    Stalemate,
    /// The side to move ran out of time.
    Timeout { winner: Color },
}

impl GameStatus {
    /// Returns true if the game has ended.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, or `None` for a draw or an unfinished game.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Timeout { winner } => Some(winner),
            GameStatus::InProgress | GameStatus::Stalemate => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate, draw"),
            GameStatus::Timeout { winner } => write!(f, "time out, {} wins", winner),
        }
    }
}

/// The rules engine.
///
/// Stateless apart from its options; the board and the history of
/// snapshots are passed to every query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    options: RuleOptions,
}

impl Rules {
    /// Creates a rules engine with the given options.
    pub const fn new(options: RuleOptions) -> Self {
        Rules { options }
    }

    /// Returns the options in effect.
    pub const fn options(&self) -> RuleOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_corrected_rules() {
        let options = RuleOptions::default();
        assert!(options.block_sliding_paths);
        assert!(options.probe_scratch_board);
        assert_ne!(options, RuleOptions::LEGACY);
    }

    #[test]
    fn status_winner() {
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert_eq!(GameStatus::Stalemate.winner(), None);
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::Black
            }
            .winner(),
            Some(Color::Black)
        );
        assert_eq!(
            GameStatus::Timeout {
                winner: Color::White
            }
            .winner(),
            Some(Color::White)
        );
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Stalemate.is_over());
    }

    #[test]
    fn status_display() {
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate, White wins"
        );
        assert_eq!(GameStatus::Stalemate.to_string(), "stalemate, draw");
    }
}
