//! Full game management: history, turn, selection and clock.
//!
//! The [`Game`] struct owns everything a front end needs to drive a
//! click-to-move game:
//! - the board snapshots with an undo/redo cursor
//! - the side to move and the game status
//! - the selected origin square and the pending move suggestion
//! - the two-sided clock
//!
//! Ticks and moves both take `&mut Game`, so a tick can never land in the
//! middle of a move.

use crate::clock::{Clock, ClockTick};
use crate::config::GameConfig;
use crate::history::History;
use crate::rules::{make_move, GameStatus, Rules};
use crate::suggest::suggest_move;
use crate::Board;
use chess_core::{Color, Move, MoveKind, Square};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Reasons a move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game has not been started.
    #[error("game has not started")]
    NotStarted,
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the origin square belongs to the side not to move.
    #[error("piece on {0} does not belong to the side to move")]
    WrongColor(Square),
    /// The piece cannot move that way.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// What a square selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    /// The selected square changed.
    pub selection_changed: bool,
    /// A move was made, and of which kind.
    pub committed: Option<MoveKind>,
    /// The game status after the selection.
    pub status: GameStatus,
}

/// What a clock tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock is not running: the game is not started or already over.
    Idle,
    /// One second was deducted from `color`.
    Running { color: Color, remaining: u32 },
    /// The side to move ran out of time and lost.
    Flagged { winner: Color },
}

/// A click-to-move chess game with undo/redo and a clock.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    history: History,
    /// Board the game starts from and returns to on reset.
    start: Board,
    start_turn: Color,
    turn: Color,
    status: GameStatus,
    started: bool,
    selected: Option<Square>,
    suggested: Option<Move>,
    clock: Clock,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting position with default settings.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a game from the standard starting position.
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::initial(), Color::White, config)
    }

    /// Creates a game from a custom starting board.
    ///
    /// The position is classified immediately, so a board with no response
    /// for `turn` starts out finished.
    pub fn from_board(start: Board, turn: Color, config: GameConfig) -> Self {
        let rules = Rules::new(config.rules);
        let history = History::new(start);
        let status = rules.classify(&start, history.played(), turn);
        Game {
            rules,
            history,
            start,
            start_turn: turn,
            turn,
            status,
            started: false,
            selected: None,
            suggested: None,
            clock: Clock::new(config.clock_seconds),
        }
    }

    /// Returns the board at the history cursor.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner; `None` for a draw or an unfinished game.
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// Returns true once [`start`](Self::start) has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the selected origin square.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the pending move suggestion.
    pub fn suggested(&self) -> Option<Move> {
        self.suggested
    }

    /// Returns the seconds left for `color`.
    pub fn remaining(&self, color: Color) -> u32 {
        self.clock.remaining(color)
    }

    /// Returns the board snapshots and cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the history cursor.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Returns the rules in effect.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns true if the side to move is in check.
    pub fn in_check(&self) -> bool {
        self.rules.in_check(self.board(), self.turn)
    }

    /// Returns every move the side to move may make.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        self.rules
            .pseudo_legal_moves(self.board(), self.history.played(), self.turn)
    }

    /// Starts the game and its clock. Returns false if it was already
    /// started or is over.
    pub fn start(&mut self) -> bool {
        if self.started || self.is_over() {
            return false;
        }
        self.started = true;
        debug!(turn = %self.turn, "game started");
        true
    }

    /// Handles a click on `square`.
    ///
    /// With no selection, selects the square if it holds a piece of the
    /// side to move. With a selection, clicking the same square deselects
    /// it and clicking another square attempts the move; the selection is
    /// cleared either way.
    pub fn handle_square_select(&mut self, square: Square) -> SelectOutcome {
        let mut outcome = SelectOutcome {
            selection_changed: false,
            committed: None,
            status: self.status,
        };
        if !self.started || self.is_over() {
            return outcome;
        }

        match self.selected.take() {
            Some(from) => {
                outcome.selection_changed = true;
                if from != square {
                    match self.commit(Move::new(from, square)) {
                        Ok(kind) => outcome.committed = Some(kind),
                        Err(e) => trace!(error = %e, "move rejected"),
                    }
                }
            }
            None => {
                let own = self
                    .board()
                    .get(square)
                    .is_some_and(|piece| piece.color == self.turn);
                if own {
                    self.selected = Some(square);
                    outcome.selection_changed = true;
                }
            }
        }

        outcome.status = self.status;
        outcome
    }

    /// Makes a move for the side to move.
    ///
    /// On success the new board is appended to the history (discarding any
    /// redo snapshots), the turn passes and the position is classified for
    /// the new side to move.
    pub fn commit(&mut self, mv: Move) -> Result<MoveKind, GameError> {
        self.selected = None;
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let board = *self.board();
        let piece = board.get(mv.from).ok_or(GameError::EmptySquare(mv.from))?;
        if piece.color != self.turn {
            return Err(GameError::WrongColor(mv.from));
        }
        if !self
            .rules
            .is_legal_shape(&board, self.history.played(), mv)
        {
            return Err(GameError::IllegalMove(mv));
        }

        let (next, kind) = make_move(&board, mv);
        self.history.push(next);
        self.turn = self.turn.opposite();
        self.suggested = None;
        self.status = self.rules.classify(&next, self.history.played(), self.turn);
        self.debug_check_turn();

        debug!(%mv, ?kind, cursor = self.history.cursor(), "move committed");
        if self.status.is_over() {
            info!(status = %self.status, "game over");
        }
        Ok(kind)
    }

    /// Steps back one position. Returns false if nothing changed.
    pub fn undo(&mut self) -> bool {
        if !self.started || self.is_over() || !self.history.undo() {
            return false;
        }
        self.after_cursor_move();
        debug!(cursor = self.history.cursor(), "undo");
        true
    }

    /// Steps forward one position. Returns false if nothing changed.
    pub fn redo(&mut self) -> bool {
        if !self.started || self.is_over() || !self.history.redo() {
            return false;
        }
        self.after_cursor_move();
        debug!(cursor = self.history.cursor(), "redo");
        true
    }

    fn after_cursor_move(&mut self) {
        self.turn = self.turn.opposite();
        self.selected = None;
        self.suggested = None;
        self.debug_check_turn();
    }

    /// Returns to the starting board with a fresh clock. The game must be
    /// started again.
    pub fn reset(&mut self) {
        self.started = false;
        self.history.reset(self.start);
        self.turn = self.start_turn;
        self.status = self
            .rules
            .classify(&self.start, self.history.played(), self.turn);
        self.selected = None;
        self.suggested = None;
        self.clock.reset();
        debug!("game reset");
    }

    /// Picks a random move for the side to move and keeps it as the pending
    /// suggestion.
    pub fn suggest_move(&mut self) -> Option<Move> {
        self.suggest_move_with(&mut rand::thread_rng())
    }

    /// Like [`suggest_move`](Self::suggest_move) with a caller-supplied
    /// random source.
    pub fn suggest_move_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        if !self.started || self.is_over() {
            return None;
        }
        self.suggested = suggest_move(
            &self.rules,
            self.history.current(),
            self.history.played(),
            self.turn,
            rng,
        );
        debug!(suggestion = ?self.suggested, "move suggested");
        self.suggested
    }

    /// Advances the clock by one second for the side to move.
    ///
    /// Does nothing unless the game is started and in progress. A side that
    /// is already at zero loses on time.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.started || self.is_over() {
            return TickOutcome::Idle;
        }
        let color = self.turn;
        match self.clock.tick(color) {
            ClockTick::Running(remaining) => TickOutcome::Running { color, remaining },
            ClockTick::Flagged => {
                let winner = color.opposite();
                self.status = GameStatus::Timeout { winner };
                self.selected = None;
                info!(loser = %color, "flag fell");
                TickOutcome::Flagged { winner }
            }
        }
    }

    /// Undo and redo flip the turn explicitly; it must stay in step with the
    /// cursor parity.
    fn debug_check_turn(&self) {
        let expected = if self.history.cursor() % 2 == 0 {
            self.start_turn
        } else {
            self.start_turn.opposite()
        };
        debug_assert_eq!(self.turn, expected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{ColoredPiece, Piece};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(text: &str) -> Move {
        Move::from_uci(text).unwrap()
    }

    fn started() -> Game {
        let mut game = Game::new();
        assert!(game.start());
        game
    }

    fn play(game: &mut Game, moves: &[&str]) {
        for text in moves {
            game.commit(mv(text))
                .unwrap_or_else(|e| panic!("{} failed: {}", text, e));
        }
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.turn(), Color::White);
        assert!(!game.is_started());
        assert!(!game.is_over());
        assert!(!game.in_check());
        assert_eq!(game.remaining(Color::White), 600);
        assert_eq!(game.remaining(Color::Black), 600);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn start_only_once() {
        let mut game = Game::new();
        assert!(game.start());
        assert!(!game.start());
    }

    #[test]
    fn moves_require_start() {
        let mut game = Game::new();
        assert_eq!(game.commit(mv("e2e4")), Err(GameError::NotStarted));
        let outcome = game.handle_square_select(sq("e2"));
        assert!(!outcome.selection_changed);
        assert_eq!(game.selected(), None);
        assert_eq!(game.suggest_move(), None);
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn commit_errors() {
        let mut game = started();
        assert_eq!(game.commit(mv("e4e5")), Err(GameError::EmptySquare(sq("e4"))));
        assert_eq!(game.commit(mv("e7e5")), Err(GameError::WrongColor(sq("e7"))));
        assert_eq!(game.commit(mv("e2e5")), Err(GameError::IllegalMove(mv("e2e5"))));
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn double_push_from_start() {
        let mut game = started();
        assert_eq!(game.commit(mv("e2e4")), Ok(MoveKind::DoublePush));
        assert!(game.board().is_empty(Square::at(6, 4)));
        assert_eq!(
            game.board().get(Square::at(4, 4)),
            Some(ColoredPiece::new(Piece::Pawn, Color::White))
        );
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn select_then_move() {
        let mut game = started();

        let outcome = game.handle_square_select(sq("e7"));
        assert!(!outcome.selection_changed, "black piece on white's turn");

        let outcome = game.handle_square_select(sq("e4"));
        assert!(!outcome.selection_changed, "empty square");

        let outcome = game.handle_square_select(sq("g1"));
        assert!(outcome.selection_changed);
        assert_eq!(game.selected(), Some(sq("g1")));

        let outcome = game.handle_square_select(sq("f3"));
        assert!(outcome.selection_changed);
        assert_eq!(outcome.committed, Some(MoveKind::Normal));
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(game.selected(), None);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn failed_move_clears_selection() {
        let mut game = started();
        game.handle_square_select(sq("g1"));
        let outcome = game.handle_square_select(sq("g3"));
        assert!(outcome.selection_changed);
        assert_eq!(outcome.committed, None);
        assert_eq!(game.selected(), None);
        assert_eq!(game.cursor(), 0);
        assert_eq!(*game.board(), Board::initial());
    }

    #[test]
    fn clicking_selection_again_deselects() {
        let mut game = started();
        game.handle_square_select(sq("b1"));
        let outcome = game.handle_square_select(sq("b1"));
        assert!(outcome.selection_changed);
        assert_eq!(outcome.committed, None);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn clicking_own_piece_with_selection_does_not_reselect() {
        let mut game = started();
        game.handle_square_select(sq("b1"));
        let outcome = game.handle_square_select(sq("g1"));
        assert_eq!(outcome.committed, None);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn undo_and_redo() {
        let mut game = started();
        play(&mut game, &["e2e4", "e7e5"]);
        let after_e5 = *game.board();

        assert!(game.undo());
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.cursor(), 1);
        assert!(game.undo());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(*game.board(), Board::initial());
        assert!(!game.undo());

        assert!(game.redo());
        assert!(game.redo());
        assert!(!game.redo());
        assert_eq!(*game.board(), after_e5);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn undo_clears_selection_and_suggestion() {
        let mut game = started();
        play(&mut game, &["e2e4"]);
        game.handle_square_select(sq("e7"));
        game.suggest_move_with(&mut StdRng::seed_from_u64(5));
        assert!(game.suggested().is_some());
        assert!(game.undo());
        assert_eq!(game.selected(), None);
        assert_eq!(game.suggested(), None);
    }

    #[test]
    fn move_after_undo_overwrites_redo_branch() {
        let mut game = started();
        play(&mut game, &["e2e4", "e7e5"]);
        game.undo();
        play(&mut game, &["c7c5"]);
        assert_eq!(game.history().len(), 3);
        assert!(!game.redo());
        assert!(game
            .board()
            .get(sq("c5"))
            .is_some_and(|p| p.is(Piece::Pawn, Color::Black)));
        assert!(game.board().is_empty(sq("e5")));
    }

    #[test]
    fn fools_mate() {
        let mut game = started();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(game.commit(mv("a2a3")), Err(GameError::GameOver));
        assert!(!game.undo());
        assert_eq!(game.suggest_move(), None);
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn checkmate_through_select_outcome() {
        let mut game = started();
        play(&mut game, &["f2f3", "e7e5", "g2g4"]);
        game.handle_square_select(sq("d8"));
        let outcome = game.handle_square_select(sq("h4"));
        assert_eq!(outcome.committed, Some(MoveKind::Normal));
        assert_eq!(
            outcome.status,
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        let outcome = game.handle_square_select(sq("a2"));
        assert!(!outcome.selection_changed);
    }

    #[test]
    fn stalemate_ends_game_as_draw() {
        let board = Board::from_placement("7k/8/5Q2/6K1/8/8/8/8").unwrap();
        let mut game = Game::from_board(board, Color::White, GameConfig::default());
        game.start();
        game.commit(mv("f6f7")).unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn finished_start_position() {
        let board = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        let mut game = Game::from_board(board, Color::Black, GameConfig::default());
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(!game.start());
    }

    #[test]
    fn clock_runs_for_side_to_move() {
        let mut game = started();
        assert_eq!(
            game.tick(),
            TickOutcome::Running {
                color: Color::White,
                remaining: 599
            }
        );
        play(&mut game, &["e2e4"]);
        assert_eq!(
            game.tick(),
            TickOutcome::Running {
                color: Color::Black,
                remaining: 599
            }
        );
        assert_eq!(game.remaining(Color::White), 599);
    }

    #[test]
    fn time_out_wins_for_opponent() {
        let config = GameConfig {
            clock_seconds: 2,
            ..GameConfig::default()
        };
        let mut game = Game::with_config(config);
        game.start();
        play(&mut game, &["e2e4"]);
        game.tick();
        game.tick();
        assert_eq!(game.remaining(Color::Black), 0);
        assert!(!game.is_over());
        assert_eq!(
            game.tick(),
            TickOutcome::Flagged {
                winner: Color::White
            }
        );
        assert_eq!(
            game.status(),
            GameStatus::Timeout {
                winner: Color::White
            }
        );
        assert_eq!(game.winner(), Some(Color::White));
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn reset_restores_everything() {
        let config = GameConfig {
            clock_seconds: 30,
            ..GameConfig::default()
        };
        let mut game = Game::with_config(config);
        game.start();
        play(&mut game, &["e2e4", "e7e5"]);
        game.tick();
        game.handle_square_select(sq("g1"));
        game.reset();

        assert!(!game.is_started());
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.history().len(), 1);
        assert_eq!(*game.board(), Board::initial());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.selected(), None);
        assert_eq!(game.suggested(), None);
        assert_eq!(game.remaining(Color::White), 30);
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn reset_after_game_over() {
        let mut game = started();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        game.reset();
        assert!(!game.is_over());
        assert!(game.start());
        assert!(game.commit(mv("e2e4")).is_ok());
    }

    #[test]
    fn suggestion_is_own_move_and_cleared_by_commit() {
        let mut game = started();
        let mut rng = StdRng::seed_from_u64(11);
        let suggestion = game.suggest_move_with(&mut rng).unwrap();
        assert_eq!(game.suggested(), Some(suggestion));
        assert!(game.pseudo_legal_moves().contains(&suggestion));
        game.commit(suggestion).unwrap();
        assert_eq!(game.suggested(), None);
    }
}
