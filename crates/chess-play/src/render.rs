//! Text rendering of the game for the terminal.

use chess_core::{Color, Square};
use chess_engine::{Game, GameStatus};
use std::fmt::Write;

/// Formats seconds as `mm:ss`.
pub fn clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Draws the board with rank and file labels.
///
/// The selected square is wrapped in brackets; the origin and destination
/// of a pending suggestion are wrapped in angle brackets.
pub fn board(game: &Game) -> String {
    let board = game.board();
    let selected = game.selected();
    let suggested = game.suggested();
    let mut out = String::new();

    for row in 0..8u8 {
        let _ = write!(out, "{} ", 8 - row);
        for col in 0..8u8 {
            let square = Square::at(row, col);
            let ch = board.get(square).map_or('.', |p| p.to_char());
            let hinted = suggested.is_some_and(|mv| mv.from == square || mv.to == square);
            let cell = if selected == Some(square) {
                format!("[{}]", ch)
            } else if hinted {
                format!("<{}>", ch)
            } else {
                format!(" {} ", ch)
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

/// One-line summary: side to move, both clocks and the status.
pub fn status_line(game: &Game) -> String {
    let mut line = format!(
        "white {}  black {}  ",
        clock(game.remaining(Color::White)),
        clock(game.remaining(Color::Black)),
    );
    match game.status() {
        GameStatus::InProgress if !game.is_started() => line.push_str("press 'start' to begin"),
        GameStatus::InProgress => {
            let _ = write!(line, "{} to move", game.turn());
            if game.in_check() {
                line.push_str(" (check)");
            }
        }
        status => {
            let _ = write!(line, "{}", status);
        }
    }
    line
}
