//! Parsing of terminal input lines.

use chess_core::{Move, Square};
use thiserror::Error;

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Click on a square.
    Select(Square),
    /// Two clicks: origin, then destination.
    Move(Move),
    Undo,
    Redo,
    Reset,
    Suggest,
    Board,
    Help,
    Quit,
}

/// Errors produced when an input line is not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("invalid move '{0}'")]
    InvalidMove(String),
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
}

/// Help text listing the commands.
pub const HELP: &str = "\
commands:
  start              start the game and the clock
  <square>           click a square, e.g. e2
  <from><to>         move by two clicks, e.g. e2e4
  select <square>    same as <square>
  move <from><to>    same as <from><to>
  undo | redo        step through the history
  reset              back to the starting position
  suggest            highlight a random move
  board              show the board
  quit               leave";

impl Command {
    /// Parses an input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();

        match word.to_ascii_lowercase().as_str() {
            "start" | "s" => Ok(Command::Start),
            "undo" | "u" => Ok(Command::Undo),
            "redo" | "r" => Ok(Command::Redo),
            "reset" => Ok(Command::Reset),
            "suggest" | "hint" => Ok(Command::Suggest),
            "board" | "b" => Ok(Command::Board),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "select" => {
                let text = arg.ok_or(CommandError::MissingArgument("select"))?;
                parse_square(text).map(Command::Select)
            }
            "move" | "m" => {
                let text = arg.ok_or(CommandError::MissingArgument("move"))?;
                parse_move(text).map(Command::Move)
            }
            _ if word.len() == 2 => parse_square(word).map(Command::Select),
            _ if word.len() == 4 || word.len() == 5 => parse_move(word).map(Command::Move),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_square(text: &str) -> Result<Square, CommandError> {
    Square::from_algebraic(text).ok_or_else(|| CommandError::InvalidSquare(text.to_string()))
}

fn parse_move(text: &str) -> Result<Move, CommandError> {
    Move::from_uci(text).ok_or_else(|| CommandError::InvalidMove(text.to_string()))
}
