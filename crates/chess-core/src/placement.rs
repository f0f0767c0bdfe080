//! Piece placement text, the first field of FEN.
//!
//! Ranks are listed from rank 8 (row 0) down to rank 1 (row 7), separated
//! by `/`. Digits encode runs of empty squares.

use crate::ColoredPiece;
use thiserror::Error;

/// An 8×8 grid of square contents, indexed `[row][col]`.
pub type Grid = [[Option<ColoredPiece>; 8]; 8];

/// The standard starting placement.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur when parsing piece placement text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: usize },

    #[error("rank {rank} has {squares} squares, expected 8")]
    RankLength { rank: usize, squares: usize },
}

/// Parses piece placement text into a grid.
///
/// Only the placement field is read; anything after the first whitespace
/// (the remaining FEN fields) is ignored.
pub fn parse_placement(text: &str) -> Result<Grid, PlacementError> {
    let placement = text.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(PlacementError::RankCount(ranks.len()));
    }

    let mut grid: Grid = [[None; 8]; 8];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as usize;
            } else if let Some(piece) = ColoredPiece::from_char(ch) {
                if col < 8 {
                    grid[row][col] = Some(piece);
                }
                col += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { ch, rank: 8 - row });
            }
            if col > 8 {
                break;
            }
        }
        if col != 8 {
            return Err(PlacementError::RankLength {
                rank: 8 - row,
                squares: col,
            });
        }
    }
    Ok(grid)
}

/// Serializes a grid back into piece placement text.
pub fn placement_string(grid: &Grid) -> String {
    let mut out = String::with_capacity(72);
    for (row, squares) in grid.iter().enumerate() {
        if row > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for square in squares {
            match square {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }
    out
}
