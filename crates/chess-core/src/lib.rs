//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`] for row/column board coordinates
//! - [`Move`] and [`MoveKind`] for move representation
//! - Piece placement text parsing and serialization

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::{Move, MoveKind};
pub use piece::{ColoredPiece, Piece};
pub use placement::{parse_placement, placement_string, Grid, PlacementError, STARTPOS};
pub use square::Square;
