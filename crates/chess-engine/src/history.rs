//! Board snapshots with an undo/redo cursor.

use crate::Board;

/// Ordered board snapshots and a cursor into them.
///
/// Index 0 is the starting board; index `i` is the board after the `i`-th
/// move. The cursor always points at a valid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Creates a history holding only `start`.
    pub fn new(start: Board) -> Self {
        History {
            snapshots: vec![start],
            cursor: 0,
        }
    }

    /// Returns the snapshot at the cursor.
    #[inline]
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the snapshots from the start up to and including the cursor.
    #[inline]
    pub fn played(&self) -> &[Board] {
        &self.snapshots[..=self.cursor]
    }

    /// Returns every snapshot, including those past the cursor.
    #[inline]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the cursor position.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of snapshots.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns true if there is a snapshot after the cursor.
    #[inline]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Returns true if there is a snapshot before the cursor.
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Discards the snapshots after the cursor, appends `board` and moves
    /// the cursor onto it.
    pub fn push(&mut self, board: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor += 1;
    }

    /// Moves the cursor back one snapshot. Returns false at the start.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor forward one snapshot. Returns false at the end.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Drops everything but the snapshot `start`.
    pub fn reset(&mut self, start: Board) {
        self.snapshots.clear();
        self.snapshots.push(start);
        self.cursor = 0;
    }
}
