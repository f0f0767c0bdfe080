//! Two-sided countdown clock.

use chess_core::Color;

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Time was deducted; the seconds left are attached.
    Running(u32),
    /// The side was already out of time.
    Flagged,
}

/// Seconds remaining for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    remaining: [u32; 2],
    initial: u32,
}

impl Clock {
    /// Creates a clock giving both sides `seconds`.
    pub const fn new(seconds: u32) -> Self {
        Clock {
            remaining: [seconds; 2],
            initial: seconds,
        }
    }

    /// Returns the seconds left for `color`.
    #[inline]
    pub const fn remaining(&self, color: Color) -> u32 {
        self.remaining[color.index()]
    }

    /// Returns the starting time per side.
    #[inline]
    pub const fn initial(&self) -> u32 {
        self.initial
    }

    /// Deducts one second from `color`.
    ///
    /// A side at zero is not decremented further; the tick that finds it at
    /// zero reports [`ClockTick::Flagged`].
    pub fn tick(&mut self, color: Color) -> ClockTick {
        let left = &mut self.remaining[color.index()];
        if *left == 0 {
            return ClockTick::Flagged;
        }
        *left -= 1;
        ClockTick::Running(*left)
    }

    /// Restores both sides to the starting time.
    pub fn reset(&mut self) {
        self.remaining = [self.initial; 2];
    }
}
