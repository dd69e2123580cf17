//! Board coordinates.
//!
//! A [`Position`] is a (rank, file) pair with both coordinates in `1..=8`
//! for on-board squares. Rank 1 is White's home rank, rank 8 is Black's;
//! file 1 is the queenside rook file. Construction is unchecked so that
//! geometric arithmetic can walk off the board and be filtered afterwards
//! with [`Position::is_in_bounds`] or [`Position::step`].

use crate::geometry::direction::Direction;

/// Lowest valid rank/file coordinate.
pub const BOARD_LOWER_BOUND: i8 = 1;
/// Highest valid rank/file coordinate.
pub const BOARD_UPPER_BOUND: i8 = 8;

/// A square coordinate. Equality and ordering are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub rank: i8,
    pub file: i8,
}

impl Position {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Position { rank, file }
    }

    /// True iff both coordinates are in `1..=8`.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.rank >= BOARD_LOWER_BOUND
            && self.rank <= BOARD_UPPER_BOUND
            && self.file >= BOARD_LOWER_BOUND
            && self.file <= BOARD_UPPER_BOUND
    }

    /// Unchecked coordinate arithmetic. The result may be off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Position::new(self.rank + d_rank, self.file + d_file)
    }

    /// One square in the given direction, `None` when that leaves the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_rank, d_file) = direction.delta();
        let next = self.offset(d_rank, d_file);
        next.is_in_bounds().then_some(next)
    }
}
