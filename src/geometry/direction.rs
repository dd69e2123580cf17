//! Straight-line directions and ray classification.
//!
//! [`Direction::find`] buckets any ordered pair of distinct squares into one
//! of the 8 compass directions by comparing ranks and files; it does not by
//! itself prove the squares share a ray. [`is_sliding_move`] is the ray test,
//! and [`ray`] walks the squares strictly between two squares on a common
//! ray. Sliding-piece legality, castling emptiness checks, and the
//! block-square search in checkmate classification all reuse these.

use std::cmp::Ordering;

use crate::geometry::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

/// All 8 directions, used for king neighbourhood scans.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
];

/// Rook movement set.
pub const ORTHOGONALS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Bishop movement set.
pub const DIAGONALS: [Direction; 4] = [
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::UpLeft,
];

impl Direction {
    /// `(d_rank, d_file)` of a single step. Up is towards rank 8.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (-1, 1),
            Direction::Down => (-1, 0),
            Direction::DownLeft => (-1, -1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (1, -1),
        }
    }

    /// Classifies the relationship between two squares into a compass
    /// direction, `None` when they are the same square.
    pub fn find(from: Position, to: Position) -> Option<Direction> {
        match (to.rank.cmp(&from.rank), to.file.cmp(&from.file)) {
            (Ordering::Greater, Ordering::Greater) => Some(Direction::UpRight),
            (Ordering::Greater, Ordering::Equal) => Some(Direction::Up),
            (Ordering::Greater, Ordering::Less) => Some(Direction::UpLeft),
            (Ordering::Equal, Ordering::Greater) => Some(Direction::Right),
            (Ordering::Equal, Ordering::Equal) => None,
            (Ordering::Equal, Ordering::Less) => Some(Direction::Left),
            (Ordering::Less, Ordering::Greater) => Some(Direction::DownRight),
            (Ordering::Less, Ordering::Equal) => Some(Direction::Down),
            (Ordering::Less, Ordering::Less) => Some(Direction::DownLeft),
        }
    }
}

/// True iff `to` is reachable from `from` along a single straight or
/// diagonal ray: same rank, same file, or `|d_rank| == |d_file|`.
pub fn is_sliding_move(from: Position, to: Position) -> bool {
    if from == to {
        return false;
    }
    let d_rank = (from.rank - to.rank).abs();
    let d_file = (from.file - to.file).abs();
    d_rank == d_file || d_rank == 0 || d_file == 0
}

/// The squares strictly between `from` and `to`.
///
/// Only meaningful when `is_sliding_move(from, to)` holds; off-ray pairs
/// produce a walk that terminates at the board edge instead.
pub fn ray(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let direction = Direction::find(from, to);
    std::iter::successors(direction.and_then(|d| from.step(d)), move |&p| {
        direction.and_then(|d| p.step(d))
    })
    .take_while(move |&p| p != to)
}
