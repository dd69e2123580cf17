//! Single-slot undo record for speculative move application.
//!
//! Legality checking applies a move, tests the mover's king safety, and
//! reverts on failure before any other mutation can happen, so one record is
//! always enough; speculation never nests.

use crate::game_state::chess_types::Piece;
use crate::geometry::position::Position;

/// What the last board mutation was, which determines how to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Move,
    Capture,
    EnPassant,
    Castling,
    Promotion,
}

/// Everything needed to fully reverse the most recent board mutation.
///
/// `moved` is the piece as it was before the move (flags included).
/// `second` carries the other piece involved, when there is one: the
/// captured piece on its square for `Capture` and `EnPassant`, the rook on
/// its corner for `Castling`, the replaced pawn for `Promotion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    pub kind: MoveKind,
    pub moved: Piece,
    pub from: Position,
    pub to: Position,
    pub second: Option<(Position, Piece)>,
}
