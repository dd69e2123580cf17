//! Errors used by the chess rules engine.
//!
//! Gameplay rejections are not errors: an illegal move request comes back as
//! a `MoveResult` code and leaves state untouched. `ChessError` covers the
//! setup surface instead, where a caller hands the engine data that can be
//! structurally wrong, such as a custom starting layout.

use crate::game_state::chess_types::Color;
use crate::geometry::position::Position;

/// Validation failures when building a board from a piece layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// A layout entry places a piece outside the 8x8 board.
    OutOfBounds(Position),
    /// Two layout entries claim the same square.
    SquareOccupied(Position),
    /// A color has no king; the engine cannot track check without one.
    MissingKing(Color),
    /// A color has more than one king.
    ExtraKing(Color),
}
