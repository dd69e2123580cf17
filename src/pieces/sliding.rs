//! Shared rules for the sliding pieces: Bishop, Rook, and Queen.
//!
//! A sliding move is legal when the destination shares a ray with the
//! origin, the ray's direction is in the piece's movement set, every square
//! strictly between is empty, and the destination is not held by a friendly
//! piece.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::geometry::direction::{is_sliding_move, ray, Direction, ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use crate::geometry::position::Position;
use crate::rules::chess_rules::ChessRules;

/// The directions a sliding kind may travel. Empty for non-sliding kinds.
pub fn movement_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &DIAGONALS,
        PieceKind::Rook => &ORTHOGONALS,
        PieceKind::Queen => &ALL_DIRECTIONS,
        _ => &[],
    }
}

pub fn is_valid_move(
    rules: &ChessRules,
    piece: &Piece,
    from: Position,
    to: Position,
    ignore_occupant: bool,
) -> bool {
    if !is_sliding_move(from, to) {
        return false;
    }
    let Some(direction) = Direction::find(from, to) else {
        return false;
    };
    if !movement_directions(piece.kind()).contains(&direction) {
        return false;
    }
    if ray(from, to).any(|between| rules.piece_kind(between).is_some()) {
        return false;
    }
    ignore_occupant || rules.piece_color(to) != Some(piece.color)
}

pub fn has_any_legal_move(rules: &ChessRules, piece: &Piece, from: Position) -> bool {
    movement_directions(piece.kind())
        .iter()
        .any(|&direction| match from.step(direction) {
            Some(to) => rules.piece_color(to) != Some(piece.color),
            None => false,
        })
}
