//! Pawn movement rules.
//!
//! Forward is color-dependent: White walks up the ranks, Black down. The
//! diagonal step is only ever a capture, either of a piece occupying the
//! destination or en passant of a pawn that just passed it; the engine's
//! en-passant predicate decides the latter.

use crate::game_state::chess_types::Piece;
use crate::geometry::position::Position;
use crate::rules::chess_rules::ChessRules;

pub fn is_valid_move(
    rules: &ChessRules,
    piece: &Piece,
    from: Position,
    to: Position,
    ignore_occupant: bool,
) -> bool {
    if from == to {
        return false;
    }
    let forward = piece.color.forward();

    if to.rank - from.rank == forward {
        if from.file == to.file {
            // Straight ahead, never a capture.
            return rules.piece_color(to).is_none();
        }
        if (from.file - to.file).abs() == 1 {
            return match rules.piece_color(to) {
                None => rules.is_en_passant(to, piece.color),
                Some(occupant) => ignore_occupant || occupant == piece.color.opposite(),
            };
        }
    }

    if !piece.has_moved() && to.rank - from.rank == 2 * forward && from.file == to.file {
        let crossed = from.offset(forward, 0);
        return rules.piece_color(crossed).is_none() && rules.piece_color(to).is_none();
    }

    false
}

pub fn has_any_legal_move(rules: &ChessRules, piece: &Piece, from: Position) -> bool {
    let ahead = from.offset(piece.color.forward(), 0);
    if rules.piece_color(ahead).is_none() && ahead.is_in_bounds() {
        return true;
    }
    [ahead.offset(0, -1), ahead.offset(0, 1)]
        .into_iter()
        .any(|diagonal| rules.piece_color(diagonal) == Some(piece.color.opposite()))
}
