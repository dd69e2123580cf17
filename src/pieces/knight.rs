//! Knight movement rules. L-shaped jumps are never blocked; the only thing
//! that can refuse a destination is a friendly occupant.

use crate::game_state::chess_types::Piece;
use crate::geometry::position::Position;
use crate::rules::chess_rules::ChessRules;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub fn is_valid_move(
    rules: &ChessRules,
    piece: &Piece,
    from: Position,
    to: Position,
    ignore_occupant: bool,
) -> bool {
    let d_rank = (from.rank - to.rank).abs();
    let d_file = (from.file - to.file).abs();
    if (d_rank == 1 && d_file == 2) || (d_rank == 2 && d_file == 1) {
        ignore_occupant || rules.piece_color(to) != Some(piece.color)
    } else {
        false
    }
}

pub fn has_any_legal_move(rules: &ChessRules, piece: &Piece, from: Position) -> bool {
    KNIGHT_OFFSETS.into_iter().any(|(d_rank, d_file)| {
        let to = from.offset(d_rank, d_file);
        to.is_in_bounds() && rules.piece_color(to) != Some(piece.color)
    })
}
