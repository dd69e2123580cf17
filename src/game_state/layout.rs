//! Starting piece layouts.
//!
//! The standard layout feeds `BoardState::new`; tests build custom layouts
//! directly as `(Position, Piece)` lists and go through
//! `BoardState::from_layout`, which validates them.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::geometry::position::Position;

const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard chess starting position as a `(Position, Piece)` list.
pub fn standard_layout() -> Vec<(Position, Piece)> {
    let mut layout = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        let back_rank = color.home_rank();
        let pawn_rank = back_rank + color.forward();
        for (index, &kind) in BACK_RANK_KINDS.iter().enumerate() {
            let file = index as i8 + 1;
            layout.push((Position::new(back_rank, file), Piece::new(color, kind)));
        }
        for file in 1..=8 {
            layout.push((
                Position::new(pawn_rank, file),
                Piece::new(color, PieceKind::Pawn),
            ));
        }
    }
    layout
}
