//! Kind dispatch for the shared piece capability surface.
//!
//! Every kind answers the same two questions: "is this exact move
//! geometrically legal for you" and "do you have any legal move at all".
//! `ignore_occupant` widens the first question to "could you capture that
//! square", which attack detection needs even for friendly-occupied
//! destinations.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::geometry::position::Position;
use crate::pieces::{king, knight, pawn, sliding};
use crate::rules::chess_rules::ChessRules;

impl Piece {
    pub fn is_valid_move(
        &self,
        rules: &ChessRules,
        from: Position,
        to: Position,
        ignore_occupant: bool,
    ) -> bool {
        match self.kind() {
            PieceKind::Pawn => pawn::is_valid_move(rules, self, from, to, ignore_occupant),
            PieceKind::Knight => knight::is_valid_move(rules, self, from, to, ignore_occupant),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliding::is_valid_move(rules, self, from, to, ignore_occupant)
            }
            PieceKind::King => king::is_valid_move(rules, self, from, to, ignore_occupant),
        }
    }

    pub fn has_any_legal_move(&self, rules: &ChessRules, from: Position) -> bool {
        match self.kind() {
            PieceKind::Pawn => pawn::has_any_legal_move(rules, self, from),
            PieceKind::Knight => knight::has_any_legal_move(rules, self, from),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                sliding::has_any_legal_move(rules, self, from)
            }
            PieceKind::King => king::has_any_legal_move(rules, self, from),
        }
    }
}
