//! Attack detection.
//!
//! One predicate underpins check detection, castling path safety, and the
//! escape/block searches of checkmate classification: "does any opposing
//! piece reach this square as a capture".

use crate::game_state::chess_types::{Color, PieceKind};
use crate::geometry::position::Position;
use crate::rules::chess_rules::ChessRules;

impl ChessRules {
    /// True iff any piece of the opposite color could capture `pos`.
    pub fn is_position_under_attack(&self, pos: Position, color_being_attacked: Color) -> bool {
        self.is_position_under_attack_ex(pos, color_being_attacked, false)
    }

    /// Attack test with an opt-out for the opposing king.
    ///
    /// # Arguments
    ///
    /// * `pos` - the square being tested.
    /// * `color_being_attacked` - the defending side; attackers are the
    ///   other color.
    /// * `ignore_king` - skip the opposing king. Needed when testing squares
    ///   next to a king, where counting the king as its own defender would
    ///   recurse forever, and when asking whether a non-king piece can
    ///   capture or block.
    pub(crate) fn is_position_under_attack_ex(
        &self,
        pos: Position,
        color_being_attacked: Color,
        ignore_king: bool,
    ) -> bool {
        self.board().pieces().any(|(from, piece)| {
            piece.color != color_being_attacked
                && !(ignore_king && piece.kind() == PieceKind::King)
                && piece.is_valid_move(self, from, pos, true)
        })
    }

    /// True iff `color`'s king square is under attack.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_pos) = self.board().king_position(color) else {
            return false;
        };
        self.is_position_under_attack(king_pos, color)
    }
}
