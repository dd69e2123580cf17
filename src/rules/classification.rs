//! Post-move position classification: Valid, Check, Checkmate, Stalemate.
//!
//! The stages run strictly cheapest-first and short-circuit: stalemate scan
//! when not in check, king escape scan, attacker count, then the
//! capture/block analysis for a lone attacker. Each later stage may assume
//! the earlier ones failed.

use crate::game_state::chess_types::{Color, MoveResult, Piece, PieceKind};
use crate::geometry::direction::{ray, ALL_DIRECTIONS};
use crate::geometry::position::Position;
use crate::rules::chess_rules::ChessRules;

impl ChessRules {
    /// Classifies the current position for `color`, the side now to move.
    pub(crate) fn classify_position(&self, color: Color) -> MoveResult {
        if !self.is_in_check(color) {
            return self.stalemate_or_valid(color);
        }
        let Some(king_pos) = self.board().king_position(color) else {
            return MoveResult::Valid;
        };
        // A reachable, unattacked neighbouring square means the king can
        // always step out, whatever else is going on.
        for direction in ALL_DIRECTIONS {
            let Some(escape) = king_pos.step(direction) else {
                continue;
            };
            if self.piece_color(escape) != Some(color)
                && !self.is_position_under_attack(escape, color)
            {
                return MoveResult::Check;
            }
        }
        self.find_checkmate(color, king_pos)
    }

    /// The not-in-check half: any piece with any legal move keeps the game
    /// going, otherwise the side to move is stalemated.
    fn stalemate_or_valid(&self, color: Color) -> MoveResult {
        let movable = self
            .board()
            .pieces()
            .any(|(pos, piece)| piece.color == color && piece.has_any_legal_move(self, pos));
        if movable {
            MoveResult::Valid
        } else {
            MoveResult::Stalemate
        }
    }

    /// In check with no king escape. Counts the attackers on the king
    /// square and decides whether capture or interposition still saves the
    /// position.
    fn find_checkmate(&self, color: Color, king_pos: Position) -> MoveResult {
        let mut attacker: Option<(Position, &Piece)> = None;
        for (pos, piece) in self.board().pieces() {
            if piece.color == color.opposite() && piece.is_valid_move(self, pos, king_pos, false) {
                if attacker.is_some() {
                    // Double check: with no escape found, nothing can block
                    // or capture two attackers in one move.
                    return MoveResult::Checkmate;
                }
                attacker = Some((pos, piece));
            }
        }
        let Some((attacker_pos, attacker)) = attacker else {
            // In check but no attacker reaches the king square; nothing
            // more to refute, treat as an escapable check.
            return MoveResult::Check;
        };

        // A defender other than the king capturing the attacker lifts the
        // check; the king itself was already handled by the escape scan.
        if self.is_position_under_attack_ex(attacker_pos, attacker.color, true) {
            return MoveResult::Check;
        }
        if attacker.kind() == PieceKind::Knight {
            // Cannot be blocked, and this branch means cannot be captured.
            return MoveResult::Checkmate;
        }
        let blockable = ray(attacker_pos, king_pos)
            .any(|between| self.is_position_under_attack_ex(between, attacker.color, true));
        if blockable {
            MoveResult::Check
        } else {
            MoveResult::Checkmate
        }
    }
}
