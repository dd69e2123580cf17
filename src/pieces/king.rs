//! King movement rules, including castling preconditions.
//!
//! Ordinary king moves are single steps. A castling request is a two-file
//! king move from the home square; its legality is checked here, while the
//! atomic king+rook relocation is the engine's job.

use crate::game_state::chess_types::{CastleSide, Piece};
use crate::geometry::direction::{ray, Direction, ALL_DIRECTIONS};
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

    if is_castling_attempt(piece, from, to) && can_castle(rules, piece, from, to) {
        return true;
    }

    if (from.rank - to.rank).abs() > 1 || (from.file - to.file).abs() > 1 {
        return false;
    }
    ignore_occupant || rules.piece_color(to) != Some(piece.color)
}

pub fn has_any_legal_move(rules: &ChessRules, piece: &Piece, from: Position) -> bool {
    ALL_DIRECTIONS
        .into_iter()
        .any(|direction| match from.step(direction) {
            Some(to) => {
                rules.piece_color(to) != Some(piece.color)
                    && !rules.is_position_under_attack(to, piece.color)
            }
            None => false,
        })
}

/// A two-file move along the home rank from the unmoved king's home square.
pub fn is_castling_attempt(piece: &Piece, from: Position, to: Position) -> bool {
    !piece.has_moved()
        && from == Position::new(piece.color.home_rank(), 5)
        && to.rank == from.rank
        && (to.file == CastleSide::Queenside.king_destination_file()
            || to.file == CastleSide::Kingside.king_destination_file())
}

/// Full castling precondition check, spelled out in the order the cheap
/// tests come first: not in check, matching unmoved rook on its corner,
/// empty squares between king and rook, and an unattacked king path
/// (both crossed squares, destination included).
fn can_castle(rules: &ChessRules, piece: &Piece, from: Position, to: Position) -> bool {
    let color = piece.color;
    if rules.is_in_check(color) {
        return false;
    }
    let side = if to.file < from.file {
        CastleSide::Queenside
    } else {
        CastleSide::Kingside
    };
    if rules.has_rook_moved(color, side) {
        return false;
    }
    let rook_corner = Position::new(from.rank, side.rook_file());
    if ray(from, rook_corner).any(|between| rules.piece_kind(between).is_some()) {
        return false;
    }
    let direction = match side {
        CastleSide::Queenside => Direction::Left,
        CastleSide::Kingside => Direction::Right,
    };
    let Some(crossed) = from.step(direction) else {
        return false;
    };
    !rules.is_position_under_attack(crossed, color) && !rules.is_position_under_attack(to, color)
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{CastleSide, Color, MoveResult, Piece, PieceKind};
    use crate::geometry::position::Position;
    use crate::rules::chess_rules::ChessRules;

    fn fixture(extra: Vec<(Position, Piece)>) -> ChessRules {
        let mut layout = vec![
            (
                Position::new(1, 5),
                Piece::new(Color::White, PieceKind::King),
            ),
            (
                Position::new(8, 5),
                Piece::new(Color::Black, PieceKind::King),
            ),
        ];
        layout.extend(extra);
        ChessRules::from_layout(layout).unwrap()
    }

    #[test]
    fn test_single_step_moves() {
        let mut game = fixture(vec![]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(2, 6)),
            MoveResult::Valid
        );
        assert_eq!(
            game.make_move(Position::new(8, 5), Position::new(6, 5)),
            MoveResult::Invalid
        );
        assert_eq!(
            game.make_move(Position::new(8, 5), Position::new(7, 5)),
            MoveResult::Valid
        );
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut game = fixture(vec![(
            Position::new(8, 4),
            Piece::new(Color::Black, PieceKind::Rook),
        )]);
        // d-file is covered by the black rook.
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 4)),
            MoveResult::InvalidChecked
        );
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(2, 5)),
            MoveResult::Valid
        );
    }

    #[test]
    fn test_kingside_castling_relocates_both_pieces() {
        let mut game = fixture(vec![(
            Position::new(1, 8),
            Piece::new(Color::White, PieceKind::Rook),
        )]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 7)),
            MoveResult::Valid
        );
        assert_eq!(
            game.piece_at(Position::new(1, 7)),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(
            game.piece_at(Position::new(1, 6)),
            Some((PieceKind::Rook, Color::White))
        );
        assert!(game.piece_at(Position::new(1, 8)).is_none());
        assert!(game.has_rook_moved(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn test_queenside_castling_relocates_both_pieces() {
        let mut game = fixture(vec![(
            Position::new(1, 1),
            Piece::new(Color::White, PieceKind::Rook),
        )]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 3)),
            MoveResult::Valid
        );
        assert_eq!(
            game.piece_at(Position::new(1, 3)),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(
            game.piece_at(Position::new(1, 4)),
            Some((PieceKind::Rook, Color::White))
        );
        assert!(game.piece_at(Position::new(1, 1)).is_none());
    }

    #[test]
    fn test_castling_requires_unmoved_pieces() {
        let mut game = fixture(vec![(
            Position::new(1, 8),
            Piece::new(Color::White, PieceKind::Rook),
        )]);
        game.make_move(Position::new(1, 8), Position::new(2, 8));
        game.make_move(Position::new(8, 5), Position::new(7, 5));
        game.make_move(Position::new(2, 8), Position::new(1, 8));
        game.make_move(Position::new(7, 5), Position::new(8, 5));
        // The rook is back home but its flag is one-way.
        assert!(game.has_rook_moved(Color::White, CastleSide::Kingside));
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 7)),
            MoveResult::Invalid
        );
    }

    #[test]
    fn test_castling_requires_empty_corridor() {
        let mut game = fixture(vec![
            (
                Position::new(1, 1),
                Piece::new(Color::White, PieceKind::Rook),
            ),
            (
                Position::new(1, 2),
                Piece::new(Color::White, PieceKind::Knight),
            ),
        ]);
        // The knight square is between king and rook even though the king
        // never crosses it.
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 3)),
            MoveResult::Invalid
        );
    }

    #[test]
    fn test_castling_refused_through_or_out_of_check() {
        // Crossed square f1 is attacked.
        let mut game = fixture(vec![
            (
                Position::new(1, 8),
                Piece::new(Color::White, PieceKind::Rook),
            ),
            (
                Position::new(8, 6),
                Piece::new(Color::Black, PieceKind::Rook),
            ),
        ]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 7)),
            MoveResult::Invalid
        );

        // King currently in check.
        let mut game = fixture(vec![
            (
                Position::new(1, 8),
                Piece::new(Color::White, PieceKind::Rook),
            ),
            (
                Position::new(5, 5),
                Piece::new(Color::Black, PieceKind::Rook),
            ),
        ]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 7)),
            MoveResult::Invalid
        );
    }

    #[test]
    fn test_castling_needs_the_matching_rook_on_its_corner() {
        // No rook at all.
        let mut game = fixture(vec![]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 7)),
            MoveResult::Invalid
        );

        // An enemy rook on the corner does not count.
        let mut game = fixture(vec![(
            Position::new(1, 8),
            Piece::new(Color::Black, PieceKind::Rook),
        )]);
        assert_eq!(
            game.make_move(Position::new(1, 5), Position::new(1, 7)),
            MoveResult::Invalid
        );
    }
}
