//! Mutable piece placement store.
//!
//! `BoardState` owns the occupancy grid, the turn, the pending promotion
//! square, and the single-slot [`UndoRecord`] that makes speculative move
//! application reversible. It performs mutations on request and keeps the
//! undo bookkeeping honest; deciding *whether* a mutation is legal is the
//! rules engine's job.

use crate::errors::ChessError;
use crate::game_state::chess_types::{Color, Piece, PieceKind, PieceState};
use crate::game_state::layout::standard_layout;
use crate::game_state::undo_state::{MoveKind, UndoRecord};
use crate::geometry::position::Position;

#[derive(Debug, Clone)]
pub struct BoardState {
    squares: [[Option<Piece>; 8]; 8],
    turn: Color,
    promotion_target: Option<Position>,
    last_move: Option<UndoRecord>,
}

impl BoardState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_layout(standard_layout()).expect("standard layout is always valid")
    }

    /// Builds a board from an arbitrary piece list, for games started from
    /// a custom position and for test fixtures.
    ///
    /// # Arguments
    ///
    /// * `layout` - `(Position, Piece)` pairs; every position must be
    ///   in bounds and distinct, and each color must field exactly one king.
    ///
    /// # Returns
    ///
    /// * `Result<BoardState, ChessError>` - the validated board, White to
    ///   move, or the first validation failure.
    pub fn from_layout(layout: Vec<(Position, Piece)>) -> Result<Self, ChessError> {
        let mut board = BoardState {
            squares: [[None; 8]; 8],
            turn: Color::White,
            promotion_target: None,
            last_move: None,
        };
        for (pos, piece) in layout {
            if !pos.is_in_bounds() {
                return Err(ChessError::OutOfBounds(pos));
            }
            if board.piece(pos).is_some() {
                return Err(ChessError::SquareOccupied(pos));
            }
            if piece.kind() == PieceKind::King && board.king_position(piece.color).is_some() {
                return Err(ChessError::ExtraKing(piece.color));
            }
            board.put(pos, piece);
        }
        for color in [Color::White, Color::Black] {
            if board.king_position(color).is_none() {
                return Err(ChessError::MissingKing(color));
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn piece(&self, pos: Position) -> Option<&Piece> {
        if !pos.is_in_bounds() {
            return None;
        }
        self.squares[(pos.rank - 1) as usize][(pos.file - 1) as usize].as_ref()
    }

    pub fn piece_color(&self, pos: Position) -> Option<Color> {
        self.piece(pos).map(|piece| piece.color)
    }

    pub fn piece_kind(&self, pos: Position) -> Option<PieceKind> {
        self.piece(pos).map(|piece| piece.kind())
    }

    /// All occupied squares with their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, slot)| {
                slot.as_ref()
                    .map(|piece| (Position::new(rank as i8 + 1, file as i8 + 1), piece))
            })
        })
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind() == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Moves a piece, capturing whatever sat on the destination, and records
    /// the mutation in the undo slot.
    pub fn move_piece(&mut self, from: Position, to: Position) {
        let Some(moved) = self.take(from) else {
            return;
        };
        let captured = self.take(to);
        self.put(to, moved);
        self.last_move = Some(UndoRecord {
            kind: if captured.is_some() {
                MoveKind::Capture
            } else {
                MoveKind::Move
            },
            moved,
            from,
            to,
            second: captured.map(|piece| (to, piece)),
        });
    }

    /// En passant: the pawn moves diagonally onto an empty square and the
    /// passed enemy pawn on `victim` is removed. Recorded as one mutation so
    /// the revert restores the victim too.
    pub fn en_passant_move(&mut self, from: Position, to: Position, victim: Position) {
        let Some(moved) = self.take(from) else {
            return;
        };
        let captured = self.take(victim);
        self.put(to, moved);
        self.last_move = Some(UndoRecord {
            kind: MoveKind::EnPassant,
            moved,
            from,
            to,
            second: captured.map(|piece| (victim, piece)),
        });
    }

    /// Relocates king and rook atomically for a pre-validated castling move.
    pub fn castle(
        &mut self,
        king_from: Position,
        king_to: Position,
        rook_from: Position,
        rook_to: Position,
    ) {
        let Some(king) = self.take(king_from) else {
            return;
        };
        let rook = self.take(rook_from);
        self.put(king_to, king);
        if let Some(rook) = rook {
            self.put(rook_to, rook);
        }
        self.last_move = Some(UndoRecord {
            kind: MoveKind::Castling,
            moved: king,
            from: king_from,
            to: king_to,
            second: rook.map(|piece| (rook_from, piece)),
        });
    }

    /// Reverses the mutation held in the undo slot, if any, consuming it.
    pub fn revert_last_move(&mut self) {
        let Some(record) = self.last_move.take() else {
            return;
        };
        match record.kind {
            MoveKind::Move | MoveKind::Capture | MoveKind::EnPassant => {
                self.take(record.to);
                self.put(record.from, record.moved);
                if let Some((pos, piece)) = record.second {
                    self.put(pos, piece);
                }
            }
            MoveKind::Castling => {
                self.take(record.to);
                self.put(record.from, record.moved);
                if let Some((rook_from, rook)) = record.second {
                    // The rook sits one file inside the king's destination,
                    // on the side it came from.
                    let rook_to = if record.to.file < record.from.file {
                        record.to.offset(0, 1)
                    } else {
                        record.to.offset(0, -1)
                    };
                    self.take(rook_to);
                    self.put(rook_from, rook);
                }
            }
            MoveKind::Promotion => {
                self.take(record.to);
                self.put(record.from, record.moved);
            }
        }
    }

    /// Post-commit flag hook for the piece that just arrived on `to`.
    ///
    /// Pawns recompute en-passant eligibility from the rank delta alone: a
    /// pawn is eligible exactly when the move just made was a two-square
    /// advance. Kings and rooks set their one-way movement flag.
    pub fn finish_move(&mut self, from: Position, to: Position) {
        let Some(piece) = self.piece_mut(to) else {
            return;
        };
        match &mut piece.state {
            PieceState::Pawn {
                has_moved,
                en_passant_eligible,
            } => {
                *en_passant_eligible = (from.rank - to.rank).abs() == 2;
                *has_moved = true;
            }
            PieceState::Rook { has_moved } | PieceState::King { has_moved } => {
                *has_moved = true;
            }
            _ => {}
        }
    }

    /// Flips the turn and closes the en-passant window of the side now to
    /// move: a double-stepped pawn was capturable only during the opponent's
    /// single reply, which has just ended.
    pub fn change_turn(&mut self) {
        self.turn = self.turn.opposite();
        for row in &mut self.squares {
            for slot in row.iter_mut().flatten() {
                if slot.color != self.turn {
                    continue;
                }
                if let PieceState::Pawn {
                    en_passant_eligible, ..
                } = &mut slot.state
                {
                    *en_passant_eligible = false;
                }
            }
        }
    }

    pub fn set_promotion_target(&mut self, pos: Position) {
        self.promotion_target = Some(pos);
    }

    pub fn has_promotion_target(&self) -> bool {
        self.promotion_target.is_some()
    }

    /// Replaces the pending promotion pawn with a fresh piece of the chosen
    /// kind. Returns false when the kind is not promotable; the pending
    /// state is kept so the caller can retry.
    pub fn promote(&mut self, kind: PieceKind) -> bool {
        if !matches!(
            kind,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight | PieceKind::Queen
        ) {
            return false;
        }
        let Some(pos) = self.promotion_target else {
            return false;
        };
        let Some(pawn) = self.take(pos) else {
            return false;
        };
        self.put(pos, Piece::new(pawn.color, kind));
        self.last_move = Some(UndoRecord {
            kind: MoveKind::Promotion,
            moved: pawn,
            from: pos,
            to: pos,
            second: None,
        });
        self.promotion_target = None;
        true
    }

    fn piece_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        if !pos.is_in_bounds() {
            return None;
        }
        self.squares[(pos.rank - 1) as usize][(pos.file - 1) as usize].as_mut()
    }

    fn take(&mut self, pos: Position) -> Option<Piece> {
        if !pos.is_in_bounds() {
            return None;
        }
        self.squares[(pos.rank - 1) as usize][(pos.file - 1) as usize].take()
    }

    fn put(&mut self, pos: Position, piece: Piece) {
        if pos.is_in_bounds() {
            self.squares[(pos.rank - 1) as usize][(pos.file - 1) as usize] = Some(piece);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> Vec<(Position, Piece)> {
        vec![
            (
                Position::new(1, 5),
                Piece::new(Color::White, PieceKind::King),
            ),
            (
                Position::new(8, 5),
                Piece::new(Color::Black, PieceKind::King),
            ),
        ]
    }

    #[test]
    fn test_from_layout_rejects_bad_layouts() {
        let mut layout = kings();
        layout.push((
            Position::new(9, 1),
            Piece::new(Color::White, PieceKind::Pawn),
        ));
        assert!(matches!(
            BoardState::from_layout(layout),
            Err(ChessError::OutOfBounds(_))
        ));

        let mut layout = kings();
        layout.push((
            Position::new(8, 5),
            Piece::new(Color::Black, PieceKind::Queen),
        ));
        assert!(matches!(
            BoardState::from_layout(layout),
            Err(ChessError::SquareOccupied(_))
        ));

        let mut layout = kings();
        layout.push((
            Position::new(4, 4),
            Piece::new(Color::White, PieceKind::King),
        ));
        assert!(matches!(
            BoardState::from_layout(layout),
            Err(ChessError::ExtraKing(Color::White))
        ));

        let layout = vec![(
            Position::new(1, 5),
            Piece::new(Color::White, PieceKind::King),
        )];
        assert!(matches!(
            BoardState::from_layout(layout),
            Err(ChessError::MissingKing(Color::Black))
        ));
    }

    #[test]
    fn test_move_and_revert_round_trip() {
        let mut board = BoardState::new();
        let from = Position::new(2, 5);
        let to = Position::new(4, 5);

        board.move_piece(from, to);
        assert!(board.piece(from).is_none());
        assert_eq!(board.piece_kind(to), Some(PieceKind::Pawn));

        board.revert_last_move();
        assert_eq!(board.piece_kind(from), Some(PieceKind::Pawn));
        assert!(board.piece(to).is_none());
    }

    #[test]
    fn test_capture_revert_restores_victim() {
        let mut layout = kings();
        layout.push((
            Position::new(4, 4),
            Piece::new(Color::White, PieceKind::Rook),
        ));
        layout.push((
            Position::new(4, 8),
            Piece::new(Color::Black, PieceKind::Knight),
        ));
        let mut board = BoardState::from_layout(layout).unwrap();

        board.move_piece(Position::new(4, 4), Position::new(4, 8));
        assert_eq!(board.piece_kind(Position::new(4, 8)), Some(PieceKind::Rook));

        board.revert_last_move();
        assert_eq!(board.piece_kind(Position::new(4, 4)), Some(PieceKind::Rook));
        assert_eq!(
            board.piece(Position::new(4, 8)),
            Some(&Piece::new(Color::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn test_en_passant_revert_restores_victim() {
        let mut layout = kings();
        layout.push((
            Position::new(5, 4),
            Piece::new(Color::White, PieceKind::Pawn),
        ));
        layout.push((
            Position::new(5, 5),
            Piece::new(Color::Black, PieceKind::Pawn),
        ));
        let mut board = BoardState::from_layout(layout).unwrap();

        board.en_passant_move(Position::new(5, 4), Position::new(6, 5), Position::new(5, 5));
        assert!(board.piece(Position::new(5, 5)).is_none());
        assert_eq!(board.piece_kind(Position::new(6, 5)), Some(PieceKind::Pawn));

        board.revert_last_move();
        assert_eq!(board.piece_kind(Position::new(5, 4)), Some(PieceKind::Pawn));
        assert_eq!(
            board.piece_color(Position::new(5, 5)),
            Some(Color::Black)
        );
        assert!(board.piece(Position::new(6, 5)).is_none());
    }

    #[test]
    fn test_castle_revert_restores_both_pieces() {
        let mut layout = kings();
        layout.push((
            Position::new(1, 8),
            Piece::new(Color::White, PieceKind::Rook),
        ));
        let mut board = BoardState::from_layout(layout).unwrap();

        board.castle(
            Position::new(1, 5),
            Position::new(1, 7),
            Position::new(1, 8),
            Position::new(1, 6),
        );
        assert_eq!(board.piece_kind(Position::new(1, 7)), Some(PieceKind::King));
        assert_eq!(board.piece_kind(Position::new(1, 6)), Some(PieceKind::Rook));

        board.revert_last_move();
        assert_eq!(board.piece_kind(Position::new(1, 5)), Some(PieceKind::King));
        assert_eq!(board.piece_kind(Position::new(1, 8)), Some(PieceKind::Rook));
        assert!(board.piece(Position::new(1, 6)).is_none());
        assert!(board.piece(Position::new(1, 7)).is_none());
    }

    #[test]
    fn test_finish_move_sets_flags() {
        let mut board = BoardState::new();
        board.move_piece(Position::new(2, 5), Position::new(4, 5));
        board.finish_move(Position::new(2, 5), Position::new(4, 5));
        let pawn = board.piece(Position::new(4, 5)).unwrap();
        assert!(pawn.has_moved());
        assert!(pawn.en_passant_eligible());

        board.move_piece(Position::new(4, 5), Position::new(5, 5));
        board.finish_move(Position::new(4, 5), Position::new(5, 5));
        let pawn = board.piece(Position::new(5, 5)).unwrap();
        assert!(pawn.has_moved());
        assert!(!pawn.en_passant_eligible());
    }

    #[test]
    fn test_change_turn_closes_en_passant_window() {
        let mut board = BoardState::new();
        board.move_piece(Position::new(2, 5), Position::new(4, 5));
        board.finish_move(Position::new(2, 5), Position::new(4, 5));
        board.change_turn();
        // Black's reply window is open.
        assert!(board.piece(Position::new(4, 5)).unwrap().en_passant_eligible());
        assert_eq!(board.current_turn(), Color::Black);

        // Black moves something; when the turn comes back to White the
        // window is closed.
        board.move_piece(Position::new(7, 1), Position::new(6, 1));
        board.finish_move(Position::new(7, 1), Position::new(6, 1));
        board.change_turn();
        assert!(!board.piece(Position::new(4, 5)).unwrap().en_passant_eligible());
    }

    #[test]
    fn test_promote_replaces_pawn_in_place() {
        let mut layout = kings();
        layout.push((
            Position::new(8, 1),
            Piece::new(Color::White, PieceKind::Pawn),
        ));
        let mut board = BoardState::from_layout(layout).unwrap();
        board.set_promotion_target(Position::new(8, 1));

        assert!(!board.promote(PieceKind::King));
        assert!(board.has_promotion_target());

        assert!(board.promote(PieceKind::Queen));
        assert!(!board.has_promotion_target());
        assert_eq!(
            board.piece(Position::new(8, 1)),
            Some(&Piece::new(Color::White, PieceKind::Queen))
        );

        board.revert_last_move();
        assert_eq!(board.piece_kind(Position::new(8, 1)), Some(PieceKind::Pawn));
    }
}
