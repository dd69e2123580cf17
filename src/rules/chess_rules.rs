//! The rules engine facade.
//!
//! [`ChessRules`] owns a [`BoardState`] and drives every move through the
//! same pipeline: validate the request, apply it speculatively, reject and
//! revert if the mover's own king ends up attacked, otherwise commit the
//! flags and classify the resulting position for the side now to move.
//! Outcomes are reported as [`MoveResult`] codes rather than errors; a
//! rejected move leaves the game exactly as it was.

use crate::errors::ChessError;
use crate::game_state::chess_types::{
    BoardState, CastleSide, Color, MoveResult, Piece, PieceKind,
};
use crate::geometry::position::Position;
use crate::pieces::king;

#[derive(Debug, Clone)]
pub struct ChessRules {
    board: BoardState,
}

impl ChessRules {
    /// A fresh game from the standard starting position, White to move.
    pub fn new() -> Self {
        ChessRules {
            board: BoardState::new(),
        }
    }

    /// A game from an arbitrary position.
    ///
    /// # Arguments
    ///
    /// * `layout` - `(Position, Piece)` pairs; every position must be in
    ///   bounds and distinct, and each color must field exactly one king.
    ///
    /// # Returns
    ///
    /// * `Result<ChessRules, ChessError>` - the game, White to move, or the
    ///   first layout validation failure.
    pub fn from_layout(layout: Vec<(Position, Piece)>) -> Result<Self, ChessError> {
        Ok(ChessRules {
            board: BoardState::from_layout(layout)?,
        })
    }

    #[inline]
    pub(crate) fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.board.current_turn()
    }

    /// True iff `pos` is one of the 64 board squares.
    #[inline]
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_in_bounds()
    }

    #[inline]
    pub fn piece_color(&self, pos: Position) -> Option<Color> {
        self.board.piece_color(pos)
    }

    #[inline]
    pub fn piece_kind(&self, pos: Position) -> Option<PieceKind> {
        self.board.piece_kind(pos)
    }

    /// Kind and color of the occupant of `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<(PieceKind, Color)> {
        self.board
            .piece(pos)
            .map(|piece| (piece.kind(), piece.color))
    }

    /// A plain snapshot of the board for rendering, indexed
    /// `[rank - 1][file - 1]`.
    pub fn visual_board(&self) -> [[Option<(PieceKind, Color)>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (pos, piece) in self.board.pieces() {
            grid[(pos.rank - 1) as usize][(pos.file - 1) as usize] =
                Some((piece.kind(), piece.color));
        }
        grid
    }

    /// Attempts the move `from` -> `to` for the side to move.
    ///
    /// # Returns
    ///
    /// * `MoveResult` - a rejection code with the game untouched, or the
    ///   classification of the opponent's position after the move:
    ///   [`MoveResult::Valid`], [`MoveResult::Check`],
    ///   [`MoveResult::Checkmate`], [`MoveResult::Stalemate`], or
    ///   [`MoveResult::Promotion`] when a pawn reached its last rank and
    ///   [`ChessRules::promote`] must be called before the next move.
    pub fn make_move(&mut self, from: Position, to: Position) -> MoveResult {
        if self.board.has_promotion_target() {
            return MoveResult::Promotion;
        }
        let result = self.check_move_validity(from, to);
        if result.is_rejection() {
            return result;
        }
        // The validity check guarantees the occupant.
        let Some(piece) = self.board.piece(from).copied() else {
            return MoveResult::InvalidNoPiece;
        };

        if piece.kind() == PieceKind::King && king::is_castling_attempt(&piece, from, to) {
            return self.execute_castling(from, to);
        }
        self.execute_movement(&piece, from, to)
    }

    /// Resolves a pending pawn promotion by replacing the pawn with `kind`.
    ///
    /// # Returns
    ///
    /// * `MoveResult` - [`MoveResult::NoPromotion`] when nothing is pending,
    ///   [`MoveResult::IncorrectPromotion`] for a non-promotable kind (the
    ///   promotion stays pending), otherwise the classification of the
    ///   opponent's position.
    pub fn promote(&mut self, kind: PieceKind) -> MoveResult {
        if !self.board.has_promotion_target() {
            return MoveResult::NoPromotion;
        }
        if !self.board.promote(kind) {
            return MoveResult::IncorrectPromotion;
        }
        self.board.change_turn();
        self.classify_position(self.current_turn())
    }

    /// True when a `color` pawn landing on the empty square `pos` captures
    /// en passant: an eligible enemy pawn sits on the square it just passed.
    pub fn is_en_passant(&self, pos: Position, color: Color) -> bool {
        let capture_rank = match color {
            Color::White => 6,
            Color::Black => 3,
        };
        if pos.rank != capture_rank {
            return false;
        }
        let passed = Position::new(capture_rank - color.forward(), pos.file);
        match self.board.piece(passed) {
            Some(piece) => {
                piece.color == color.opposite()
                    && piece.kind() == PieceKind::Pawn
                    && piece.en_passant_eligible()
            }
            None => false,
        }
    }

    /// True unless a `color` rook that has never moved sits on the `side`
    /// corner. An absent or foreign piece counts as moved.
    pub fn has_rook_moved(&self, color: Color, side: CastleSide) -> bool {
        let corner = Position::new(color.home_rank(), side.rook_file());
        match self.board.piece(corner) {
            Some(piece) => {
                piece.color != color || piece.kind() != PieceKind::Rook || piece.has_moved()
            }
            None => true,
        }
    }

    /// Cheap request screening, before any piece logic runs.
    fn check_move_validity(&self, from: Position, to: Position) -> MoveResult {
        if !from.is_in_bounds() || !to.is_in_bounds() {
            return MoveResult::InvalidOutOfBounds;
        }
        let Some(piece) = self.board.piece(from) else {
            return MoveResult::InvalidNoPiece;
        };
        if piece.color != self.current_turn() {
            return MoveResult::InvalidWrongColor;
        }
        if !piece.is_valid_move(self, from, to, false) {
            return MoveResult::Invalid;
        }
        MoveResult::Valid
    }

    /// Commits a pre-validated castling request. The rook lands one file
    /// inside the king's destination, on the side it came from.
    fn execute_castling(&mut self, from: Position, to: Position) -> MoveResult {
        let side = if to.file < from.file {
            CastleSide::Queenside
        } else {
            CastleSide::Kingside
        };
        let rook_from = Position::new(from.rank, side.rook_file());
        let rook_to = match side {
            CastleSide::Queenside => to.offset(0, 1),
            CastleSide::Kingside => to.offset(0, -1),
        };
        self.board.castle(from, to, rook_from, rook_to);
        self.board.finish_move(from, to);
        self.board.finish_move(rook_from, rook_to);
        self.board.change_turn();
        self.classify_position(self.current_turn())
    }

    /// Applies an ordinary move speculatively, reverts it when it leaves
    /// the mover's own king attacked, otherwise commits and classifies.
    fn execute_movement(&mut self, piece: &Piece, from: Position, to: Position) -> MoveResult {
        let en_passant = piece.kind() == PieceKind::Pawn
            && from.file != to.file
            && self.board.piece(to).is_none()
            && self.is_en_passant(to, piece.color);
        if en_passant {
            let victim = Position::new(from.rank, to.file);
            self.board.en_passant_move(from, to, victim);
        } else {
            self.board.move_piece(from, to);
        }

        let exposed = if piece.kind() == PieceKind::King {
            self.is_position_under_attack(to, piece.color)
        } else {
            self.is_in_check(piece.color)
        };
        if exposed {
            self.board.revert_last_move();
            return MoveResult::InvalidChecked;
        }

        self.board.finish_move(from, to);
        if piece.kind() == PieceKind::Pawn && to.rank == piece.color.promotion_rank() {
            self.board.set_promotion_target(to);
            return MoveResult::Promotion;
        }
        self.board.change_turn();
        self.classify_position(self.current_turn())
    }
}

impl Default for ChessRules {
    fn default() -> Self {
        Self::new()
    }
}
