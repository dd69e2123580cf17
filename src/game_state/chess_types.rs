//! Core value types shared across the crate.
//!
//! Empty squares are represented with `Option` at every API boundary rather
//! than with sentinel enum variants, so [`Color`] and [`PieceKind`] only
//! ever describe real pieces. Per-kind mutable flags live in the
//! [`PieceState`] tagged variant: each kind stores exactly the flags its
//! rules need and nothing else.

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::undo_state::{MoveKind, UndoRecord};

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank of this side's back rank (king and rook home squares).
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Rank a pawn of this color promotes on (the opponent's home rank).
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.opposite().home_rank()
    }

    /// Rank delta of a single forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Kind tag plus the mutable flags relevant to that kind.
///
/// `has_moved` is one-way: set on the first committed move and never reset.
/// `en_passant_eligible` is true only between a pawn's two-square advance
/// and the end of the opponent's immediately following turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    Pawn {
        has_moved: bool,
        en_passant_eligible: bool,
    },
    Knight,
    Bishop,
    Rook {
        has_moved: bool,
    },
    Queen,
    King {
        has_moved: bool,
    },
}

impl PieceState {
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PieceState::Pawn { .. } => PieceKind::Pawn,
            PieceState::Knight => PieceKind::Knight,
            PieceState::Bishop => PieceKind::Bishop,
            PieceState::Rook { .. } => PieceKind::Rook,
            PieceState::Queen => PieceKind::Queen,
            PieceState::King { .. } => PieceKind::King,
        }
    }
}

/// A piece on the board. Placement is owned by the board's occupancy grid,
/// not by the piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub state: PieceState,
}

impl Piece {
    /// Fresh piece of the given kind with untouched flags.
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        let state = match kind {
            PieceKind::Pawn => PieceState::Pawn {
                has_moved: false,
                en_passant_eligible: false,
            },
            PieceKind::Knight => PieceState::Knight,
            PieceKind::Bishop => PieceState::Bishop,
            PieceKind::Rook => PieceState::Rook { has_moved: false },
            PieceKind::Queen => PieceState::Queen,
            PieceKind::King => PieceState::King { has_moved: false },
        };
        Piece { color, state }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.state.kind()
    }

    /// Movement flag for the kinds that track one; false for the rest.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        match self.state {
            PieceState::Pawn { has_moved, .. }
            | PieceState::Rook { has_moved }
            | PieceState::King { has_moved } => has_moved,
            _ => false,
        }
    }

    /// True for a pawn that double-stepped on its owner's last move.
    #[inline]
    pub const fn en_passant_eligible(&self) -> bool {
        matches!(
            self.state,
            PieceState::Pawn {
                en_passant_eligible: true,
                ..
            }
        )
    }
}

/// The two castling corners, named from White's perspective for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    /// File of this side's rook corner.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::Queenside => 1,
            CastleSide::Kingside => 8,
        }
    }

    /// File the king lands on when castling to this side.
    #[inline]
    pub const fn king_destination_file(self) -> i8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => 7,
        }
    }
}

/// Outcome of a `make_move` / `promote` request.
///
/// Rejections leave the board, the turn, and every piece flag untouched.
/// `Promotion` means a pawn reached the far rank and the turn will not
/// advance until `promote` resolves it. `Checkmate` and `Stalemate` are
/// terminal for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Valid,
    Check,
    Checkmate,
    Stalemate,
    Promotion,
    InvalidOutOfBounds,
    InvalidNoPiece,
    InvalidWrongColor,
    Invalid,
    InvalidChecked,
    NoPromotion,
    IncorrectPromotion,
}

impl MoveResult {
    /// True for every code that rejected the request without mutating state.
    #[inline]
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            MoveResult::InvalidOutOfBounds
                | MoveResult::InvalidNoPiece
                | MoveResult::InvalidWrongColor
                | MoveResult::Invalid
                | MoveResult::InvalidChecked
                | MoveResult::NoPromotion
                | MoveResult::IncorrectPromotion
        )
    }
}
