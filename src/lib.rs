//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the top-level subsystems (board geometry, core game
//! state, per-piece movement rules, and the rules engine itself) so
//! presentation layers, tests, and benches can import stable module paths.
//!
//! The crate contains no UI concerns: callers translate their own coordinate
//! conventions into [`geometry::position::Position`] values, drive the game
//! through [`rules::chess_rules::ChessRules`], and render the snapshot grid
//! returned by `visual_board` however they like.

pub mod game_state {
    pub mod board_state;
    pub mod chess_types;
    pub mod layout;
    pub mod undo_state;
}

pub mod geometry {
    pub mod direction;
    pub mod position;
}

pub mod pieces {
    pub mod king;
    pub mod knight;
    pub mod pawn;
    pub mod piece;
    pub mod sliding;
}

pub mod rules {
    pub mod attack;
    pub mod chess_rules;
    pub mod classification;
}

pub mod errors;
