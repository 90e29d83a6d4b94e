//! Chess board representation and rules.
//!
//! Uses bitboards throughout: each position holds six piece-kind boards
//! per color plus a per-color union cache, and all move generation and
//! attack queries are driven by precomputed attack tables.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! assert!(!board.is_check(Color::White));
//! ```

mod apply;
mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Direction, Move, MoveList, Piece, Square,
};

/// Forces construction of the precomputed attack tables.
pub fn initialize_attack_tables() {
    attack_tables::initialize();
}
