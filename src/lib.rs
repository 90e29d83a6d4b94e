//! A chess rules engine built on bitboards.
//!
//! This crate implements the rules of chess completely enough to serve as
//! the foundation of a full engine: position representation, FEN parsing,
//! pseudo-legal and legal move generation, check detection, and perft
//! (exhaustive move-tree enumeration used to verify and benchmark the move
//! generator). It deliberately contains no search and no evaluation.
//!
//! # Example
//! ```
//! use chess_rules::{perft, Board};
//!
//! let board = Board::new();
//! assert_eq!(board.generate_moves().len(), 20);
//!
//! let results = perft(&board.to_fen(), 2).unwrap();
//! assert_eq!(results.nodes, 400);
//! ```

pub mod board;
pub mod perft;

pub use board::{
    Bitboard, Board, BoardBuilder, CastlingRights, Color, Direction, FenError, Move, MoveList,
    MoveParseError, Piece, Square, SquareError,
};
pub use perft::{perft, perft_parallel, PerftError, PerftResults};

/// Forces construction of the precomputed attack tables.
///
/// The tables are built lazily on first use and the build is guarded, so
/// calling this is never required for correctness. It is useful before
/// timing-sensitive work (benchmarks, the CLI) to keep the one-time build
/// cost out of the measured path.
pub fn initialize() {
    board::initialize_attack_tables();
}
