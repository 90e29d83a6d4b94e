//! Pseudo-legal and legal move generation.
//!
//! Generation is pseudo-legal: a produced move conforms to piece movement
//! rules but may still leave the mover's own king in check. Legality is
//! established by applying the move to a clone and querying check on the
//! result, so the generator never reasons about pins or discovered checks
//! directly. Castling is the one exception where attack queries happen at
//! generation time, because a broken castle cannot be detected from the
//! resulting position alone.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::MoveList;
use super::Board;

impl Board {
    /// Generate every pseudo-legal move for the side to move.
    #[must_use]
    pub fn generate_pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(&mut moves);
        self.generate_king_moves(&mut moves);
        moves
    }

    /// Generate every legal move for the side to move.
    ///
    /// Filters the pseudo-legal set by applying each move to a clone and
    /// rejecting those that leave the mover in check.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let mut legal = MoveList::new();

        for &mv in &self.generate_pseudo_legal_moves() {
            let mut child = self.clone();
            child.apply_move(mv);
            if !child.is_check(mover) {
                legal.push(mv);
            }
        }

        legal
    }

    /// Whether the side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Whether the side to move is stalemated.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check(self.side_to_move) && self.generate_moves().is_empty()
    }
}
