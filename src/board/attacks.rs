//! Check detection and square-attack queries.

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use super::types::{Bitboard, Color, Piece, Square};
use super::Board;

impl Board {
    /// The set of the given color's pieces currently attacking a square.
    ///
    /// Slider attacks are resolved against the current occupancy of both
    /// colors, so pieces shadowed by a blocker do not count.
    #[must_use]
    pub fn squares_attacking(&self, color: Color, target: Square) -> Bitboard {
        let occupancy = self.all_occupancy();
        let mut result = Bitboard::EMPTY;

        for queen in self.pieces(Piece::Queen, color).iter() {
            if queen_attacks(queen, occupancy).contains(target) {
                result.set(queen);
            }
        }

        for rook in self.pieces(Piece::Rook, color).iter() {
            if rook_attacks(rook, occupancy).contains(target) {
                result.set(rook);
            }
        }

        for bishop in self.pieces(Piece::Bishop, color).iter() {
            if bishop_attacks(bishop, occupancy).contains(target) {
                result.set(bishop);
            }
        }

        for knight in self.pieces(Piece::Knight, color).iter() {
            if knight_attacks(knight).contains(target) {
                result.set(knight);
            }
        }

        // a pawn's capture pattern covers the en-passant target square
        // exactly like any other square, so the en-passant relationship
        // needs no separate handling here
        for pawn in self.pieces(Piece::Pawn, color).iter() {
            if pawn_attacks(pawn, color).contains(target) {
                result.set(pawn);
            }
        }

        for king in self.pieces(Piece::King, color).iter() {
            if king_attacks(king).contains(target) {
                result.set(king);
            }
        }

        result
    }

    /// Whether any piece of `by` attacks the given square.
    #[inline]
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        !self.squares_attacking(by, target).is_empty()
    }

    /// Whether the given color is in check.
    ///
    /// Tolerates non-standard analysis positions: with no king on the
    /// board there is no check, and with several kings any attacked one
    /// counts.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        let kings = self.pieces(Piece::King, color);
        if kings.is_empty() {
            return false;
        }

        kings
            .iter()
            .any(|king| self.is_square_attacked(king, color.opponent()))
    }
}
