use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::types::{Bitboard, Move, MoveList, Piece, Square};
use super::super::Board;

type AttackFn = fn(Square, Bitboard) -> Bitboard;

impl Board {
    pub(crate) fn generate_slider_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let enemy = self.occupancy(color.opponent());
        let own = self.occupancy(color);
        let occupancy = self.all_occupancy();

        let sliders: [(Piece, AttackFn); 3] = [
            (Piece::Bishop, bishop_attacks),
            (Piece::Rook, rook_attacks),
            (Piece::Queen, queen_attacks),
        ];

        for (kind, attacks) in sliders {
            for from in self.pieces(kind, color).iter() {
                for to in (attacks(from, occupancy) & !own).iter() {
                    if enemy.contains(to) {
                        moves.push(Move::capture(from, to));
                    } else {
                        moves.push(Move::quiet(from, to));
                    }
                }
            }
        }
    }
}
