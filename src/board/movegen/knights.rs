use super::super::attack_tables::knight_attacks;
use super::super::types::{Move, MoveList, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let enemy = self.occupancy(color.opponent());
        let own = self.occupancy(color);

        for from in self.pieces(Piece::Knight, color).iter() {
            for to in (knight_attacks(from) & !own).iter() {
                if enemy.contains(to) {
                    moves.push(Move::capture(from, to));
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}
