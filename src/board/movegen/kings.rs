use super::super::attack_tables::king_attacks;
use super::super::types::{Direction, Move, MoveList, Piece, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_king_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let enemy = self.occupancy(color.opponent());
        let own = self.occupancy(color);
        let all = self.all_occupancy();

        for from in self.pieces(Piece::King, color).iter() {
            for to in (king_attacks(from) & !own).iter() {
                if enemy.contains(to) {
                    moves.push(Move::capture(from, to));
                } else {
                    moves.push(Move::quiet(from, to));
                }
            }

            // Castling legality must be established here rather than by
            // the apply-and-check filter: the filter can only see that the
            // king's final square is safe, not that the king castled out
            // of or through an attacked square. A king already in check
            // never castles.
            if self.is_check(color) {
                continue;
            }
            let opponent = color.opponent();

            let rooks = self.pieces(Piece::Rook, color);

            if self.can_castle_kingside(color) && rooks.contains(Square(from.rank(), 7)) {
                let one = from.towards(Direction::East);
                let two = one.towards(Direction::East);
                if !all.contains(one)
                    && !all.contains(two)
                    && !self.is_square_attacked(one, opponent)
                    && !self.is_square_attacked(two, opponent)
                {
                    moves.push(Move::castle_kingside(from, two));
                }
            }

            if self.can_castle_queenside(color) && rooks.contains(Square(from.rank(), 0)) {
                let one = from.towards(Direction::West);
                let two = one.towards(Direction::West);
                let three = two.towards(Direction::West);
                // `three` is crossed only by the rook, so it must be
                // vacant but may be attacked
                if !all.contains(one)
                    && !all.contains(two)
                    && !all.contains(three)
                    && !self.is_square_attacked(one, opponent)
                    && !self.is_square_attacked(two, opponent)
                {
                    moves.push(Move::castle_queenside(from, two));
                }
            }
        }
    }
}
