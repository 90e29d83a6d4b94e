use super::super::attack_tables::pawn_attacks;
use super::super::types::{Move, MoveList, Piece};
use super::super::Board;

const PROMOTION_PIECES: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

impl Board {
    pub(crate) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let color = self.side_to_move;
        let enemy = self.occupancy(color.opponent());
        let all = self.all_occupancy();
        let push = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        for from in self.pieces(Piece::Pawn, color).iter() {
            // single push, branching into promotions on the back rank
            let target = from.towards(push);
            if !all.contains(target) {
                if target.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion_move(from, target, promo));
                    }
                } else {
                    moves.push(Move::quiet(from, target));

                    // double push from the starting rank, both squares vacant
                    if from.rank() == start_rank {
                        let two = target.towards(push);
                        if !all.contains(two) {
                            moves.push(Move::double_pawn_push(from, two));
                        }
                    }
                }
            }

            // diagonal captures against enemy-occupied attack squares
            for attack in pawn_attacks(from, color).iter() {
                if enemy.contains(attack) {
                    if attack.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::promotion_capture(from, attack, promo));
                        }
                    } else {
                        moves.push(Move::capture(from, attack));
                    }
                }
            }

            // en passant: the pawn moves onto the target square itself;
            // the captured pawn sits behind it
            if let Some(ep) = self.en_passant_target {
                if pawn_attacks(from, color).contains(ep) {
                    moves.push(Move::en_passant(from, ep));
                }
            }
        }
    }
}
